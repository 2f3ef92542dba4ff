// Tests for reducing fetched SVG bodies to their root <svg> element

use logo_anim_wasm::parse::{extract_svg_root, SvgParseError};

#[test]
fn extracts_plain_svg_document() {
    let body = "<svg><circle/></svg>";
    assert_eq!(extract_svg_root(body), Ok("<svg><circle/></svg>"));
}

#[test]
fn strips_xml_prolog() {
    let body = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg viewBox=\"0 0 10 10\"><rect/></svg>";
    assert_eq!(
        extract_svg_root(body),
        Ok("<svg viewBox=\"0 0 10 10\"><rect/></svg>")
    );
}

#[test]
fn strips_surrounding_comments() {
    let body = "<!-- exported from a design tool -->\n<svg><path d=\"M0 0\"/></svg>\n<!-- end -->";
    assert_eq!(extract_svg_root(body), Ok("<svg><path d=\"M0 0\"/></svg>"));
}

#[test]
fn matches_namespaced_svg_root() {
    let body = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"64\"><g id=\"logoGroup\"/></svg>";
    assert_eq!(extract_svg_root(body), Ok(body));
}

#[test]
fn finds_svg_nested_in_wrapper_markup() {
    let body = "<wrapper><svg><circle/></svg></wrapper>";
    assert_eq!(extract_svg_root(body), Ok("<svg><circle/></svg>"));
}

#[test]
fn preserves_nested_content_byte_for_byte() {
    let drawing = "<svg height=\"10\">\n  <g>\n    <circle cx=\"5\" cy=\"5\" r=\"4\"/>\n  </g>\n</svg>";
    let body = format!("<?xml version=\"1.0\"?>\n{}", drawing);
    assert_eq!(extract_svg_root(&body), Ok(drawing));
}

#[test]
fn body_without_svg_element_is_reported() {
    let result = extract_svg_root("<div>not a drawing</div>");
    assert_eq!(result, Err(SvgParseError::MissingSvgElement));
}

#[test]
fn truncated_markup_is_invalid() {
    let result = extract_svg_root("<html><body>404 page");
    assert!(matches!(result, Err(SvgParseError::InvalidXml(_))));
}

#[test]
fn plain_text_error_page_is_invalid() {
    let result = extract_svg_root("Not Found");
    assert!(matches!(result, Err(SvgParseError::InvalidXml(_))));
}
