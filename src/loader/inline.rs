//! DOM inlining strategies
//!
//! Two ways of landing fetched markup in a container: raw substitution
//! (verbatim body, used by batch loads) and parsed inline (only the
//! root `<svg>` element, used where structural cleanliness matters).

use web_sys::{Document, Element};

use super::errors::LoadError;
use crate::parse;

/// Replace the container's entire contents with the body, verbatim.
pub fn substitute_raw(document: &Document, selector: &str, body: &str) -> Result<(), LoadError> {
    let container = find_container(document, selector)?;
    container.set_inner_html(body);
    Ok(())
}

/// Clear the container and inject exactly the root `<svg>` element of
/// the body, dropping any prolog or surrounding nodes.
///
/// The body is parsed before the container is touched, so a malformed
/// document mutates nothing.
pub fn inline_parsed(
    document: &Document,
    selector: &str,
    url: &str,
    body: &str,
) -> Result<(), LoadError> {
    let svg = parse::extract_svg_root(body).map_err(|source| LoadError::MalformedSvg {
        url: url.to_string(),
        source,
    })?;

    let container = find_container(document, selector)?;
    container.set_inner_html(svg);
    Ok(())
}

fn find_container(document: &Document, selector: &str) -> Result<Element, LoadError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| LoadError::MissingContainer {
            selector: selector.to_string(),
        })
}
