//! SVG document parsing
//!
//! Fetched SVG bodies arrive as text and may carry an XML prolog,
//! comments, or wrapper markup around the drawing itself. This module
//! locates the root `<svg>` element so the loader can inject exactly
//! that element and nothing else.

use roxmltree::Document as XmlDocument;
use thiserror::Error;

/// Why a fetched body could not be reduced to a root `<svg>` element
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SvgParseError {
    /// The body is not well-formed XML
    #[error("invalid SVG document: {0}")]
    InvalidXml(String),

    /// The body parsed but contains no `<svg>` element
    #[error("document contains no <svg> element")]
    MissingSvgElement,
}

/// Extract the root `<svg>` element from an SVG document body.
///
/// Returns the byte-exact `<svg>…</svg>` slice of the input, with any
/// XML prolog, doctype, or surrounding comments stripped. The first
/// `<svg>` element wins, wherever it sits in the tree, so exports
/// wrapped in extra markup still resolve.
pub fn extract_svg_root(text: &str) -> Result<&str, SvgParseError> {
    let doc = XmlDocument::parse(text).map_err(|e| SvgParseError::InvalidXml(e.to_string()))?;

    let svg = doc
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name() == "svg")
        .ok_or(SvgParseError::MissingSvgElement)?;

    Ok(&text[svg.range()])
}
