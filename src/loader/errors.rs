//! Error types for SVG loading
//!
//! Nothing here is fatal to the page: a fetch failure aborts its own
//! batch, and the parse/container conditions degrade to a skipped
//! inline step.

use thiserror::Error;

use crate::parse::SvgParseError;

/// Errors surfaced by the fetch-and-inline paths
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    /// Network failure or non-2xx response
    #[error("fetch failed for {url}")]
    FetchFailure { url: String },

    /// Fetched body could not be reduced to a root `<svg>` element
    #[error("malformed SVG from {url}: {source}")]
    MalformedSvg {
        url: String,
        #[source]
        source: SvgParseError,
    },

    /// Container selector resolved to no element
    #[error("no container matches selector {selector:?}")]
    MissingContainer { selector: String },
}
