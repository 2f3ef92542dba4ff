//! Fetch-and-inline request description

use serde::{Deserialize, Serialize};

/// One fetch-and-inline task: which URL to load and which container
/// receives the markup. Immutable once created, consumed once.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SvgRequest {
    /// URL of the SVG document to fetch
    pub url: String,

    /// CSS selector for the container that receives the markup
    pub container: String,
}

impl SvgRequest {
    /// Create a new request
    pub fn new(url: String, container: String) -> Self {
        Self { url, container }
    }
}
