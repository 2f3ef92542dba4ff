//! Data models for the logo animation bootstrap
//!
//! This module contains the plain data that crosses the JavaScript
//! boundary: fetch-and-inline requests and the playback configuration
//! derived from the export mode.

pub mod playback;
pub mod request;

// Re-export commonly used types
pub use playback::{ExportMode, PlaybackSettings};
pub use request::SvgRequest;
