//! Logo Animation WASM API
//!
//! This module provides the JavaScript-facing API for the animation
//! bootstrap: SVG loading, export-mode detection, playback
//! configuration, and readiness signaling.
//!
//! # Module Structure
//!
//! - `helpers`: serialization and error-context utilities
//! - `loader`: fetch-and-inline entry points
//! - `playback`: export-mode gate and playback configuration

pub mod helpers;
pub mod loader;
pub mod playback;

// Re-export all public functions so JavaScript-facing entry points live
// in one place
pub use loader::{inline_svg, load_svg_batch};
pub use playback::{detect_export_mode, on_document_ready, playback_settings, signal_export_ready};
