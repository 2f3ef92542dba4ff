//! Logo Animation Bootstrap WASM Module
//!
//! Loads SVG logo artwork into the page and decides how the animation
//! timeline should play: looping with debug controls for a person, or
//! a single finite run for automated video capture.

pub mod api;
pub mod gate;
pub mod loader;
pub mod models;
pub mod parse;
pub mod utils;

// Re-export commonly used types
pub use loader::LoadError;
pub use models::{ExportMode, PlaybackSettings, SvgRequest};
pub use parse::SvgParseError;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Logo animation WASM module initialized");
}
