//! Wall-clock timing
//!
//! Thin wrapper over `performance.now()` for load-duration diagnostics.

use web_sys::Window;

/// Milliseconds since page origin, or 0.0 when the Performance API is
/// unavailable.
pub fn now_ms(window: &Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}
