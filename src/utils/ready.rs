//! Document-readiness and export-readiness signals
//!
//! The capture harness runs a pre-script before this module loads and
//! then waits for an `export-ready` event; interactive pages just need
//! their setup deferred until `DOMContentLoaded`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, Window};

/// Event name the capture harness listens for
pub const EXPORT_READY_EVENT: &str = "export-ready";

/// Run `callback` once the document has finished parsing.
///
/// Fires immediately when the document is already past `loading`,
/// otherwise registers a one-shot `DOMContentLoaded` listener.
pub fn on_document_ready(
    document: &Document,
    callback: impl FnOnce() + 'static,
) -> Result<(), JsValue> {
    if document.ready_state() == "loading" {
        let listener = Closure::once(callback);
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            listener.as_ref().unchecked_ref(),
        )?;
        // The browser owns the listener for the rest of the page lifetime.
        listener.forget();
    } else {
        callback();
    }
    Ok(())
}

/// Announce to the capture harness that the page is ready for recording.
pub fn dispatch_export_ready(window: &Window) -> Result<(), JsValue> {
    let event = Event::new(EXPORT_READY_EVENT)?;
    window.dispatch_event(&event)?;
    Ok(())
}
