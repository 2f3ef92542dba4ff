//! Export-mode gate and playback configuration for the WASM API

use wasm_bindgen::prelude::*;

use crate::api::helpers;
use crate::gate::{resolve_export_mode, HeadlessDetector};
use crate::models::{ExportMode, PlaybackSettings};
use crate::utils::ready;

/// Window property an export pre-script sets before this module runs
pub const PRESCRIPT_FLAG_PROPERTY: &str = "isExporting";

/// Decide whether this page load is an automated capture run.
///
/// Reads the pre-script flag and the user-agent string, then resolves
/// them with the default headless signature set. Pass the result into
/// `playbackSettings`.
#[wasm_bindgen(js_name = detectExportMode)]
pub fn detect_export_mode() -> Result<bool, JsValue> {
    let window = helpers::window()?;

    let prescript_flag = js_sys::Reflect::get(&window, &PRESCRIPT_FLAG_PROPERTY.into())
        .ok()
        .and_then(|value| value.as_bool());
    let user_agent = window.navigator().user_agent().unwrap_or_default();

    let detector = HeadlessDetector::default();
    let mode = resolve_export_mode(prescript_flag, detector.matches(&user_agent));
    log::info!("export mode resolved: {:?}", mode);
    Ok(mode.is_export())
}

/// Playback configuration for the animation engine.
///
/// Export runs play the timeline once with no debug panel; interactive
/// runs loop with a short delay between repeats and attach the debug
/// panel.
#[wasm_bindgen(js_name = playbackSettings)]
pub fn playback_settings(is_exporting: bool) -> Result<JsValue, JsValue> {
    let settings = PlaybackSettings::for_mode(ExportMode::from_flag(is_exporting));
    helpers::serialize(&settings, "failed to serialize playback settings")
}

/// Dispatch the `export-ready` event the capture harness waits on.
#[wasm_bindgen(js_name = signalExportReady)]
pub fn signal_export_ready() -> Result<(), JsValue> {
    let window = helpers::window()?;
    ready::dispatch_export_ready(&window)
}

/// Invoke `callback` once the document has finished parsing
/// (immediately if it already has).
#[wasm_bindgen(js_name = onDocumentReady)]
pub fn on_document_ready(callback: js_sys::Function) -> Result<(), JsValue> {
    let window = helpers::window()?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    ready::on_document_ready(&document, move || {
        if let Err(err) = callback.call0(&JsValue::NULL) {
            log::error!("document-ready callback failed: {:?}", err);
        }
    })
}
