//! Loader operations for the WASM API
//!
//! JavaScript-facing entry points for the two inlining strategies. The
//! batch path rejects on a failed fetch so animation setup never runs
//! against half-loaded markup; the single-document path reports its own
//! failures and always resolves.

use wasm_bindgen::prelude::*;

use crate::api::helpers;
use crate::loader::{self, LoadError};
use crate::models::SvgRequest;

/// Fetch a batch of SVG documents concurrently and substitute each body
/// into its container once every fetch has succeeded.
///
/// `requests` is an array of `{url, container}` objects. The returned
/// promise rejects if any fetch fails, with no container mutated.
#[wasm_bindgen(js_name = loadSvgBatch)]
pub async fn load_svg_batch(requests: JsValue) -> Result<(), JsValue> {
    let requests: Vec<SvgRequest> = helpers::deserialize(requests, "invalid SVG request list")?;
    let window = helpers::window()?;

    loader::load_svg_batch(&window, &requests)
        .await
        .map_err(|err| {
            log::error!("SVG batch load aborted: {}", err);
            JsValue::from_str(&err.to_string())
        })
}

/// Fetch one SVG document and inline only its root `<svg>` element into
/// the container.
///
/// Failures are reported to the console and the promise still resolves:
/// a broken logo asset degrades to an empty container, not a broken
/// page.
#[wasm_bindgen(js_name = inlineSvg)]
pub async fn inline_svg(url: String, container: String) -> Result<(), JsValue> {
    let window = helpers::window()?;
    let request = SvgRequest::new(url, container);

    match loader::inline_svg(&window, &request).await {
        Ok(()) => {}
        Err(err @ LoadError::FetchFailure { .. }) => log::error!("{}", err),
        Err(err) => log::warn!("inline skipped: {}", err),
    }
    Ok(())
}
