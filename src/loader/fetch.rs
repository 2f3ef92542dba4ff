//! Browser fetch plumbing
//!
//! One HTTP GET per SVG URL, no custom headers, no retry. A request
//! that never settles stalls its own path; no timeout is applied.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

use super::errors::LoadError;

/// Fetch a URL and return its body as text.
///
/// A network error or non-2xx status is reported as `FetchFailure`
/// carrying the failing URL.
pub async fn fetch_text(window: &Window, url: &str) -> Result<String, LoadError> {
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|_| fetch_failure(url))?;
    read_body(response, url).await
}

/// Fetch every URL and collect the bodies in input order.
///
/// All fetch promises are created before the first await, so every
/// request is on the wire at once; the loop below only gathers results.
/// Any failure aborts the whole collection: callers see either every
/// body or none.
pub async fn fetch_all_text(window: &Window, urls: &[String]) -> Result<Vec<String>, LoadError> {
    let in_flight: Vec<(&str, JsFuture)> = urls
        .iter()
        .map(|url| (url.as_str(), JsFuture::from(window.fetch_with_str(url))))
        .collect();

    let mut bodies = Vec::with_capacity(in_flight.len());
    for (url, pending) in in_flight {
        let response = pending.await.map_err(|_| fetch_failure(url))?;
        bodies.push(read_body(response, url).await?);
    }
    Ok(bodies)
}

async fn read_body(response: JsValue, url: &str) -> Result<String, LoadError> {
    let response: Response = response.dyn_into().map_err(|_| fetch_failure(url))?;
    if !response.ok() {
        return Err(fetch_failure(url));
    }

    let body = JsFuture::from(response.text().map_err(|_| fetch_failure(url))?)
        .await
        .map_err(|_| fetch_failure(url))?;
    Ok(body.as_string().unwrap_or_default())
}

fn fetch_failure(url: &str) -> LoadError {
    LoadError::FetchFailure {
        url: url.to_string(),
    }
}
