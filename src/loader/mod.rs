//! SVG loading and inlining
//!
//! Fetches SVG documents over the network and lands them in their
//! target containers. The batch path substitutes response bodies
//! verbatim after an all-or-nothing join; the single-document path
//! parses the body and inlines only the root `<svg>` element,
//! independently of any other in-flight load.

pub mod errors;
pub mod fetch;
pub mod inline;

pub use errors::LoadError;

use web_sys::Window;

use crate::models::SvgRequest;
use crate::utils::timing;

/// Fetch every request concurrently and, once all responses have
/// arrived, replace each container's contents with its body, in
/// request order.
///
/// A single failed fetch aborts the batch before any DOM mutation. A
/// missing container only skips its own substitution; every other
/// container still receives its body.
pub async fn load_svg_batch(window: &Window, requests: &[SvgRequest]) -> Result<(), LoadError> {
    let document = match window.document() {
        Some(document) => document,
        None => {
            log::warn!(
                "no document available; skipping batch of {} SVG load(s)",
                requests.len()
            );
            return Ok(());
        }
    };

    let started = timing::now_ms(window);
    let urls: Vec<String> = requests.iter().map(|r| r.url.clone()).collect();
    let bodies = fetch::fetch_all_text(window, &urls).await?;

    for (request, body) in requests.iter().zip(bodies.iter()) {
        match inline::substitute_raw(&document, &request.container, body) {
            Ok(()) => {}
            Err(LoadError::MissingContainer { selector }) => {
                log::warn!("container {:?} not found; skipping {}", selector, request.url);
            }
            Err(err) => return Err(err),
        }
    }

    log::debug!(
        "inlined {} SVG document(s) in {:.1}ms",
        requests.len(),
        timing::now_ms(window) - started
    );
    Ok(())
}

/// Fetch one request and inline only the root `<svg>` element of the
/// body into its container.
///
/// Runs independently of any other in-flight load; a failure here
/// affects nothing else on the page.
pub async fn inline_svg(window: &Window, request: &SvgRequest) -> Result<(), LoadError> {
    let document = match window.document() {
        Some(document) => document,
        None => {
            log::warn!("no document available; skipping inline of {}", request.url);
            return Ok(());
        }
    };

    let body = fetch::fetch_text(window, &request.url).await?;
    inline::inline_parsed(&document, &request.container, &request.url, &body)
}
