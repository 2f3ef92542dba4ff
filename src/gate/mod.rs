//! Export-mode detection
//!
//! An automated capture run is recognized from either of two signals: a
//! pre-script that sets an explicit flag before this module runs, or a
//! headless-browser signature in the user-agent string. Resolution is
//! pure so the strategy can be exercised without a browser; the API
//! layer reads the browser-side inputs and threads the result into the
//! playback configuration.

use crate::models::ExportMode;

/// User-agent signature of the headless browser used for capture runs
pub const HEADLESS_SIGNATURE: &str = "HeadlessChrome";

/// Substring matcher over the environment's identifying string.
///
/// The signature list is injectable so the detection strategy can be
/// swapped or tested without a real browser.
#[derive(Clone, Debug)]
pub struct HeadlessDetector {
    signatures: Vec<String>,
}

impl HeadlessDetector {
    pub fn new(signatures: Vec<String>) -> Self {
        Self { signatures }
    }

    /// True when the user-agent string carries any known signature
    pub fn matches(&self, user_agent: &str) -> bool {
        self.signatures
            .iter()
            .any(|sig| user_agent.contains(sig.as_str()))
    }
}

impl Default for HeadlessDetector {
    fn default() -> Self {
        Self::new(vec![HEADLESS_SIGNATURE.to_string()])
    }
}

/// Resolve the playback context from the two detection signals.
///
/// An explicit pre-script flag wins outright; otherwise a headless match
/// selects export. Absence of both defaults to interactive, the safe
/// choice for local development.
pub fn resolve_export_mode(prescript_flag: Option<bool>, headless: bool) -> ExportMode {
    match prescript_flag {
        Some(flag) => ExportMode::from_flag(flag),
        None => ExportMode::from_flag(headless),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_flag_falls_back_to_sniffing() {
        assert_eq!(resolve_export_mode(None, true), ExportMode::Export);
        assert_eq!(resolve_export_mode(None, false), ExportMode::Interactive);
    }

    #[test]
    fn explicit_flag_overrides_sniffing() {
        assert_eq!(resolve_export_mode(Some(true), false), ExportMode::Export);
        assert_eq!(
            resolve_export_mode(Some(false), true),
            ExportMode::Interactive
        );
    }
}
