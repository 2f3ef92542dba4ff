//! Playback configuration for the animation engine
//!
//! The timeline itself is declarative configuration owned by the
//! JavaScript side. This module only decides between the two playback
//! shapes: a finite run for automated capture, or a looping run with
//! debug controls for a person watching in a normal browser.

use serde::{Deserialize, Serialize};

/// Execution context of the current page load
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportMode {
    /// Automated capture: the timeline must end on its own
    Export,

    /// Normal viewing: the timeline may loop indefinitely
    Interactive,
}

impl ExportMode {
    /// Build from the boolean shape used at the JavaScript boundary
    pub fn from_flag(is_exporting: bool) -> Self {
        if is_exporting {
            ExportMode::Export
        } else {
            ExportMode::Interactive
        }
    }

    pub fn is_export(self) -> bool {
        matches!(self, ExportMode::Export)
    }
}

/// Timeline playback knobs consumed by the animation engine
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlaybackSettings {
    /// Extra timeline repeats; 0 runs once, -1 loops indefinitely
    pub repeat: i32,

    /// Pause between repeats in seconds (meaningless for a finite run)
    pub repeat_delay_secs: f64,

    /// Whether to attach the interactive scrubbing/debug panel
    pub attach_debug_tools: bool,
}

impl PlaybackSettings {
    /// Pause between interactive repeats
    const INTERACTIVE_REPEAT_DELAY_SECS: f64 = 1.0;

    /// The two playback shapes are mutually exclusive and fully
    /// determined by the export mode.
    pub fn for_mode(mode: ExportMode) -> Self {
        match mode {
            ExportMode::Export => Self {
                repeat: 0,
                repeat_delay_secs: 0.0,
                attach_debug_tools: false,
            },
            ExportMode::Interactive => Self {
                repeat: -1,
                repeat_delay_secs: Self::INTERACTIVE_REPEAT_DELAY_SECS,
                attach_debug_tools: true,
            },
        }
    }
}
