use serde::{Deserialize, Serialize};

use crate::math::Size;

/// The two persistent modes of a window
///
/// Minimize and close are not modes of this machine; they are intents
/// emitted upward for the host to act on. A maximized window carries the
/// geometry it had immediately before maximizing, so repeated
/// maximize/restore cycles are lossless.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum WindowMode {
    /// Free-floating at its own geometry
    Restored,
    /// Filling the desktop viewport
    Maximized {
        /// Geometry to return to on restore
        saved: Size,
    },
}

impl WindowMode {
    /// Whether the window currently fills the viewport
    pub fn is_maximized(&self) -> bool {
        matches!(self, WindowMode::Maximized { .. })
    }

    /// Flip the mode, returning the next mode and the geometry the window
    /// adopts.
    ///
    /// One call performs exactly one transition: restored windows snapshot
    /// `current` and adopt `viewport`; maximized windows drop the viewport
    /// geometry and return to their snapshot. The same operation drives
    /// both directions.
    pub fn toggled(self, current: Size, viewport: Size) -> (WindowMode, Size) {
        match self {
            WindowMode::Restored => (WindowMode::Maximized { saved: current }, viewport),
            WindowMode::Maximized { saved } => (WindowMode::Restored, saved),
        }
    }
}
