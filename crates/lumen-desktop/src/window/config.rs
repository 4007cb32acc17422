use serde::{Deserialize, Serialize};

use crate::math::Size;

/// Creation-time parameters shared by all windows on a desktop
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Geometry a window opens with
    pub default_size: Size,
    /// Lower bound enforced by interactive resize
    pub min_size: Size,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            default_size: Size::new(400.0, 500.0),
            min_size: Size::new(200.0, 50.0),
        }
    }
}
