//! Window state machine module
//!
//! Provides per-window geometry state, the maximize/restore mode machine,
//! and chrome hit testing.

mod config;
mod mode;
mod region;
#[allow(clippy::module_inception)]
mod window;

pub use config::WindowConfig;
pub use mode::WindowMode;
pub use region::{WindowRegion, BUTTON_MARGIN, BUTTON_WIDTH, RESIZE_CORNER, TITLE_BAR_HEIGHT};
pub use window::Window;
