//! Desktop controller module
//!
//! Provides the window manager (focus stack, z-order, hit testing) and the
//! desktop engine that syncs windows against the host task list.

mod engine;
mod manager;

pub use engine::{DesktopEngine, DesktopEvent};
pub use manager::WindowManager;
