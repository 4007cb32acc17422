//! Core geometry types for the desktop environment
//!
//! These types provide basic 2D math operations for positioning,
//! sizing, and hit testing.

mod layout;
mod rect;
mod size;
mod vec2;

pub use layout::center_in;
pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
