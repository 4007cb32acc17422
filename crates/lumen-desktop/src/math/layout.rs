//! Initial window placement

use super::{Size, Vec2};

/// Position a box of `size` horizontally centered at the top of `bounds`.
///
/// New windows open centered in the desktop surface with their title bar
/// flush against the top edge. The bounds are passed in explicitly so the
/// calculation never depends on ambient screen state.
pub fn center_in(size: Size, bounds: Size) -> Vec2 {
    Vec2::new(bounds.width * 0.5 - size.width * 0.5, 0.0)
}
