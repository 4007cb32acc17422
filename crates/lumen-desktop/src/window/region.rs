use serde::{Deserialize, Serialize};

use crate::math::{Rect, Vec2};

/// Height of the draggable title bar
pub const TITLE_BAR_HEIGHT: f32 = 30.0;

/// Width of one chrome button slot in the title bar
pub const BUTTON_WIDTH: f32 = 16.0;

/// Gap between the button strip and the right window edge
pub const BUTTON_MARGIN: f32 = 6.0;

/// Side length of the square resize affordance in the bottom-right corner
pub const RESIZE_CORNER: f32 = 12.0;

/// Named regions of a window's chrome
///
/// The core does not draw chrome; it only maps pointer positions onto these
/// regions so the input router can turn clicks into commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowRegion {
    /// Drag handle across the top of the window
    TitleBar,
    /// Application content area
    Content,
    /// Minimize button in the title bar
    ButtonMinimize,
    /// Maximize/restore button (present only on resizable windows)
    ButtonMaximize,
    /// Close button at the right end of the title bar
    ButtonClose,
    /// Resize grip (present only on restored, resizable windows)
    ResizeCorner,
}

/// Map a pointer position to the chrome region of a window frame.
///
/// Buttons sit at the right end of the title bar, ordered minimize,
/// maximize, close toward the edge. Non-resizable windows have no maximize
/// button and no resize grip, and a maximized window hides the grip.
pub fn region_at(frame: Rect, point: Vec2, resizable: bool, maximized: bool) -> Option<WindowRegion> {
    if !frame.contains(point) {
        return None;
    }

    if resizable && !maximized {
        let in_corner = point.x >= frame.right() - RESIZE_CORNER
            && point.y >= frame.bottom() - RESIZE_CORNER;
        if in_corner {
            return Some(WindowRegion::ResizeCorner);
        }
    }

    if point.y - frame.y >= TITLE_BAR_HEIGHT {
        return Some(WindowRegion::Content);
    }

    let from_right = frame.right() - point.x - BUTTON_MARGIN;
    let slot = if from_right < 0.0 {
        None
    } else {
        Some((from_right / BUTTON_WIDTH) as u32)
    };

    let region = match (slot, resizable) {
        (Some(0), _) => WindowRegion::ButtonClose,
        (Some(1), true) => WindowRegion::ButtonMaximize,
        (Some(1), false) => WindowRegion::ButtonMinimize,
        (Some(2), true) => WindowRegion::ButtonMinimize,
        _ => WindowRegion::TitleBar,
    };
    Some(region)
}
