use tracing::trace;

use crate::desktop::DesktopEngine;
use crate::error::DesktopResult;
use crate::math::{Size, Vec2};
use crate::task::TaskId;
use crate::window::WindowRegion;

/// In-flight pointer interaction
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No drag in progress
    #[default]
    Idle,
    /// Moving a window by its title bar
    DragWindow {
        /// Window being moved
        id: TaskId,
        /// Pointer offset from the window origin at grab time
        grab_offset: Vec2,
    },
    /// Resizing a window by its corner grip
    ResizeWindow {
        /// Window being resized
        id: TaskId,
        /// Geometry at grab time
        start_size: Size,
        /// Pointer position at grab time
        start_pointer: Vec2,
    },
}

/// What a pointer event did
///
/// `Minimize` and `Close` are intents for the host, mirroring
/// [`DesktopEvent`](crate::desktop::DesktopEvent); the router applies
/// everything else to the engine itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    /// Nothing was hit or nothing changed
    Ignored,
    /// A window was focused
    Focused(TaskId),
    /// A title bar drag began
    DragStarted(TaskId),
    /// A resize drag began
    ResizeStarted(TaskId),
    /// A window moved
    Dragged(TaskId),
    /// A window resized
    Resized(TaskId),
    /// The maximize/restore toggle was applied
    ToggleMaximize(TaskId),
    /// The minimize button was clicked; route to the host
    Minimize(TaskId),
    /// The close button was clicked; route to the host
    Close(TaskId),
}

/// Pointer-to-command state machine
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    drag: DragState,
}

impl InputRouter {
    /// Create an idle router
    pub fn new() -> Self {
        Self {
            drag: DragState::Idle,
        }
    }

    /// The current in-flight interaction
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Handle a pointer press.
    ///
    /// The topmost window under the pointer is focused first, whatever the
    /// region; this is the only cross-window side effect of any input.
    /// Title bars begin a drag (maximized windows do not move), the corner
    /// grip begins a resize, and chrome buttons produce their command.
    pub fn pointer_down(
        &mut self,
        engine: &mut DesktopEngine,
        point: Vec2,
    ) -> DesktopResult<InputResult> {
        let Some(id) = engine.windows.hit_test(point) else {
            return Ok(InputResult::Ignored);
        };
        engine.focus(id)?;

        // Present, hit_test just found it
        let Some(window) = engine.windows.get(id) else {
            return Ok(InputResult::Ignored);
        };

        let result = match window.region_at(point) {
            Some(WindowRegion::TitleBar) => {
                if window.is_maximized() {
                    InputResult::Focused(id)
                } else {
                    self.drag = DragState::DragWindow {
                        id,
                        grab_offset: point - window.position,
                    };
                    trace!(id, "drag started");
                    InputResult::DragStarted(id)
                }
            }
            Some(WindowRegion::ResizeCorner) => {
                self.drag = DragState::ResizeWindow {
                    id,
                    start_size: window.size,
                    start_pointer: point,
                };
                trace!(id, "resize started");
                InputResult::ResizeStarted(id)
            }
            Some(WindowRegion::ButtonMaximize) => {
                engine.toggle_maximize(id)?;
                InputResult::ToggleMaximize(id)
            }
            Some(WindowRegion::ButtonMinimize) => InputResult::Minimize(id),
            Some(WindowRegion::ButtonClose) => InputResult::Close(id),
            Some(WindowRegion::Content) | None => InputResult::Focused(id),
        };
        Ok(result)
    }

    /// Handle pointer movement, feeding any in-flight drag or resize.
    ///
    /// Clamps are applied by the window itself; the router does not
    /// re-validate bounds.
    pub fn pointer_move(
        &mut self,
        engine: &mut DesktopEngine,
        point: Vec2,
    ) -> DesktopResult<InputResult> {
        match self.drag {
            DragState::Idle => Ok(InputResult::Ignored),
            DragState::DragWindow { id, grab_offset } => {
                engine.drag_to(id, point - grab_offset)?;
                Ok(InputResult::Dragged(id))
            }
            DragState::ResizeWindow {
                id,
                start_size,
                start_pointer,
            } => {
                let delta = point - start_pointer;
                let target = Size::new(start_size.width + delta.x, start_size.height + delta.y);
                engine.resize_to(id, target)?;
                Ok(InputResult::Resized(id))
            }
        }
    }

    /// Handle pointer release, ending any in-flight interaction
    pub fn pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }
}
