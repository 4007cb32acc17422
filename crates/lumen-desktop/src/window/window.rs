use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{DesktopError, DesktopResult};
use crate::math::{center_in, Rect, Size, Vec2};
use crate::task::{Task, TaskId};
use crate::window::{region, WindowConfig, WindowMode, WindowRegion};

/// One live window, bound to a task
///
/// A window owns only transient layout state: position, size, the
/// maximize/restore mode, and its externally-assigned stacking key. It is
/// created when its task becomes active and destroyed when the task goes
/// inactive; nothing survives that boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Id of the backing task
    pub id: TaskId,
    /// Title shown in the chrome, refreshed from the task on every sync
    pub title: String,
    /// Whether interactive resize (and maximize) is permitted
    pub resizable: bool,
    /// Top-left corner in desktop coordinates
    pub position: Vec2,
    /// Current geometry
    pub size: Size,
    /// Restored/maximized mode machine
    pub mode: WindowMode,
    /// Stacking key; higher draws above lower. Assigned by the window
    /// manager on focus, never chosen by the window itself.
    pub z_index: u32,
    /// Lower bound for interactive resize
    min_size: Size,
}

impl Window {
    /// Create a window for `task`, centered at the top of the desktop
    /// surface with the configured default geometry.
    pub fn new(task: &Task, config: &WindowConfig, desktop: Size) -> Self {
        let size = config.default_size;
        Self {
            id: task.id,
            title: task.title.clone(),
            resizable: task.is_window_resizable,
            position: center_in(size, desktop),
            size,
            mode: WindowMode::Restored,
            z_index: 0,
            min_size: config.min_size,
        }
    }

    /// The window's bounding rectangle in desktop coordinates
    pub fn frame(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Whether the window currently fills the viewport
    pub fn is_maximized(&self) -> bool {
        self.mode.is_maximized()
    }

    /// Toggle between maximized and restored.
    ///
    /// Maximizing snapshots the current geometry and adopts the viewport
    /// bounds; toggling again restores the snapshot. A maximize against an
    /// unmeasured (zero) viewport is deferred: the call succeeds but
    /// changes nothing, so the window never degenerates to zero size.
    pub fn toggle_maximize(&mut self, viewport: Size) -> DesktopResult<()> {
        if !self.resizable {
            return Err(DesktopError::InvalidOperation {
                op: "toggle_maximize",
                reason: "window is not resizable",
            });
        }
        if !self.is_maximized() && viewport.is_empty() {
            debug!(id = self.id, "maximize deferred: viewport not measured");
            return Ok(());
        }

        let (mode, size) = self.mode.toggled(self.size, viewport);
        self.mode = mode;
        self.size = size;
        trace!(
            id = self.id,
            maximized = self.is_maximized(),
            width = self.size.width,
            height = self.size.height,
            "maximize toggled"
        );
        Ok(())
    }

    /// Move the window to `target`.
    ///
    /// Maximized windows do not move. The top edge is clamped so the title
    /// bar cannot leave the desktop (`y >= 0`); the sides and bottom are
    /// unconstrained, so a window may be dragged partly or fully off those
    /// edges.
    pub fn drag_to(&mut self, target: Vec2) {
        if self.is_maximized() {
            return;
        }
        self.position = Vec2::new(target.x, target.y.max(0.0));
    }

    /// Resize the window to `target`.
    ///
    /// Only restored, resizable windows resize; the result is clamped to
    /// the configured minimum. There is no upper clamp.
    pub fn resize_to(&mut self, target: Size) {
        if self.is_maximized() || !self.resizable {
            return;
        }
        self.size = target.clamp_min(self.min_size);
    }

    /// Map a pointer position onto this window's chrome
    pub fn region_at(&self, point: Vec2) -> Option<WindowRegion> {
        region::region_at(self.frame(), point, self.resizable, self.is_maximized())
    }

    /// Refresh the task-owned fields after a sync pass
    pub(crate) fn apply_task(&mut self, task: &Task) {
        self.title = task.title.clone();
        self.resizable = task.is_window_resizable;
    }
}
