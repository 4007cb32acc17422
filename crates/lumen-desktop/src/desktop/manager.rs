use tracing::debug;

use crate::error::{DesktopError, DesktopResult};
use crate::math::Vec2;
use crate::task::TaskId;
use crate::window::Window;

/// Live windows with their stacking order
///
/// Windows are stored in creation order; stacking is carried by each
/// window's `z_index`, assigned from a monotonically increasing counter.
/// Focus is the single authoritative operation that reassigns stacking
/// keys; windows never choose their own.
#[derive(Clone, Debug)]
pub struct WindowManager {
    windows: Vec<Window>,
    next_z: u32,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            next_z: 1,
        }
    }

    /// Number of live windows
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// True if no windows are live
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Whether a window exists for the given task
    pub fn contains(&self, id: TaskId) -> bool {
        self.windows.iter().any(|w| w.id == id)
    }

    /// Borrow a window by task id
    pub fn get(&self, id: TaskId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Mutably borrow a window by task id
    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Iterate windows in creation order
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }

    /// The currently topmost window, if any
    pub fn top_window(&self) -> Option<&Window> {
        self.windows.iter().max_by_key(|w| w.z_index)
    }

    /// Insert a new window on top of the existing stack
    pub(crate) fn insert(&mut self, mut window: Window) {
        window.z_index = self.next_z;
        self.next_z += 1;
        debug!(id = window.id, z = window.z_index, "window created");
        self.windows.push(window);
    }

    /// Destroy the window for `id`, discarding its geometry
    pub(crate) fn remove(&mut self, id: TaskId) {
        self.windows.retain(|w| w.id != id);
        debug!(id, "window destroyed");
    }

    /// Raise the window above all siblings, returning its stacking key.
    ///
    /// Refocusing the topmost window is a no-op: no stacking key changes,
    /// the existing key is returned.
    pub fn focus(&mut self, id: TaskId) -> DesktopResult<u32> {
        let current = self
            .get(id)
            .map(|w| w.z_index)
            .ok_or(DesktopError::WindowNotFound(id))?;

        let top = self.windows.iter().map(|w| w.z_index).max().unwrap_or(0);
        if current == top {
            return Ok(current);
        }

        let z = self.next_z;
        self.next_z += 1;
        // Presence checked above
        if let Some(window) = self.get_mut(id) {
            window.z_index = z;
        }
        debug!(id, z, "window focused");
        Ok(z)
    }

    /// Topmost window whose frame contains `point`
    pub fn hit_test(&self, point: Vec2) -> Option<TaskId> {
        self.windows
            .iter()
            .filter(|w| w.frame().contains(point))
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }
}
