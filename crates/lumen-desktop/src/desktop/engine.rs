use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::desktop::WindowManager;
use crate::error::{DesktopError, DesktopResult};
use crate::math::{Size, Vec2};
use crate::task::{Task, TaskId};
use crate::window::{Window, WindowConfig};

/// Intent emitted by the core for the host to act on
///
/// The core never decides what minimizing or closing a task means; it only
/// names the task. Hiding versus terminating is host policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "id", rename_all = "lowercase")]
pub enum DesktopEvent {
    /// The user asked to minimize the window of this task
    Minimize(TaskId),
    /// The user asked to close the window of this task
    Close(TaskId),
}

/// Desktop controller coordinating windows against the host task list
///
/// Owns the measured viewport bounds and one window per active task. Data
/// flows one way: tasks and viewport bounds come in through [`sync_tasks`]
/// and [`measure_viewport`]; minimize/close intents go back out as
/// [`DesktopEvent`]s.
///
/// [`sync_tasks`]: DesktopEngine::sync_tasks
/// [`measure_viewport`]: DesktopEngine::measure_viewport
#[derive(Clone, Debug)]
pub struct DesktopEngine {
    /// Measured desktop surface bounds; zero until first measurement
    viewport: Size,
    /// Shared creation parameters for new windows
    config: WindowConfig,
    /// Live windows and their stacking order
    pub windows: WindowManager,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create an engine with default window parameters
    pub fn new() -> Self {
        Self::with_config(WindowConfig::default())
    }

    /// Create an engine with custom window parameters
    pub fn with_config(config: WindowConfig) -> Self {
        Self {
            viewport: Size::ZERO,
            config,
            windows: WindowManager::new(),
        }
    }

    /// The measured desktop bounds, `Size::ZERO` before measurement
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Record the desktop surface bounds once it has been laid out.
    ///
    /// Maximized geometry always equals these bounds. Only the first
    /// measurement takes effect; the surface is fixed for the lifetime of
    /// the engine, so later calls are ignored.
    pub fn measure_viewport(&mut self, width: f32, height: f32) {
        if !self.viewport.is_empty() {
            debug!("viewport already measured, ignoring");
            return;
        }
        self.viewport = Size::new(width.max(0.0), height.max(0.0));
        debug!(
            width = self.viewport.width,
            height = self.viewport.height,
            "viewport measured"
        );
    }

    /// Reconcile live windows against the host task list.
    ///
    /// Creates a window for every active task that has none, destroys
    /// windows whose task went inactive or disappeared, and refreshes
    /// task-owned fields (title, resizability) on survivors. New windows
    /// stack in task order, above everything already open. Geometry of a
    /// destroyed window is discarded; a reopened task starts from the
    /// configured defaults.
    ///
    /// A task list with duplicate ids is rejected wholesale, leaving the
    /// window set untouched.
    pub fn sync_tasks(&mut self, tasks: &[Task]) -> DesktopResult<()> {
        let mut seen = HashSet::new();
        for task in tasks {
            if !seen.insert(task.id) {
                return Err(DesktopError::DuplicateTaskId(task.id));
            }
        }

        let active: HashSet<TaskId> = tasks
            .iter()
            .filter(|t| t.is_window_active)
            .map(|t| t.id)
            .collect();

        let stale: Vec<TaskId> = self
            .windows
            .windows()
            .map(|w| w.id)
            .filter(|id| !active.contains(id))
            .collect();
        for id in stale {
            self.windows.remove(id);
        }

        for task in tasks.iter().filter(|t| t.is_window_active) {
            match self.windows.get_mut(task.id) {
                Some(window) => window.apply_task(task),
                None => {
                    self.windows
                        .insert(Window::new(task, &self.config, self.viewport));
                }
            }
        }

        trace!(live = self.windows.len(), "task sync complete");
        Ok(())
    }

    /// Raise the window for `id` above all siblings
    pub fn focus(&mut self, id: TaskId) -> DesktopResult<u32> {
        self.windows.focus(id)
    }

    /// Toggle maximize/restore on the window for `id`
    pub fn toggle_maximize(&mut self, id: TaskId) -> DesktopResult<()> {
        let viewport = self.viewport;
        self.windows
            .get_mut(id)
            .ok_or(DesktopError::WindowNotFound(id))?
            .toggle_maximize(viewport)
    }

    /// Move the window for `id` to `target` (top-edge clamped)
    pub fn drag_to(&mut self, id: TaskId, target: Vec2) -> DesktopResult<()> {
        self.windows
            .get_mut(id)
            .ok_or(DesktopError::WindowNotFound(id))?
            .drag_to(target);
        Ok(())
    }

    /// Resize the window for `id` to `target` (minimum clamped)
    pub fn resize_to(&mut self, id: TaskId, target: Size) -> DesktopResult<()> {
        self.windows
            .get_mut(id)
            .ok_or(DesktopError::WindowNotFound(id))?
            .resize_to(target);
        Ok(())
    }

    /// Emit the minimize intent for `id`.
    ///
    /// Local window state is untouched; whether the task's window actually
    /// disappears is decided by the host when it routes the event back
    /// through [`sync_tasks`](DesktopEngine::sync_tasks).
    pub fn minimize(&self, id: TaskId) -> DesktopResult<DesktopEvent> {
        if !self.windows.contains(id) {
            return Err(DesktopError::WindowNotFound(id));
        }
        trace!(id, "minimize requested");
        Ok(DesktopEvent::Minimize(id))
    }

    /// Emit the close intent for `id`; the window is destroyed on the next
    /// sync once the host drops or deactivates the task.
    pub fn close(&self, id: TaskId) -> DesktopResult<DesktopEvent> {
        if !self.windows.contains(id) {
            return Err(DesktopError::WindowNotFound(id));
        }
        trace!(id, "close requested");
        Ok(DesktopEvent::Close(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured_engine() -> DesktopEngine {
        let mut engine = DesktopEngine::new();
        engine.measure_viewport(1920.0, 1080.0);
        engine
    }

    #[test]
    fn test_sync_creates_windows_for_active_tasks_only() {
        let mut engine = measured_engine();
        let tasks = vec![
            Task::new(1, "Files"),
            Task::new(2, "Mail").with_active(false),
        ];
        engine.sync_tasks(&tasks).unwrap();

        assert_eq!(engine.windows.len(), 1);
        assert!(engine.windows.contains(1));
        assert!(!engine.windows.contains(2));
    }

    #[test]
    fn test_sync_rejects_duplicate_ids() {
        let mut engine = measured_engine();
        engine.sync_tasks(&[Task::new(1, "Files")]).unwrap();

        let tasks = vec![Task::new(1, "Files"), Task::new(1, "Imposter")];
        assert_eq!(
            engine.sync_tasks(&tasks),
            Err(DesktopError::DuplicateTaskId(1))
        );
        // Window set untouched by the failed sync
        assert_eq!(engine.windows.len(), 1);
    }

    #[test]
    fn test_sync_destroys_window_when_task_goes_inactive() {
        let mut engine = measured_engine();
        engine.sync_tasks(&[Task::new(1, "Files")]).unwrap();
        engine
            .sync_tasks(&[Task::new(1, "Files").with_active(false)])
            .unwrap();
        assert!(engine.windows.is_empty());
    }

    #[test]
    fn test_reopened_task_starts_from_defaults() {
        let mut engine = measured_engine();
        let task = Task::new(1, "Files");

        engine.sync_tasks(std::slice::from_ref(&task)).unwrap();
        engine.resize_to(1, Size::new(800.0, 300.0)).unwrap();
        engine.drag_to(1, Vec2::new(50.0, 60.0)).unwrap();

        // Close and reopen: no geometry survives the destroy boundary.
        engine
            .sync_tasks(&[task.clone().with_active(false)])
            .unwrap();
        engine.sync_tasks(std::slice::from_ref(&task)).unwrap();

        let window = engine.windows.get(1).unwrap();
        assert_eq!(window.size, Size::new(400.0, 500.0));
        assert_eq!(window.position, Vec2::new(760.0, 0.0));
    }

    #[test]
    fn test_sync_refreshes_task_owned_fields() {
        let mut engine = measured_engine();
        engine.sync_tasks(&[Task::new(1, "Draft")]).unwrap();
        engine
            .sync_tasks(&[Task::new(1, "Final").with_resizable(false)])
            .unwrap();

        let window = engine.windows.get(1).unwrap();
        assert_eq!(window.title, "Final");
        assert!(!window.resizable);
    }

    #[test]
    fn test_focus_ordering_across_sync() {
        let mut engine = measured_engine();
        let tasks = vec![Task::new(1, "A"), Task::new(2, "B"), Task::new(3, "C")];
        engine.sync_tasks(&tasks).unwrap();

        engine.focus(1).unwrap();
        assert_eq!(engine.windows.top_window().unwrap().id, 1);

        // A later sync must not disturb stacking of surviving windows.
        engine.sync_tasks(&tasks).unwrap();
        assert_eq!(engine.windows.top_window().unwrap().id, 1);
    }

    #[test]
    fn test_maximize_uses_measured_viewport() {
        let mut engine = measured_engine();
        engine.sync_tasks(&[Task::new(1, "Files")]).unwrap();
        engine.toggle_maximize(1).unwrap();

        let window = engine.windows.get(1).unwrap();
        assert!(window.is_maximized());
        assert_eq!(window.size, Size::new(1920.0, 1080.0));
    }

    #[test]
    fn test_maximize_before_measurement_is_deferred() {
        let mut engine = DesktopEngine::new();
        engine.sync_tasks(&[Task::new(1, "Files")]).unwrap();
        engine.toggle_maximize(1).unwrap();
        assert!(!engine.windows.get(1).unwrap().is_maximized());
    }

    #[test]
    fn test_viewport_is_measured_once() {
        let mut engine = DesktopEngine::new();
        engine.measure_viewport(1024.0, 768.0);
        engine.measure_viewport(1920.0, 1080.0);
        assert_eq!(engine.viewport(), Size::new(1024.0, 768.0));
    }

    #[test]
    fn test_minimize_emits_event_without_mutation() {
        let mut engine = measured_engine();
        engine.sync_tasks(&[Task::new(7, "Files")]).unwrap();
        let before = engine.windows.get(7).unwrap().clone();

        let event = engine.minimize(7).unwrap();
        assert_eq!(event, DesktopEvent::Minimize(7));
        assert_eq!(engine.windows.get(7).unwrap(), &before);
    }

    #[test]
    fn test_close_emits_event_and_window_dies_on_next_sync() {
        let mut engine = measured_engine();
        let task = Task::new(4, "Mail");
        engine.sync_tasks(std::slice::from_ref(&task)).unwrap();

        let event = engine.close(4).unwrap();
        assert_eq!(event, DesktopEvent::Close(4));
        // Still alive until the host filters the task out
        assert!(engine.windows.contains(4));

        engine.sync_tasks(&[]).unwrap();
        assert!(!engine.windows.contains(4));
    }

    #[test]
    fn test_intents_for_unknown_windows_fail() {
        let engine = measured_engine();
        assert_eq!(engine.minimize(9), Err(DesktopError::WindowNotFound(9)));
        assert_eq!(engine.close(9), Err(DesktopError::WindowNotFound(9)));
    }

    #[test]
    fn test_event_serialization() {
        let json = serde_json::to_string(&DesktopEvent::Minimize(7)).unwrap();
        assert_eq!(json, r#"{"event":"minimize","id":7}"#);
    }
}
