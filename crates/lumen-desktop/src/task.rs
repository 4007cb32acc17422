//! Host-owned task records
//!
//! Tasks describe application instances and are owned by the host shell
//! (task bar, launcher, ...). The window manager core reads them on every
//! sync pass and never mutates them; visibility decisions stay with the
//! host.

use serde::{Deserialize, Serialize};

/// Unique task identifier
///
/// Ids are assigned by the host and must be unique within the active task
/// set. The core rejects sync passes containing duplicates.
pub type TaskId = u32;

/// An application task as presented by the host
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identity within the active task set
    pub id: TaskId,
    /// Title shown in the window chrome
    pub title: String,
    /// Whether a window should currently exist for this task
    pub is_window_active: bool,
    /// Whether the user may resize (and maximize) this task's window
    pub is_window_resizable: bool,
}

impl Task {
    /// Create a task with an active, resizable window
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            is_window_active: true,
            is_window_resizable: true,
        }
    }

    /// Builder-style toggle for window visibility
    pub fn with_active(mut self, active: bool) -> Self {
        self.is_window_active = active;
        self
    }

    /// Builder-style toggle for resizability
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.is_window_resizable = resizable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_defaults() {
        let task = Task::new(1, "Files");
        assert!(task.is_window_active);
        assert!(task.is_window_resizable);
        assert_eq!(task.title, "Files");
    }

    #[test]
    fn test_task_builders() {
        let task = Task::new(2, "About").with_active(false).with_resizable(false);
        assert!(!task.is_window_active);
        assert!(!task.is_window_resizable);
    }

    #[test]
    fn test_task_serialize_roundtrip() {
        let task = Task::new(7, "Terminal").with_resizable(false);
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
