//! Error types for the window manager core
//!
//! This module provides structured error types for all fallible operations
//! in the desktop crate. Everything here is a programming-contract failure;
//! no error surfaces to the end user in normal operation.

use crate::task::TaskId;

/// Errors that can occur in window manager operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// No live window exists for the given task id
    WindowNotFound(TaskId),

    /// The host handed the core a task list containing the same id twice
    DuplicateTaskId(TaskId),

    /// An operation was attempted that is not valid in the current state
    InvalidOperation {
        /// The operation that was attempted
        op: &'static str,
        /// Why the operation failed
        reason: &'static str,
    },
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WindowNotFound(id) => write!(f, "window not found: {}", id),
            Self::DuplicateTaskId(id) => write!(f, "duplicate task id: {}", id),
            Self::InvalidOperation { op, reason } => {
                write!(f, "invalid operation '{}': {}", op, reason)
            }
        }
    }
}

impl std::error::Error for DesktopError {}

/// Result type alias for window manager operations
pub type DesktopResult<T> = Result<T, DesktopError>;
