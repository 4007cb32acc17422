//! Window Manager Core for the Lumen desktop environment
//!
//! This crate provides the state machine behind a simulated desktop: a
//! fixed viewport hosting floating, draggable, optionally resizable
//! windows, one per active task of a host shell.
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`) and placement
//! - [`task`]: Host-owned task records the core syncs against
//! - [`window`]: Per-window state machine (geometry, maximize/restore, chrome regions)
//! - [`desktop`]: Window manager (focus stack, z-order) and desktop engine
//! - [`input`]: Pointer-to-command routing (drag, resize, button clicks)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                   DesktopEngine                     │
//! │  ┌──────────────┐ ┌──────────────┐ ┌────────────┐   │
//! │  │   viewport   │ │WindowManager │ │InputRouter │   │
//! │  │ (measured 1x)│ │(focus/z-order)│ │  (drag)   │   │
//! │  └──────────────┘ └──────────────┘ └────────────┘   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Data flows one way: the host passes its task list and the measured
//! surface bounds down; minimize/close intents flow back up as
//! [`DesktopEvent`]s. Whether a task's window actually disappears is host
//! policy, not the core's.
//!
//! ## Example
//!
//! ```rust
//! use lumen_desktop::{DesktopEngine, Task};
//!
//! let mut engine = DesktopEngine::new();
//! engine.measure_viewport(1920.0, 1080.0);
//! engine.sync_tasks(&[Task::new(1, "Files"), Task::new(2, "Terminal")]).unwrap();
//!
//! engine.focus(1).unwrap();
//! engine.toggle_maximize(1).unwrap();
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is plain Rust, testable
//!    without any rendering host
//! 2. **Explicit Bounds**: Placement and maximize geometry come from the
//!    measured desktop surface, never from ambient screen state
//! 3. **Single-threaded**: Every transition runs to completion inside one
//!    synchronous call; there is no background work

pub mod desktop;
pub mod error;
pub mod input;
pub mod math;
pub mod task;
pub mod window;

// Re-export core types for convenience
pub use desktop::{DesktopEngine, DesktopEvent, WindowManager};
pub use error::{DesktopError, DesktopResult};
pub use input::{DragState, InputResult, InputRouter};
pub use math::{center_in, Rect, Size, Vec2};
pub use task::{Task, TaskId};
pub use window::{Window, WindowConfig, WindowMode, WindowRegion};
