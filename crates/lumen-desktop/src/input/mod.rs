//! Input routing for window interactions
//!
//! Turns raw pointer events into window commands: focus on press, title
//! bar drags, resize-grip drags, and chrome button clicks. The router owns
//! only the in-flight drag state; all clamping lives in the window state
//! machine.

mod router;

pub use router::{DragState, InputResult, InputRouter};
