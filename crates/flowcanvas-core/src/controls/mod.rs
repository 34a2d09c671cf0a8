//! Gesture controllers: drag-and-drop, connection drawing and panning.
//!
//! Each controller is a small explicit state machine with no knowledge of
//! DOM events; [`EditorSession`](crate::editor::EditorSession) routes input
//! to them and keeps them mutually consistent.

pub mod connect;
pub mod drag;
pub mod pan;

pub use connect::{ConnectOutcome, ConnectState, ConnectionController};
pub use drag::{DragController, DragPayload, DragState, DropOutcome};
pub use pan::{PanController, PanOffset, PanState};
