//! Canvas interaction engine for the flowcanvas workflow editor.
//!
//! Everything here is plain Rust with no DOM dependency, so the whole
//! engine runs and is tested natively. The browser UI and the CLI are thin
//! adapters over [`EditorSession`] and [`WorkflowRepository`].
//!
//! ## Module Structure
//! - `models`: components, connections and per-kind configuration
//! - `geometry`: anchor coordinates and canvas rectangles
//! - `interaction`: anchor and card hit-testing
//! - `graph`: the component/connection store
//! - `controls`: drag-and-drop, connection drawing and panning state machines
//! - `inspector`: scoped edit buffer for one component
//! - `editor`: the session that owns the graph and routes input
//! - `snapshot`: wire/export format and validation
//! - `persistence`: repository port and REST route layout
//! - `template`, `ids`, `config`, `error`: supporting pieces
//!
//! # Example
//!
//! ```
//! use flowcanvas_core::{CanvasRect, ComponentKind, DropOutcome, EditorConfig, EditorSession, Position};
//!
//! let mut session = EditorSession::new(EditorConfig::default());
//! session.set_canvas_rect(CanvasRect::new(50.0, 50.0, 800.0, 600.0));
//! session.palette_drag_start(ComponentKind::Input);
//! let outcome = session.drop_on_canvas(Position::new(300.0, 200.0));
//! assert!(matches!(outcome, DropOutcome::Created(_)));
//! assert_eq!(session.graph().components()[0].position(), Position::new(175.0, 70.0));
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod controls;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod ids;
pub mod inspector;
pub mod interaction;
pub mod models;
pub mod persistence;
pub mod snapshot;
pub mod template;

pub use config::EditorConfig;
pub use controls::{ConnectOutcome, DragPayload, DropOutcome, PanOffset};
pub use editor::{EdgeLine, EditorSession, InputMode, LoadState, PointerTarget};
pub use error::{EditorError, Result};
pub use geometry::{CanvasRect, LineSegment, NodeFootprint, Offset, anchor_point};
pub use graph::GraphStore;
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use inspector::{FieldView, InspectorSession};
pub use models::{
    AnchorKind, ComponentConfig, ComponentKind, ConfigField, Connection, ConnectionId, NodeId,
    Position, WorkflowComponent,
};
pub use persistence::{
    InMemoryWorkflowRepository, Notice, PersistenceError, SavedWorkflow, WorkflowId,
    WorkflowRepository, WorkflowSummary,
};
pub use snapshot::{EXPORT_FILE_NAME, GraphSnapshot, SnapshotIssue};
pub use template::{ComponentTemplate, palette};
