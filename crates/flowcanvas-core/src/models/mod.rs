//! Data models for the workflow graph

pub mod component;
pub mod connection;
pub mod settings;

pub use component::{ComponentKind, NodeId, Position, WorkflowComponent};
pub use connection::{AnchorKind, AnchorRef, Connection, ConnectionId};
pub use settings::{
    ActionConfig, ActionPatch, ActionType, ComponentConfig, ConfigField, ConfigPatch, FieldWidget,
    InputConfig, InputPatch, InputType, OutputConfig, OutputFormat, OutputPatch,
};
