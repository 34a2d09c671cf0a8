//! Identifier generation.
//!
//! The editor never invents ids itself; it asks an [`IdGenerator`] so tests
//! can substitute a deterministic sequence.

use std::fmt;
use uuid::Uuid;

use crate::models::{ConnectionId, NodeId};

/// Source of fresh component and connection identifiers
pub trait IdGenerator: fmt::Debug + Send + Sync {
    fn next_node_id(&mut self) -> NodeId;
    fn next_connection_id(&mut self) -> ConnectionId;
}

/// Random v4 UUIDs, used by the real editor
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_node_id(&mut self) -> NodeId {
        NodeId::from_generated(format!("node-{}", Uuid::new_v4().simple()))
    }

    fn next_connection_id(&mut self) -> ConnectionId {
        ConnectionId::from_generated(format!("conn-{}", Uuid::new_v4().simple()))
    }
}

/// Deterministic `node-1`, `node-2`, ... sequence
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    nodes: u64,
    connections: u64,
}

impl SequentialIds {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: 0,
            connections: 0,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_node_id(&mut self) -> NodeId {
        self.nodes = self.nodes.saturating_add(1);
        NodeId::from_generated(format!("node-{}", self.nodes))
    }

    fn next_connection_id(&mut self) -> ConnectionId {
        self.connections = self.connections.saturating_add(1);
        ConnectionId::from_generated(format!("conn-{}", self.connections))
    }
}
