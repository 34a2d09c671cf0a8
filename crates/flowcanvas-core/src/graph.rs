//! In-memory workflow graph.
//!
//! The store is the single source of truth for components and connections.
//! Every operation is synchronous and total: an unknown id is a silent no-op
//! reported through the return value. Connection endpoints are stored by
//! node id only and anchor coordinates are recomputed on render, so moving a
//! component never touches its connections.

use tracing::{debug, warn};

use crate::models::{
    ComponentConfig, ConfigPatch, Connection, ConnectionId, NodeId, Position, WorkflowComponent,
};
use crate::snapshot::GraphSnapshot;

/// Components plus connections, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphStore {
    components: Vec<WorkflowComponent>,
    connections: Vec<Connection>,
}

impl GraphStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            components: Vec::new(),
            connections: Vec::new(),
        }
    }

    /// Builds a store from a snapshot, dropping anything that would break
    /// the graph invariants.
    ///
    /// Duplicate components, duplicate connections, self-loops and dangling
    /// connections are skipped with a warning.
    #[must_use]
    pub fn from_snapshot(snapshot: GraphSnapshot) -> Self {
        let mut store = Self::new();
        for component in snapshot.components {
            let id = component.id().clone();
            if !store.add_node(component) {
                warn!(component = %id, "Skipping duplicate component in snapshot");
            }
        }
        for connection in snapshot.connections {
            let id = connection.id().clone();
            if !store.add_edge(connection) {
                warn!(connection = %id, "Skipping invalid connection in snapshot");
            }
        }
        store
    }

    /// Serializable copy of the current graph
    #[must_use]
    pub fn to_snapshot(&self, name: impl Into<String>) -> GraphSnapshot {
        GraphSnapshot {
            name: name.into(),
            components: self.components.clone(),
            connections: self.connections.clone(),
        }
    }

    #[must_use]
    pub fn components(&self) -> &[WorkflowComponent] {
        &self.components
    }

    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    #[must_use]
    pub fn node(&self, id: &NodeId) -> Option<&WorkflowComponent> {
        self.components.iter().find(|c| c.id() == id)
    }

    fn node_mut(&mut self, id: &NodeId) -> Option<&mut WorkflowComponent> {
        self.components.iter_mut().find(|c| c.id() == id)
    }

    #[must_use]
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node(id).is_some()
    }

    #[must_use]
    pub fn edge(&self, id: &ConnectionId) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id() == id)
    }

    /// Connections with either end on `node`
    pub fn edges_touching<'a>(&'a self, node: &'a NodeId) -> impl Iterator<Item = &'a Connection> {
        self.connections.iter().filter(move |c| c.touches(node))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.connections.is_empty()
    }

    /// Inserts a component. Returns `false` if the id is already taken.
    pub fn add_node(&mut self, component: WorkflowComponent) -> bool {
        if self.contains_node(component.id()) {
            debug!(component = %component.id(), "Ignoring duplicate component");
            return false;
        }
        debug!(component = %component.id(), kind = %component.kind(), "Component added");
        self.components.push(component);
        true
    }

    /// Removes a component and every connection touching it.
    ///
    /// Returns the removed connections, or `None` if `id` is unknown.
    pub fn remove_node(&mut self, id: &NodeId) -> Option<Vec<Connection>> {
        let index = self.components.iter().position(|c| c.id() == id)?;
        self.components.remove(index);

        let (pruned, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.connections)
            .into_iter()
            .partition(|c| c.touches(id));
        self.connections = kept;

        debug!(component = %id, pruned = pruned.len(), "Component removed");
        Some(pruned)
    }

    /// Moves a component. Returns `false` if `id` is unknown.
    pub fn update_node_position(&mut self, id: &NodeId, position: Position) -> bool {
        self.node_mut(id).map_or_else(
            || {
                debug!(component = %id, "Position update for unknown component");
                false
            },
            |component| {
                component.set_position(position);
                true
            },
        )
    }

    /// Merges `patch` into a component's configuration.
    ///
    /// Returns `false` if `id` is unknown or the patch is for another kind.
    pub fn update_node_config(&mut self, id: &NodeId, patch: &ConfigPatch) -> bool {
        let Some(component) = self.node_mut(id) else {
            debug!(component = %id, "Config update for unknown component");
            return false;
        };
        let merged = component.apply_patch(patch);
        if !merged {
            debug!(component = %id, patch_kind = %patch.kind(), "Ignoring config patch for other kind");
        }
        merged
    }

    /// Writes title and configuration in one step.
    ///
    /// Nothing changes unless both writes can be applied.
    pub fn update_node_details(
        &mut self,
        id: &NodeId,
        title: impl Into<String>,
        config: ComponentConfig,
    ) -> bool {
        let Some(component) = self.node_mut(id) else {
            debug!(component = %id, "Details update for unknown component");
            return false;
        };
        if !component.replace_config(config) {
            return false;
        }
        component.set_title(title);
        true
    }

    /// Translates every component by the same delta
    pub fn translate_all(&mut self, dx: f64, dy: f64) {
        for component in &mut self.components {
            let moved = component.position().translated(dx, dy);
            component.set_position(moved);
        }
    }

    /// Inserts a connection.
    ///
    /// Refuses self-loops, duplicate ids and connections whose endpoints are
    /// not both in the graph.
    pub fn add_edge(&mut self, connection: Connection) -> bool {
        if connection.is_self_loop() {
            debug!(connection = %connection.id(), "Ignoring self-loop");
            return false;
        }
        if self.edge(connection.id()).is_some() {
            debug!(connection = %connection.id(), "Ignoring duplicate connection");
            return false;
        }
        if !self.contains_node(connection.from()) || !self.contains_node(connection.to()) {
            debug!(connection = %connection.id(), "Ignoring dangling connection");
            return false;
        }
        debug!(
            connection = %connection.id(),
            from = %connection.from(),
            to = %connection.to(),
            "Connection added"
        );
        self.connections.push(connection);
        true
    }

    /// Removes a connection by id
    pub fn remove_edge(&mut self, id: &ConnectionId) -> Option<Connection> {
        let index = self.connections.iter().position(|c| c.id() == id)?;
        debug!(connection = %id, "Connection removed");
        Some(self.connections.remove(index))
    }
}
