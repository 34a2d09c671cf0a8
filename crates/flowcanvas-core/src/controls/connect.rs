//! Two-click connection drawing.
//!
//! The first anchor click arms the gesture; the second click on another
//! component's anchor creates the connection. Clicking any anchor of the
//! armed component cancels. While armed, pointer movement stretches a
//! rubber-band line from the armed anchor to the pointer.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use tracing::debug;

use crate::geometry::{LineSegment, NodeFootprint, anchor_point};
use crate::graph::GraphStore;
use crate::ids::IdGenerator;
use crate::models::{AnchorKind, AnchorRef, Connection, ConnectionId, NodeId, Position};

/// Connection gesture state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectState {
    #[default]
    Idle,
    Armed(AnchorRef),
}

/// Effect of an anchor click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    Armed,
    Created(ConnectionId),
    Cancelled,
    /// Second click landed but the graph refused the connection
    Rejected,
    /// The anchor was not clickable
    Ignored,
}

/// Connection gesture controller
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConnectionController {
    state: ConnectState,
    /// Last pointer position while armed, canvas-local
    pointer: Option<Position>,
}

impl ConnectionController {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ConnectState::Idle,
            pointer: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ConnectState {
        &self.state
    }

    #[must_use]
    pub const fn armed(&self) -> Option<&AnchorRef> {
        match &self.state {
            ConnectState::Idle => None,
            ConnectState::Armed(source) => Some(source),
        }
    }

    #[must_use]
    pub fn is_armed_source(&self, node: &NodeId) -> bool {
        self.armed().is_some_and(|source| &source.node == node)
    }

    /// Handles a click on `anchor` of `node`
    pub fn click_anchor(
        &mut self,
        node: NodeId,
        anchor: AnchorKind,
        graph: &mut GraphStore,
        ids: &mut dyn IdGenerator,
    ) -> ConnectOutcome {
        match std::mem::take(&mut self.state) {
            ConnectState::Idle => {
                debug!(component = %node, anchor = %anchor, "Connection armed");
                self.state = ConnectState::Armed(AnchorRef::new(node, anchor));
                ConnectOutcome::Armed
            }
            ConnectState::Armed(source) => {
                self.pointer = None;
                if source.node == node {
                    debug!(component = %node, "Connection cancelled");
                    return ConnectOutcome::Cancelled;
                }
                let target = AnchorRef::new(node, anchor);
                let Ok(connection) = Connection::new(ids.next_connection_id(), source, target) else {
                    return ConnectOutcome::Rejected;
                };
                let id = connection.id().clone();
                if graph.add_edge(connection) {
                    ConnectOutcome::Created(id)
                } else {
                    ConnectOutcome::Rejected
                }
            }
        }
    }

    /// Records the pointer (canvas-local); ignored unless armed
    pub fn pointer_moved(&mut self, pointer: Position) {
        if matches!(self.state, ConnectState::Armed(_)) {
            self.pointer = Some(pointer);
        }
    }

    /// Line from the armed anchor to the last pointer position.
    ///
    /// `None` when idle, before the first pointer move, or when the armed
    /// component has vanished.
    #[must_use]
    pub fn rubber_band(&self, graph: &GraphStore, footprint: NodeFootprint) -> Option<LineSegment> {
        let source = self.armed()?;
        let pointer = self.pointer?;
        let node = graph.node(&source.node)?;
        Some(LineSegment::new(
            anchor_point(node, source.anchor, footprint),
            pointer,
        ))
    }

    /// Anchors of `node` accept clicks only when it is hovered or armed
    #[must_use]
    pub fn anchors_interactive(&self, node: &NodeId, hovered: Option<&NodeId>) -> bool {
        hovered == Some(node) || self.is_armed_source(node)
    }

    /// Drops any armed state; returns `true` if something was armed
    pub fn cancel(&mut self) -> bool {
        self.pointer = None;
        let was_armed = matches!(
            std::mem::take(&mut self.state),
            ConnectState::Armed(_)
        );
        if was_armed {
            debug!("Armed connection cleared");
        }
        was_armed
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::ids::SequentialIds;
    use crate::models::ComponentKind;
    use crate::template::ComponentTemplate;

    fn setup() -> (GraphStore, SequentialIds, NodeId, NodeId) {
        let mut graph = GraphStore::new();
        let mut ids = SequentialIds::new();
        let a = ids.next_node_id();
        let b = ids.next_node_id();
        graph.add_node(
            ComponentTemplate::for_kind(ComponentKind::Input).instantiate(a.clone(), Position::new(0.0, 0.0)),
        );
        graph.add_node(
            ComponentTemplate::for_kind(ComponentKind::Output).instantiate(b.clone(), Position::new(300.0, 0.0)),
        );
        (graph, ids, a, b)
    }

    #[test]
    fn test_two_clicks_create_connection() {
        let (mut graph, mut ids, a, b) = setup();
        let mut connect = ConnectionController::new();

        assert_eq!(
            connect.click_anchor(a.clone(), AnchorKind::Output, &mut graph, &mut ids),
            ConnectOutcome::Armed
        );
        connect.pointer_moved(Position::new(250.0, 40.0));
        assert!(connect.rubber_band(&graph, NodeFootprint::default()).is_some());

        let outcome = connect.click_anchor(b.clone(), AnchorKind::Input, &mut graph, &mut ids);
        assert!(matches!(outcome, ConnectOutcome::Created(_)));
        assert_eq!(connect.state(), &ConnectState::Idle);
        assert!(connect.rubber_band(&graph, NodeFootprint::default()).is_none());

        let edge = &graph.connections()[0];
        assert_eq!(edge.from(), &a);
        assert_eq!(edge.from_type(), AnchorKind::Output);
        assert_eq!(edge.to(), &b);
        assert_eq!(edge.to_type(), AnchorKind::Input);
    }

    #[test]
    fn test_click_on_armed_component_cancels() {
        let (mut graph, mut ids, a, _) = setup();
        let mut connect = ConnectionController::new();
        connect.click_anchor(a.clone(), AnchorKind::Output, &mut graph, &mut ids);
        let outcome = connect.click_anchor(a, AnchorKind::Input, &mut graph, &mut ids);
        assert_eq!(outcome, ConnectOutcome::Cancelled);
        assert!(graph.connections().is_empty());
        assert_eq!(connect.state(), &ConnectState::Idle);
    }

    #[test]
    fn test_rubber_band_follows_pointer() {
        let (mut graph, mut ids, a, _) = setup();
        let mut connect = ConnectionController::new();
        connect.pointer_moved(Position::new(1.0, 1.0));
        assert!(connect.rubber_band(&graph, NodeFootprint::default()).is_none());

        connect.click_anchor(a, AnchorKind::Output, &mut graph, &mut ids);
        connect.pointer_moved(Position::new(400.0, 300.0));
        let line = connect.rubber_band(&graph, NodeFootprint::default()).unwrap();
        assert_eq!(line.from, Position::new(180.0, 50.0));
        assert_eq!(line.to, Position::new(400.0, 300.0));
    }

    #[test]
    fn test_anchor_interactivity() {
        let (mut graph, mut ids, a, b) = setup();
        let mut connect = ConnectionController::new();
        assert!(!connect.anchors_interactive(&a, None));
        assert!(connect.anchors_interactive(&a, Some(&a)));
        assert!(!connect.anchors_interactive(&a, Some(&b)));

        connect.click_anchor(a.clone(), AnchorKind::Top, &mut graph, &mut ids);
        assert!(connect.anchors_interactive(&a, Some(&b)));
        assert!(connect.cancel());
        assert!(!connect.anchors_interactive(&a, None));
    }

    #[test]
    fn test_second_click_on_removed_target_is_rejected() {
        let (mut graph, mut ids, a, _) = setup();
        let mut connect = ConnectionController::new();
        connect.click_anchor(a, AnchorKind::Output, &mut graph, &mut ids);
        let ghost = NodeId::new("ghost").unwrap();
        let outcome = connect.click_anchor(ghost, AnchorKind::Input, &mut graph, &mut ids);
        assert_eq!(outcome, ConnectOutcome::Rejected);
        assert!(graph.connections().is_empty());
    }
}
