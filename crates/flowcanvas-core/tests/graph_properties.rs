//! Property-based tests for the graph store and panning.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Strategy indices are reduced modulo non-empty collection lengths
#![allow(clippy::arithmetic_side_effects)]

use flowcanvas_core::models::AnchorRef;
use flowcanvas_core::{
    AnchorKind, CanvasRect, ComponentKind, ComponentTemplate, Connection, ConnectionId,
    EditorConfig, EditorSession, GraphSnapshot, GraphStore, NodeId, PointerTarget, Position,
    SequentialIds,
};
use proptest::prelude::*;

const EPSILON: f64 = 1e-6;

fn kind_strategy() -> impl Strategy<Value = ComponentKind> {
    prop_oneof![
        Just(ComponentKind::Input),
        Just(ComponentKind::Output),
        Just(ComponentKind::Action),
    ]
}

/// Whole-pixel coordinates so JSON round-trips are exact
fn coord() -> impl Strategy<Value = f64> {
    (-500i32..500).prop_map(f64::from)
}

fn anchor_strategy() -> impl Strategy<Value = AnchorKind> {
    prop_oneof![
        Just(AnchorKind::Input),
        Just(AnchorKind::Output),
        Just(AnchorKind::Top),
        Just(AnchorKind::Bottom),
    ]
}

/// Graph with `nodes` components and edges picked from random index pairs
fn build_graph(
    nodes: &[(ComponentKind, f64, f64)],
    edges: &[(usize, usize, AnchorKind, AnchorKind)],
) -> Result<GraphStore, TestCaseError> {
    let mut store = GraphStore::new();
    let ids: Vec<NodeId> = (0..nodes.len())
        .map(|i| NodeId::new(format!("n{i}")))
        .collect::<Result<_, _>>()
        .map_err(|e| TestCaseError::fail(e.to_string()))?;

    for (id, (kind, x, y)) in ids.iter().zip(nodes) {
        store.add_node(ComponentTemplate::for_kind(*kind).instantiate(id.clone(), Position::new(*x, *y)));
    }
    for (n, (from, to, from_anchor, to_anchor)) in edges.iter().enumerate() {
        let (Some(from), Some(to)) = (ids.get(from % ids.len()), ids.get(to % ids.len())) else {
            continue;
        };
        let id = ConnectionId::new(format!("e{n}")).map_err(|e| TestCaseError::fail(e.to_string()))?;
        if let Ok(edge) = Connection::new(
            id,
            AnchorRef::new(from.clone(), *from_anchor),
            AnchorRef::new(to.clone(), *to_anchor),
        ) {
            store.add_edge(edge);
        }
    }
    Ok(store)
}

proptest! {
    /// Property: removing any component leaves no connection touching it
    #[test]
    fn prop_remove_prunes_incident_edges(
        nodes in prop::collection::vec((kind_strategy(), coord(), coord()), 1..8),
        edges in prop::collection::vec((0usize..8, 0usize..8, anchor_strategy(), anchor_strategy()), 0..20),
        victim in 0usize..8,
    ) {
        let mut store = build_graph(&nodes, &edges)?;
        let victim = NodeId::new(format!("n{}", victim % nodes.len()))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let untouched = store.connections().iter().filter(|c| !c.touches(&victim)).count();

        prop_assert!(store.remove_node(&victim).is_some());
        prop_assert!(store.connections().iter().all(|c| !c.touches(&victim)));
        prop_assert_eq!(store.connections().len(), untouched);
        for connection in store.connections() {
            prop_assert!(store.contains_node(connection.from()));
            prop_assert!(store.contains_node(connection.to()));
            prop_assert!(!connection.is_self_loop());
        }
    }

    /// Property: a pan moves every component by the total pointer travel
    #[test]
    fn prop_pan_translates_all_components(
        nodes in prop::collection::vec((kind_strategy(), coord(), coord()), 1..6),
        path in prop::collection::vec((-1000.0..1000.0f64, -1000.0..1000.0f64), 1..10),
    ) {
        let mut session = EditorSession::with_ids(EditorConfig::default(), Box::new(SequentialIds::new()));
        session.set_canvas_rect(CanvasRect::new(0.0, 0.0, 2000.0, 2000.0));
        let store = build_graph(&nodes, &[])?;
        session.load_snapshot(None, store.to_snapshot("pan"));
        let before: Vec<Position> = session.graph().components().iter().map(|c| c.position()).collect();

        let start = Position::new(0.0, 0.0);
        session.pointer_down(start, &PointerTarget::Background);
        for (x, y) in &path {
            session.pointer_move(Position::new(*x, *y));
        }
        session.pointer_up();

        let (end_x, end_y) = path.last().copied().unwrap_or((0.0, 0.0));
        for (component, original) in session.graph().components().iter().zip(&before) {
            let moved = component.position();
            prop_assert!((moved.x - (original.x + end_x)).abs() < EPSILON);
            prop_assert!((moved.y - (original.y + end_y)).abs() < EPSILON);
        }
    }

    /// Property: serializing then loading a valid graph gives the same graph
    #[test]
    fn prop_snapshot_round_trip(
        nodes in prop::collection::vec((kind_strategy(), coord(), coord()), 0..8),
        edges in prop::collection::vec((0usize..8, 0usize..8, anchor_strategy(), anchor_strategy()), 0..12),
    ) {
        if nodes.is_empty() {
            return Ok(());
        }
        let store = build_graph(&nodes, &edges)?;
        let json = store
            .to_snapshot("round trip")
            .to_pretty_json()
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let parsed = GraphSnapshot::from_json(&json).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert!(parsed.is_valid());
        prop_assert_eq!(GraphStore::from_snapshot(parsed), store);
    }
}
