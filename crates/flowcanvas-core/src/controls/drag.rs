//! Drag-and-drop of components onto and across the canvas.
//!
//! A drag carries either a palette template (creates a component on drop)
//! or the id of a component already on the canvas (moves it on drop).
//! Dropping converts the screen point to canvas-local coordinates and
//! subtracts the centering offset so the card lands under the pointer.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use tracing::debug;

use crate::geometry::{CanvasRect, Offset, to_local};
use crate::graph::GraphStore;
use crate::ids::IdGenerator;
use crate::models::{ComponentKind, NodeId, Position};
use crate::template::ComponentTemplate;

const PALETTE_PREFIX: &str = "palette:";
const NODE_PREFIX: &str = "node:";

/// What is being dragged
#[derive(Debug, Clone, PartialEq)]
pub enum DragPayload {
    Palette(ComponentTemplate),
    Existing(NodeId),
}

impl DragPayload {
    /// Text form carried in a browser drag's data transfer
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::Palette(template) => format!("{PALETTE_PREFIX}{}", template.kind),
            Self::Existing(id) => format!("{NODE_PREFIX}{id}"),
        }
    }

    /// Parses [`encode`](Self::encode) output; anything else is `None`
    #[must_use]
    pub fn decode(raw: &str) -> Option<Self> {
        if let Some(kind) = raw.strip_prefix(PALETTE_PREFIX) {
            return ComponentKind::ALL
                .into_iter()
                .find(|k| k.as_str() == kind)
                .map(|k| Self::Palette(ComponentTemplate::for_kind(k)));
        }
        raw.strip_prefix(NODE_PREFIX)
            .and_then(|id| NodeId::new(id).ok())
            .map(Self::Existing)
    }
}

/// Drag gesture state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragPayload),
}

/// Effect of a drop on the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Created(NodeId),
    Moved(NodeId),
    Ignored,
}

/// Drag gesture controller
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DragController {
    state: DragState,
    /// Screen point where a touch drag began
    press: Option<Position>,
}

impl DragController {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DragState::Idle,
            press: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// True while `id` is the component being dragged; it renders dimmed
    #[must_use]
    pub fn is_lifted(&self, id: &NodeId) -> bool {
        matches!(&self.state, DragState::Dragging(DragPayload::Existing(dragged)) if dragged == id)
    }

    pub fn start_from_palette(&mut self, template: ComponentTemplate) {
        debug!(kind = %template.kind, "Palette drag started");
        self.begin(DragPayload::Palette(template), None);
    }

    pub fn start_from_node(&mut self, id: NodeId) {
        debug!(component = %id, "Component drag started");
        self.begin(DragPayload::Existing(id), None);
    }

    /// Starts a drag that will finish with [`release`](Self::release)
    pub fn start_touch(&mut self, payload: DragPayload, screen: Position) {
        debug!(payload = %payload.encode(), "Touch drag started");
        self.begin(payload, Some(screen));
    }

    fn begin(&mut self, payload: DragPayload, press: Option<Position>) {
        self.state = DragState::Dragging(payload);
        self.press = press;
    }

    /// Completes the drag at `screen`.
    ///
    /// Without an active drag or a known canvas origin this does nothing.
    pub fn drop_at(
        &mut self,
        screen: Position,
        canvas_origin: Option<Position>,
        centering: Offset,
        graph: &mut GraphStore,
        ids: &mut dyn IdGenerator,
    ) -> DropOutcome {
        let state = std::mem::take(&mut self.state);
        self.press = None;

        let DragState::Dragging(payload) = state else {
            debug!("Drop without an active drag");
            return DropOutcome::Ignored;
        };
        let Some(origin) = canvas_origin else {
            debug!("Drop before the canvas was measured");
            return DropOutcome::Ignored;
        };

        let local = to_local(screen, origin);
        let position = local.translated(-centering.dx, -centering.dy);

        match payload {
            DragPayload::Palette(template) => {
                let component = template.instantiate(ids.next_node_id(), position);
                let id = component.id().clone();
                if graph.add_node(component) {
                    DropOutcome::Created(id)
                } else {
                    DropOutcome::Ignored
                }
            }
            DragPayload::Existing(id) => {
                if graph.update_node_position(&id, position) {
                    DropOutcome::Moved(id)
                } else {
                    DropOutcome::Ignored
                }
            }
        }
    }

    /// Finishes a touch drag.
    ///
    /// Drops when `screen` is inside `canvas`, otherwise aborts. A touch on
    /// an existing component that travelled less than `threshold` is a tap
    /// and leaves the component where it is.
    pub fn release(
        &mut self,
        screen: Position,
        canvas: CanvasRect,
        centering: Offset,
        threshold: f64,
        graph: &mut GraphStore,
        ids: &mut dyn IdGenerator,
    ) -> DropOutcome {
        if !canvas.contains(screen) {
            self.end();
            return DropOutcome::Ignored;
        }
        let is_tap = match (&self.state, self.press) {
            (DragState::Dragging(DragPayload::Existing(_)), Some(press)) => {
                let (dx, dy) = screen.delta_from(press);
                dx.hypot(dy) < threshold
            }
            _ => false,
        };
        if is_tap {
            self.end();
            return DropOutcome::Ignored;
        }
        self.drop_at(screen, Some(canvas.origin()), centering, graph, ids)
    }

    /// Abandons the drag without touching the graph
    pub fn end(&mut self) {
        if self.is_dragging() {
            debug!("Drag ended without drop");
        }
        self.state = DragState::Idle;
        self.press = None;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::ids::SequentialIds;

    const CENTER: Offset = Offset::new(75.0, 80.0);

    #[test]
    fn test_palette_drop_creates_component() {
        let mut drag = DragController::new();
        let mut graph = GraphStore::new();
        let mut ids = SequentialIds::new();

        drag.start_from_palette(ComponentTemplate::for_kind(ComponentKind::Input));
        let outcome = drag.drop_at(
            Position::new(300.0, 200.0),
            Some(Position::new(50.0, 50.0)),
            CENTER,
            &mut graph,
            &mut ids,
        );

        let id = NodeId::new("node-1").unwrap();
        assert_eq!(outcome, DropOutcome::Created(id.clone()));
        assert_eq!(graph.node(&id).unwrap().position(), Position::new(175.0, 70.0));
        assert_eq!(drag.state(), &DragState::Idle);
    }

    #[test]
    fn test_drop_without_drag_is_noop() {
        let mut drag = DragController::new();
        let mut graph = GraphStore::new();
        let outcome = drag.drop_at(
            Position::new(1.0, 1.0),
            Some(Position::origin()),
            CENTER,
            &mut graph,
            &mut SequentialIds::new(),
        );
        assert_eq!(outcome, DropOutcome::Ignored);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_drop_without_canvas_origin_is_noop() {
        let mut drag = DragController::new();
        let mut graph = GraphStore::new();
        drag.start_from_palette(ComponentTemplate::for_kind(ComponentKind::Output));
        let outcome = drag.drop_at(
            Position::new(1.0, 1.0),
            None,
            CENTER,
            &mut graph,
            &mut SequentialIds::new(),
        );
        assert_eq!(outcome, DropOutcome::Ignored);
        assert!(graph.is_empty());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_existing_drag_moves_and_lifts() {
        let mut drag = DragController::new();
        let mut graph = GraphStore::new();
        let mut ids = SequentialIds::new();
        let id = ids.next_node_id();
        graph.add_node(
            ComponentTemplate::for_kind(ComponentKind::Action).instantiate(id.clone(), Position::origin()),
        );

        drag.start_from_node(id.clone());
        assert!(drag.is_lifted(&id));
        let outcome = drag.drop_at(
            Position::new(500.0, 400.0),
            Some(Position::new(0.0, 0.0)),
            CENTER,
            &mut graph,
            &mut ids,
        );
        assert_eq!(outcome, DropOutcome::Moved(id.clone()));
        assert!(!drag.is_lifted(&id));
        assert_eq!(graph.node(&id).unwrap().position(), Position::new(425.0, 320.0));
    }

    #[test]
    fn test_end_without_drop_leaves_graph() {
        let mut drag = DragController::new();
        drag.start_from_palette(ComponentTemplate::for_kind(ComponentKind::Input));
        drag.end();
        assert_eq!(drag.state(), &DragState::Idle);
    }

    #[test]
    fn test_touch_release_outside_canvas_aborts() {
        let mut drag = DragController::new();
        let mut graph = GraphStore::new();
        let canvas = CanvasRect::new(100.0, 0.0, 400.0, 400.0);
        drag.start_touch(
            DragPayload::Palette(ComponentTemplate::for_kind(ComponentKind::Input)),
            Position::new(20.0, 20.0),
        );
        let outcome = drag.release(
            Position::new(50.0, 50.0),
            canvas,
            CENTER,
            4.0,
            &mut graph,
            &mut SequentialIds::new(),
        );
        assert_eq!(outcome, DropOutcome::Ignored);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_touch_tap_on_component_does_not_move_it() {
        let mut drag = DragController::new();
        let mut graph = GraphStore::new();
        let mut ids = SequentialIds::new();
        let id = ids.next_node_id();
        graph.add_node(
            ComponentTemplate::for_kind(ComponentKind::Input).instantiate(id.clone(), Position::new(10.0, 10.0)),
        );
        let canvas = CanvasRect::new(0.0, 0.0, 800.0, 600.0);

        drag.start_touch(DragPayload::Existing(id.clone()), Position::new(100.0, 100.0));
        let outcome = drag.release(Position::new(102.0, 101.0), canvas, CENTER, 4.0, &mut graph, &mut ids);
        assert_eq!(outcome, DropOutcome::Ignored);
        assert_eq!(graph.node(&id).unwrap().position(), Position::new(10.0, 10.0));
    }

    #[test]
    fn test_payload_encoding() {
        let payload = DragPayload::Palette(ComponentTemplate::for_kind(ComponentKind::Action));
        assert_eq!(payload.encode(), "palette:action");
        assert_eq!(DragPayload::decode("palette:action"), Some(payload));
        assert_eq!(
            DragPayload::decode("node:abc"),
            Some(DragPayload::Existing(NodeId::new("abc").unwrap()))
        );
        assert_eq!(DragPayload::decode("palette:widget"), None);
        assert_eq!(DragPayload::decode("node:"), None);
        assert_eq!(DragPayload::decode("{not json"), None);
    }
}
