//! Editor session: the graph plus every gesture controller for one canvas.
//!
//! The session is the only thing the UI mutates. It routes pointer and
//! touch input to the drag, connection and pan controllers and keeps them
//! consistent with each other and with the graph:
//!
//! - a drag and a pan never run at the same time
//! - an armed connection survives panning but is cleared when its source
//!   component is removed or a component drag starts
//! - removing a component closes the inspector if it was editing it
//!
//! Pointer coordinates are canvas-local. Drops take screen coordinates and
//! convert them with the last measured canvas rectangle.

use tracing::{debug, info, warn};

use crate::config::EditorConfig;
use crate::controls::{
    ConnectOutcome, ConnectionController, DragController, DragPayload, DropOutcome,
    PanController, PanOffset,
};
use crate::error::Result;
use crate::geometry::{CanvasRect, LineSegment, anchor_point};
use crate::graph::GraphStore;
use crate::ids::{IdGenerator, UuidIds};
use crate::inspector::InspectorSession;
use crate::interaction::anchor_at;
use crate::models::{AnchorKind, ComponentKind, ConnectionId, NodeId, Position, WorkflowComponent};
use crate::persistence::{SavedWorkflow, WorkflowId};
use crate::snapshot::GraphSnapshot;
use crate::template::ComponentTemplate;

/// Which event family drives the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Mouse,
    Touch,
}

impl InputMode {
    /// Touch for narrow viewports or coarse (finger) pointers
    #[must_use]
    pub fn detect(viewport_width: f64, coarse_pointer: bool, breakpoint: f64) -> Self {
        if coarse_pointer || viewport_width <= breakpoint {
            Self::Touch
        } else {
            Self::Mouse
        }
    }
}

/// What a pointer or touch went down on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty canvas, not a child element
    Background,
    Node(NodeId),
    Anchor(NodeId, AnchorKind),
    /// A palette entry (touch drags only)
    Palette(ComponentKind),
}

/// Progress of the initial workflow load
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Ready,
    Loading,
    Failed(String),
}

/// Rendered connection
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLine {
    pub id: ConnectionId,
    pub line: LineSegment,
}

/// One editor page's worth of state
#[derive(Debug)]
pub struct EditorSession {
    config: EditorConfig,
    graph: GraphStore,
    drag: DragController,
    connect: ConnectionController,
    pan: PanController,
    inspector: InspectorSession,
    hovered: Option<NodeId>,
    /// The current touch armed a connection from an anchor
    touch_from_anchor: bool,
    name: String,
    workflow_id: Option<WorkflowId>,
    canvas: Option<CanvasRect>,
    input_mode: InputMode,
    load_state: LoadState,
    ids: Box<dyn IdGenerator>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorSession {
    /// Empty session with random identifiers
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self::with_ids(config, Box::new(UuidIds))
    }

    #[must_use]
    pub fn with_ids(config: EditorConfig, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            config,
            graph: GraphStore::new(),
            drag: DragController::new(),
            connect: ConnectionController::new(),
            pan: PanController::new(),
            inspector: InspectorSession::new(),
            hovered: None,
            touch_from_anchor: false,
            name: String::new(),
            workflow_id: None,
            canvas: None,
            input_mode: InputMode::Mouse,
            load_state: LoadState::Ready,
            ids,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub const fn graph(&self) -> &GraphStore {
        &self.graph
    }

    #[must_use]
    pub const fn drag(&self) -> &DragController {
        &self.drag
    }

    #[must_use]
    pub const fn connect(&self) -> &ConnectionController {
        &self.connect
    }

    #[must_use]
    pub const fn pan_offset(&self) -> PanOffset {
        self.pan.offset()
    }

    #[must_use]
    pub const fn is_panning(&self) -> bool {
        self.pan.is_panning()
    }

    #[must_use]
    pub const fn inspector(&self) -> &InspectorSession {
        &self.inspector
    }

    /// Scratch edits go through here; only commit touches the graph
    pub fn inspector_mut(&mut self) -> &mut InspectorSession {
        &mut self.inspector
    }

    #[must_use]
    pub const fn hovered(&self) -> Option<&NodeId> {
        self.hovered.as_ref()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub const fn workflow_id(&self) -> Option<&WorkflowId> {
        self.workflow_id.as_ref()
    }

    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn set_input_mode(&mut self, mode: InputMode) {
        if mode != self.input_mode {
            debug!(?mode, "Input mode changed");
            self.input_mode = mode;
        }
    }

    /// Re-evaluates the input mode for the current viewport
    pub fn detect_input_mode(&mut self, viewport_width: f64, coarse_pointer: bool) {
        let mode = InputMode::detect(viewport_width, coarse_pointer, self.config.mobile_breakpoint);
        self.set_input_mode(mode);
    }

    #[must_use]
    pub const fn canvas_rect(&self) -> Option<CanvasRect> {
        self.canvas
    }

    /// Records where the canvas element sits on screen
    pub fn set_canvas_rect(&mut self, rect: CanvasRect) {
        self.canvas = Some(rect);
    }

    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    // ---- hover ----

    pub fn hover_enter(&mut self, id: NodeId) {
        self.hovered = Some(id);
    }

    pub fn hover_leave(&mut self, id: &NodeId) {
        if self.hovered.as_ref() == Some(id) {
            self.hovered = None;
        }
    }

    // ---- render projections ----

    /// Component is being dragged and renders dimmed
    #[must_use]
    pub fn is_lifted(&self, id: &NodeId) -> bool {
        self.drag.is_lifted(id)
    }

    #[must_use]
    pub fn is_armed_source(&self, id: &NodeId) -> bool {
        self.connect.is_armed_source(id)
    }

    #[must_use]
    pub fn anchors_interactive(&self, id: &NodeId) -> bool {
        self.connect.anchors_interactive(id, self.hovered.as_ref())
    }

    /// In-progress connection line, if a connection is armed
    #[must_use]
    pub fn rubber_band(&self) -> Option<LineSegment> {
        self.connect.rubber_band(&self.graph, self.config.footprint)
    }

    /// Straight segments for every connection, endpoints at their anchors
    #[must_use]
    pub fn edge_lines(&self) -> Vec<EdgeLine> {
        let footprint = self.config.footprint;
        self.graph
            .connections()
            .iter()
            .filter_map(|connection| {
                let from = self.graph.node(connection.from())?;
                let to = self.graph.node(connection.to())?;
                Some(EdgeLine {
                    id: connection.id().clone(),
                    line: LineSegment::new(
                        anchor_point(from, connection.from_type(), footprint),
                        anchor_point(to, connection.to_type(), footprint),
                    ),
                })
            })
            .collect()
    }

    // ---- drag and drop ----

    pub fn palette_drag_start(&mut self, kind: ComponentKind) {
        self.pan.end();
        self.drag.start_from_palette(ComponentTemplate::for_kind(kind));
    }

    /// Lifts an existing component; clears any armed connection
    pub fn node_drag_start(&mut self, id: NodeId) {
        if !self.graph.contains_node(&id) {
            debug!(component = %id, "Drag start on unknown component");
            return;
        }
        self.pan.end();
        self.connect.cancel();
        self.drag.start_from_node(id);
    }

    /// Drops the active drag at a screen point
    pub fn drop_on_canvas(&mut self, screen: Position) -> DropOutcome {
        let origin = self.canvas.map(|rect| rect.origin());
        self.drag.drop_at(
            screen,
            origin,
            self.config.drop_offset,
            &mut self.graph,
            self.ids.as_mut(),
        )
    }

    /// Drops using the drag's data-transfer text when no drag is tracked
    /// locally. Unreadable payloads are discarded.
    pub fn drop_transfer(&mut self, screen: Position, transfer: &str) -> DropOutcome {
        if !self.drag.is_dragging() {
            let Some(payload) = DragPayload::decode(transfer) else {
                debug!("Discarding drop with unreadable payload");
                return DropOutcome::Ignored;
            };
            match payload {
                DragPayload::Palette(template) => self.drag.start_from_palette(template),
                DragPayload::Existing(id) => self.drag.start_from_node(id),
            }
        }
        self.drop_on_canvas(screen)
    }

    pub fn drag_end(&mut self) {
        self.drag.end();
    }

    // ---- connections ----

    /// Handles a click or tap on an anchor dot
    pub fn anchor_clicked(&mut self, node: NodeId, anchor: AnchorKind) -> ConnectOutcome {
        if !self.graph.contains_node(&node) || !self.anchors_interactive(&node) {
            return ConnectOutcome::Ignored;
        }
        self.connect
            .click_anchor(node, anchor, &mut self.graph, self.ids.as_mut())
    }

    /// Clears an armed connection, e.g. on Escape
    pub fn cancel_connection(&mut self) -> bool {
        self.connect.cancel()
    }

    // ---- mouse path ----

    /// Mouse down. Only the bare canvas starts a pan.
    pub fn pointer_down(&mut self, local: Position, target: &PointerTarget) {
        if matches!(target, PointerTarget::Background) && !self.drag.is_dragging() {
            self.pan.begin(local);
        }
    }

    pub fn pointer_move(&mut self, local: Position) {
        if let Some((dx, dy)) = self.pan.move_to(local) {
            self.graph.translate_all(dx, dy);
        }
        self.connect.pointer_moved(local);
    }

    pub fn pointer_up(&mut self) {
        self.pan.end();
    }

    pub fn pointer_leave(&mut self) {
        self.pan.end();
    }

    // ---- touch path ----

    /// Anchor dot under a canvas-local point, topmost component first.
    /// Only the four perimeter anchors are ever returned.
    #[must_use]
    pub fn anchor_under(&self, local: Position) -> Option<(NodeId, AnchorKind)> {
        let footprint = self.config.footprint;
        let radius = self.config.anchor_radius;
        self.graph
            .components()
            .iter()
            .rev()
            .find_map(|node| anchor_at(node, local, footprint, radius).map(|a| (node.id().clone(), a)))
    }

    fn connect_at(&mut self, local: Position) -> Option<ConnectOutcome> {
        let source = self.connect.armed()?.node.clone();
        let (node, anchor) = self.anchor_under(local)?;
        if node == source {
            return None;
        }
        let outcome = self
            .connect
            .click_anchor(node, anchor, &mut self.graph, self.ids.as_mut());
        debug!(?outcome, "Connection released over anchor");
        Some(outcome)
    }

    fn screen_to_local(&self, screen: Position) -> Position {
        self.canvas.map_or(screen, |rect| rect.to_local(screen))
    }

    /// Touch start. Returns `true` if the default action should be
    /// suppressed.
    pub fn touch_start(&mut self, screen: Position, target: PointerTarget) -> bool {
        self.touch_from_anchor = false;
        match target {
            PointerTarget::Background => {
                self.hovered = None;
                if !self.drag.is_dragging() {
                    self.pan.begin(self.screen_to_local(screen));
                }
                false
            }
            PointerTarget::Node(id) => {
                if self.graph.contains_node(&id) {
                    self.hovered = Some(id.clone());
                    self.pan.end();
                    self.drag.start_touch(DragPayload::Existing(id), screen);
                }
                false
            }
            PointerTarget::Anchor(id, anchor) => {
                self.hovered = Some(id.clone());
                let outcome = self.anchor_clicked(id, anchor);
                self.touch_from_anchor = outcome == ConnectOutcome::Armed;
                true
            }
            PointerTarget::Palette(kind) => {
                self.pan.end();
                self.drag.start_touch(
                    DragPayload::Palette(ComponentTemplate::for_kind(kind)),
                    screen,
                );
                false
            }
        }
    }

    /// True while a pan, drag or armed connection is tracking the pointer
    #[must_use]
    pub const fn gesture_active(&self) -> bool {
        self.pan.is_panning() || self.connect.armed().is_some() || self.drag.is_dragging()
    }

    /// Touch move. Returns `true` while a gesture owns the touch, in which
    /// case page scrolling must be prevented.
    pub fn touch_move(&mut self, screen: Position) -> bool {
        let local = self.screen_to_local(screen);
        if let Some((dx, dy)) = self.pan.move_to(local) {
            self.graph.translate_all(dx, dy);
        }
        self.connect.pointer_moved(local);
        self.gesture_active()
    }

    /// Touch end: finishes a pan or a touch drag. A touch that armed a
    /// connection from an anchor completes it when lifted over another
    /// component's anchor dot.
    pub fn touch_end(&mut self, screen: Position) -> DropOutcome {
        let panned = self.pan.end();
        let from_anchor = std::mem::take(&mut self.touch_from_anchor);
        if !self.drag.is_dragging() {
            if from_anchor && !panned {
                self.connect_at(self.screen_to_local(screen));
            }
            return DropOutcome::Ignored;
        }
        let Some(canvas) = self.canvas else {
            self.drag.end();
            return DropOutcome::Ignored;
        };
        let outcome = self.drag.release(
            screen,
            canvas,
            self.config.drop_offset,
            self.config.touch_drag_threshold,
            &mut self.graph,
            self.ids.as_mut(),
        );
        if matches!(outcome, DropOutcome::Moved(_)) {
            self.connect.cancel();
        }
        outcome
    }

    // ---- graph edits ----

    /// Removes a component with its connections.
    ///
    /// Clears hover, armed connection, drag and inspector state that
    /// referred to it.
    pub fn remove_node(&mut self, id: &NodeId) -> bool {
        let Some(pruned) = self.graph.remove_node(id) else {
            return false;
        };
        if self.connect.is_armed_source(id) {
            self.connect.cancel();
        }
        if self.drag.is_lifted(id) {
            self.drag.end();
        }
        self.inspector.close_if_editing(id);
        if self.hovered.as_ref() == Some(id) {
            self.hovered = None;
        }
        debug!(component = %id, pruned = pruned.len(), "Component deleted");
        true
    }

    pub fn remove_edge(&mut self, id: &ConnectionId) -> bool {
        self.graph.remove_edge(id).is_some()
    }

    // ---- inspector ----

    pub fn open_inspector(&mut self, id: &NodeId) -> bool {
        let Some(component) = self.graph.node(id) else {
            return false;
        };
        self.inspector.open(component);
        true
    }

    /// # Errors
    /// Returns [`EditorError::InspectorClosed`](crate::EditorError::InspectorClosed)
    /// if the inspector is not open.
    pub fn commit_inspector(&mut self) -> Result<bool> {
        self.inspector.commit(&mut self.graph)
    }

    pub fn discard_inspector(&mut self) {
        self.inspector.discard();
    }

    // ---- persistence ----

    /// Clears the canvas ahead of a load
    pub fn begin_loading(&mut self) {
        self.reset_transient();
        self.graph = GraphStore::new();
        self.load_state = LoadState::Loading;
    }

    /// Replaces the graph with a loaded workflow
    pub fn load_snapshot(&mut self, id: Option<WorkflowId>, snapshot: GraphSnapshot) {
        for issue in snapshot.validate() {
            warn!(%issue, "Loaded workflow has invalid data");
        }
        self.reset_transient();
        self.name.clone_from(&snapshot.name);
        self.graph = GraphStore::from_snapshot(snapshot);
        info!(
            workflow = id.as_ref().map_or("new", WorkflowId::as_str),
            components = self.graph.components().len(),
            connections = self.graph.connections().len(),
            "Workflow loaded"
        );
        self.workflow_id = id;
        self.load_state = LoadState::Ready;
    }

    /// Leaves the graph empty and records why
    pub fn load_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!(%reason, "Workflow load failed");
        self.graph = GraphStore::new();
        self.load_state = LoadState::Failed(reason);
    }

    /// Records the id the backend assigned. Returns `true` for a first save.
    pub fn saved(&mut self, saved: SavedWorkflow) -> bool {
        let first = self.workflow_id.is_none();
        info!(workflow = %saved.id, first, "Workflow saved");
        self.workflow_id = Some(saved.id);
        first
    }

    /// Serializable copy of the workflow
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        self.graph.to_snapshot(self.name.clone())
    }

    fn reset_transient(&mut self) {
        self.drag.end();
        self.connect.cancel();
        self.pan.end();
        self.inspector.discard();
        self.hovered = None;
        self.touch_from_anchor = false;
    }

    /// Looks up a component
    #[must_use]
    pub fn component(&self, id: &NodeId) -> Option<&WorkflowComponent> {
        self.graph.node(id)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]
    #![allow(clippy::panic)]

    use super::*;
    use crate::ids::SequentialIds;

    fn session() -> EditorSession {
        let mut session =
            EditorSession::with_ids(EditorConfig::default(), Box::new(SequentialIds::new()));
        session.set_canvas_rect(CanvasRect::new(0.0, 0.0, 1000.0, 800.0));
        session
    }

    fn place(session: &mut EditorSession, kind: ComponentKind, screen: Position) -> NodeId {
        session.palette_drag_start(kind);
        match session.drop_on_canvas(screen) {
            DropOutcome::Created(id) => id,
            other => panic!("expected a new component, got {other:?}"),
        }
    }

    #[test]
    fn test_input_mode_detection() {
        assert_eq!(InputMode::detect(1280.0, false, 768.0), InputMode::Mouse);
        assert_eq!(InputMode::detect(768.0, false, 768.0), InputMode::Touch);
        assert_eq!(InputMode::detect(1920.0, true, 768.0), InputMode::Touch);
    }

    #[test]
    fn test_node_drag_cancels_armed_connection() {
        let mut session = session();
        let a = place(&mut session, ComponentKind::Input, Position::new(100.0, 100.0));
        session.hover_enter(a.clone());
        assert_eq!(session.anchor_clicked(a.clone(), AnchorKind::Output), ConnectOutcome::Armed);

        session.node_drag_start(a.clone());
        assert!(session.connect().armed().is_none());
        assert!(session.is_lifted(&a));
    }

    #[test]
    fn test_pan_keeps_armed_connection() {
        let mut session = session();
        let a = place(&mut session, ComponentKind::Input, Position::new(100.0, 100.0));
        session.hover_enter(a.clone());
        session.anchor_clicked(a.clone(), AnchorKind::Output);
        session.hover_leave(&a);

        session.pointer_down(Position::new(600.0, 600.0), &PointerTarget::Background);
        session.pointer_move(Position::new(650.0, 600.0));
        session.pointer_up();
        assert!(session.is_armed_source(&a));
        assert!(session.anchors_interactive(&a));
    }

    #[test]
    fn test_non_background_does_not_pan() {
        let mut session = session();
        let a = place(&mut session, ComponentKind::Action, Position::new(200.0, 200.0));
        let before = session.component(&a).unwrap().position();
        session.pointer_down(Position::new(150.0, 150.0), &PointerTarget::Node(a.clone()));
        session.pointer_move(Position::new(300.0, 300.0));
        assert!(!session.is_panning());
        assert_eq!(session.component(&a).unwrap().position(), before);
    }

    #[test]
    fn test_pointer_leave_ends_pan() {
        let mut session = session();
        session.pointer_down(Position::new(0.0, 0.0), &PointerTarget::Background);
        assert!(session.is_panning());
        session.pointer_leave();
        assert!(!session.is_panning());
    }

    #[test]
    fn test_anchor_click_requires_hover_or_armed() {
        let mut session = session();
        let a = place(&mut session, ComponentKind::Input, Position::new(100.0, 100.0));
        assert_eq!(session.anchor_clicked(a, AnchorKind::Top), ConnectOutcome::Ignored);
    }

    #[test]
    fn test_remove_armed_source_cancels_and_closes_inspector() {
        let mut session = session();
        let a = place(&mut session, ComponentKind::Input, Position::new(100.0, 100.0));
        session.hover_enter(a.clone());
        session.anchor_clicked(a.clone(), AnchorKind::Output);
        assert!(session.open_inspector(&a));

        assert!(session.remove_node(&a));
        assert!(session.connect().armed().is_none());
        assert!(!session.inspector().is_open());
        assert!(session.hovered().is_none());
        assert!(!session.remove_node(&a));
    }

    #[test]
    fn test_touch_move_prevents_scroll_only_during_gesture() {
        let mut session = session();
        assert!(!session.touch_move(Position::new(10.0, 10.0)));
        session.touch_start(Position::new(10.0, 10.0), PointerTarget::Background);
        assert!(session.touch_move(Position::new(20.0, 10.0)));
        session.touch_end(Position::new(20.0, 10.0));
        assert!(!session.touch_move(Position::new(30.0, 10.0)));
    }

    #[test]
    fn test_touch_connection_draws_rubber_band() {
        let mut session = session();
        let a = place(&mut session, ComponentKind::Input, Position::new(100.0, 100.0));
        let b = place(&mut session, ComponentKind::Output, Position::new(500.0, 100.0));

        assert!(session.touch_start(Position::new(0.0, 0.0), PointerTarget::Anchor(a.clone(), AnchorKind::Output)));
        assert!(session.touch_move(Position::new(300.0, 300.0)));
        let band = session.rubber_band().unwrap();
        assert_eq!(band.to, Position::new(300.0, 300.0));

        session.touch_start(Position::new(0.0, 0.0), PointerTarget::Anchor(b, AnchorKind::Input));
        assert!(session.rubber_band().is_none());
        assert_eq!(session.graph().connections().len(), 1);
    }

    #[test]
    fn test_touch_drag_moves_component() {
        let mut session = session();
        let a = place(&mut session, ComponentKind::Action, Position::new(200.0, 200.0));
        session.touch_start(Position::new(200.0, 200.0), PointerTarget::Node(a.clone()));
        let outcome = session.touch_end(Position::new(400.0, 300.0));
        assert_eq!(outcome, DropOutcome::Moved(a.clone()));
        assert_eq!(session.component(&a).unwrap().position(), Position::new(325.0, 220.0));
    }

    #[test]
    fn test_touch_palette_drag() {
        let mut session = session();
        session.touch_start(Position::new(-50.0, 10.0), PointerTarget::Palette(ComponentKind::Output));
        let outcome = session.touch_end(Position::new(300.0, 300.0));
        assert!(matches!(outcome, DropOutcome::Created(_)));
        assert_eq!(session.graph().components().len(), 1);
    }

    #[test]
    fn test_drop_transfer_discards_garbage() {
        let mut session = session();
        assert_eq!(
            session.drop_transfer(Position::new(10.0, 10.0), "{\"oops\""),
            DropOutcome::Ignored
        );
        assert!(matches!(
            session.drop_transfer(Position::new(300.0, 300.0), "palette:input"),
            DropOutcome::Created(_)
        ));
    }

    #[test]
    fn test_load_and_snapshot() {
        let mut session = session();
        let a = place(&mut session, ComponentKind::Input, Position::new(100.0, 100.0));
        session.set_name("Pipeline");
        let snapshot = session.snapshot();

        let mut other = EditorSession::default();
        other.begin_loading();
        assert_eq!(other.load_state(), &LoadState::Loading);
        other.load_snapshot(Some(WorkflowId::new("9").unwrap()), snapshot);
        assert_eq!(other.load_state(), &LoadState::Ready);
        assert_eq!(other.name(), "Pipeline");
        assert!(other.component(&a).is_some());
        assert_eq!(other.workflow_id().unwrap().as_str(), "9");
    }

    #[test]
    fn test_load_failure_leaves_empty_graph() {
        let mut session = session();
        place(&mut session, ComponentKind::Input, Position::new(100.0, 100.0));
        session.load_failed("status 500");
        assert!(session.graph().is_empty());
        assert!(matches!(session.load_state(), LoadState::Failed(_)));
    }

    #[test]
    fn test_first_save_records_id() {
        let mut session = session();
        let id = WorkflowId::new("abc").unwrap();
        assert!(session.saved(SavedWorkflow { id: id.clone() }));
        assert!(!session.saved(SavedWorkflow { id }));
    }

    #[test]
    fn test_edge_lines_follow_components() {
        let mut session = session();
        let a = place(&mut session, ComponentKind::Input, Position::new(75.0, 80.0));
        let b = place(&mut session, ComponentKind::Output, Position::new(475.0, 80.0));
        session.hover_enter(a.clone());
        session.anchor_clicked(a.clone(), AnchorKind::Output);
        session.anchor_clicked(b, AnchorKind::Input);

        let lines = session.edge_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].line.from, Position::new(180.0, 50.0));
        assert_eq!(lines[0].line.to, Position::new(400.0, 50.0));

        session.node_drag_start(a);
        session.drop_on_canvas(Position::new(75.0, 280.0));
        assert_eq!(session.edge_lines()[0].line.from, Position::new(180.0, 250.0));
    }
}
