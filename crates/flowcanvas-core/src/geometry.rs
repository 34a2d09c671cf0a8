//! Anchor geometry for component cards.
//!
//! Pure functions only. These are evaluated on every render pass for every
//! connection and for the in-progress rubber-band line, so they never
//! allocate and never fail.

use serde::{Deserialize, Serialize};

use crate::models::{AnchorKind, Position, WorkflowComponent};

/// Width and height shared by every component card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeFootprint {
    pub width: f64,
    pub height: f64,
}

impl NodeFootprint {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for NodeFootprint {
    fn default() -> Self {
        Self::new(180.0, 100.0)
    }
}

/// A 2D displacement
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// Absolute canvas coordinate of `anchor` on a card whose top-left is `origin`
///
/// # Examples
///
/// ```
/// use flowcanvas_core::geometry::{anchor_point_at, NodeFootprint};
/// use flowcanvas_core::models::{AnchorKind, Position};
///
/// let p = anchor_point_at(Position::new(10.0, 20.0), AnchorKind::Output, NodeFootprint::default());
/// assert_eq!(p, Position::new(190.0, 70.0));
/// ```
#[must_use]
pub fn anchor_point_at(origin: Position, anchor: AnchorKind, footprint: NodeFootprint) -> Position {
    let Position { x, y } = origin;
    let NodeFootprint { width, height } = footprint;
    match anchor {
        AnchorKind::Input => Position::new(x, y + height / 2.0),
        AnchorKind::Output => Position::new(x + width, y + height / 2.0),
        AnchorKind::Top => Position::new(x + width / 2.0, y),
        AnchorKind::Bottom => Position::new(x + width / 2.0, y + height),
        AnchorKind::Center => Position::new(x + width / 2.0, y + height / 2.0),
    }
}

/// Absolute canvas coordinate of `anchor` on `node`
#[must_use]
pub fn anchor_point(node: &WorkflowComponent, anchor: AnchorKind, footprint: NodeFootprint) -> Position {
    anchor_point_at(node.position(), anchor, footprint)
}

#[must_use]
pub fn node_center(node: &WorkflowComponent, footprint: NodeFootprint) -> Position {
    anchor_point(node, AnchorKind::Center, footprint)
}

/// A straight line segment in canvas space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Position,
    pub to: Position,
}

impl LineSegment {
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub fn midpoint(&self) -> Position {
        Position::new(
            (self.from.x + self.to.x) / 2.0,
            (self.from.y + self.to.y) / 2.0,
        )
    }
}

/// Screen-space rectangle of the canvas element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Screen coordinate of the canvas top-left corner
    #[must_use]
    pub const fn origin(&self) -> Position {
        Position::new(self.left, self.top)
    }

    /// Inclusive containment test for a screen point
    #[must_use]
    pub fn contains(&self, screen: Position) -> bool {
        screen.x >= self.left
            && screen.x <= self.left + self.width
            && screen.y >= self.top
            && screen.y <= self.top + self.height
    }

    /// Converts a screen point to canvas-local coordinates
    #[must_use]
    pub fn to_local(&self, screen: Position) -> Position {
        to_local(screen, self.origin())
    }
}

/// Screen point minus the canvas's screen origin
#[must_use]
pub fn to_local(screen: Position, canvas_origin: Position) -> Position {
    Position::new(screen.x - canvas_origin.x, screen.y - canvas_origin.y)
}
