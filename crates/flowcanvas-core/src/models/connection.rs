//! Connection (graph edge) between two component anchors

use serde::{Deserialize, Serialize};
use std::fmt;

use super::component::NodeId;
use crate::error::EditorError;

/// Type-safe wrapper for connection identifiers
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// # Errors
    /// Returns an error if the identifier is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, EditorError> {
        let id = id.into();
        if id.is_empty() {
            return Err(EditorError::EmptyIdentifier { what: "connection" });
        }
        Ok(Self(id))
    }

    /// Wraps an id produced by an [`IdGenerator`](crate::ids::IdGenerator),
    /// which never yields an empty string.
    pub(crate) const fn from_generated(id: String) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Attachment point on a component's perimeter.
///
/// Purely geometric: any anchor may be wired to any other. `Center` only
/// appears when a snapshot carries an anchor name this editor does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorKind {
    Input,
    Output,
    Top,
    Bottom,
    #[serde(other)]
    Center,
}

impl AnchorKind {
    /// Anchors rendered on every component
    pub const ALL: [Self; 4] = [Self::Input, Self::Output, Self::Top, Self::Bottom];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Center => "center",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Input => "Input connection",
            Self::Output => "Output connection",
            Self::Top => "Top connection",
            Self::Bottom => "Bottom connection",
            Self::Center => "Connection",
        }
    }
}

impl fmt::Display for AnchorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One end of a connection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnchorRef {
    pub node: NodeId,
    pub anchor: AnchorKind,
}

impl AnchorRef {
    #[must_use]
    pub const fn new(node: NodeId, anchor: AnchorKind) -> Self {
        Self { node, anchor }
    }
}

/// Directed link from one component anchor to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    id: ConnectionId,
    from: NodeId,
    from_type: AnchorKind,
    to: NodeId,
    to_type: AnchorKind,
}

impl Connection {
    /// Creates a new connection.
    ///
    /// # Errors
    /// Returns an error if both ends are on the same component.
    pub fn new(id: ConnectionId, from: AnchorRef, to: AnchorRef) -> Result<Self, EditorError> {
        if from.node == to.node {
            return Err(EditorError::SelfLoop {
                node: from.node.to_string(),
            });
        }
        Ok(Self {
            id,
            from: from.node,
            from_type: from.anchor,
            to: to.node,
            to_type: to.anchor,
        })
    }

    #[must_use]
    pub const fn id(&self) -> &ConnectionId {
        &self.id
    }

    #[must_use]
    pub const fn from(&self) -> &NodeId {
        &self.from
    }

    #[must_use]
    pub const fn from_type(&self) -> AnchorKind {
        self.from_type
    }

    #[must_use]
    pub const fn to(&self) -> &NodeId {
        &self.to
    }

    #[must_use]
    pub const fn to_type(&self) -> AnchorKind {
        self.to_type
    }

    /// True if either end is on `node`
    #[must_use]
    pub fn touches(&self, node: &NodeId) -> bool {
        &self.from == node || &self.to == node
    }

    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn node(id: &str) -> NodeId {
        NodeId::new(id).unwrap()
    }

    #[test]
    fn test_valid_connection() {
        let connection = Connection::new(
            ConnectionId::new("c1").unwrap(),
            AnchorRef::new(node("a"), AnchorKind::Output),
            AnchorRef::new(node("b"), AnchorKind::Input),
        )
        .unwrap();
        assert_eq!(connection.from().as_str(), "a");
        assert_eq!(connection.to_type(), AnchorKind::Input);
        assert!(connection.touches(&node("b")));
        assert!(!connection.touches(&node("c")));
    }

    #[test]
    fn test_self_loop_rejected() {
        let result = Connection::new(
            ConnectionId::new("c1").unwrap(),
            AnchorRef::new(node("a"), AnchorKind::Output),
            AnchorRef::new(node("a"), AnchorKind::Input),
        );
        assert!(matches!(result, Err(EditorError::SelfLoop { .. })));
    }

    #[test]
    fn test_same_typed_anchors_allowed() {
        let result = Connection::new(
            ConnectionId::new("c1").unwrap(),
            AnchorRef::new(node("a"), AnchorKind::Top),
            AnchorRef::new(node("b"), AnchorKind::Top),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::json!({
            "id": "c9", "from": "a", "fromType": "output", "to": "b", "toType": "left"
        });
        let connection: Connection = serde_json::from_value(json).unwrap();
        assert_eq!(connection.from_type(), AnchorKind::Output);
        // Unknown anchor names fall back to the center anchor
        assert_eq!(connection.to_type(), AnchorKind::Center);

        let back = serde_json::to_value(&connection).unwrap();
        assert_eq!(back["fromType"], "output");
    }
}
