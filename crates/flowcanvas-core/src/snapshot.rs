//! Workflow snapshot: the wire and export format of a graph.
//!
//! ```json
//! { "name": "...", "components": [ ... ], "connections": [ ... ] }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::error::{EditorError, Result};
use crate::models::{Connection, ConnectionId, NodeId, WorkflowComponent};

/// File name of the local export artifact
pub const EXPORT_FILE_NAME: &str = "workflowData.json";

/// Serializable workflow graph
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSnapshot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub components: Vec<WorkflowComponent>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

/// Structural problem found in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotIssue {
    #[error("component id '{0}' appears more than once")]
    DuplicateComponent(NodeId),

    #[error("connection id '{0}' appears more than once")]
    DuplicateConnection(ConnectionId),

    #[error("connection '{0}' starts and ends on the same component")]
    SelfLoop(ConnectionId),

    #[error("connection '{connection}' references missing component '{missing}'")]
    DanglingConnection {
        connection: ConnectionId,
        missing: NodeId,
    },
}

impl GraphSnapshot {
    /// Parses a snapshot from JSON.
    ///
    /// # Errors
    /// Returns [`EditorError::SnapshotParse`] on malformed JSON or a
    /// component whose `type` and `config` disagree.
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| EditorError::snapshot_parse(e.to_string()))
    }

    /// Pretty-printed JSON, as written to the export artifact.
    ///
    /// # Errors
    /// Returns [`EditorError::SnapshotSerialize`] if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| EditorError::SnapshotSerialize {
            reason: e.to_string(),
        })
    }

    /// Lists every invariant violation, in document order
    #[must_use]
    pub fn validate(&self) -> Vec<SnapshotIssue> {
        let mut issues = Vec::new();

        let mut nodes = HashSet::new();
        for component in &self.components {
            if !nodes.insert(component.id()) {
                issues.push(SnapshotIssue::DuplicateComponent(component.id().clone()));
            }
        }

        let mut edges = HashSet::new();
        for connection in &self.connections {
            let id = connection.id();
            if !edges.insert(id) {
                issues.push(SnapshotIssue::DuplicateConnection(id.clone()));
            }
            if connection.is_self_loop() {
                issues.push(SnapshotIssue::SelfLoop(id.clone()));
            }
            for end in [connection.from(), connection.to()] {
                if !nodes.contains(end) {
                    issues.push(SnapshotIssue::DanglingConnection {
                        connection: id.clone(),
                        missing: end.clone(),
                    });
                }
            }
        }

        issues
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::models::{AnchorKind, ComponentKind};

    const SAMPLE: &str = r##"{
        "name": "Demo",
        "components": [
            { "id": "a", "title": "Input Node", "type": "input", "color": "#10b981", "icon": "📥",
              "position": { "x": 10, "y": 20 },
              "config": { "inputType": "number", "placeholder": "Age" } },
            { "id": "b", "title": "Action Node", "type": "action", "color": "#f59e0b", "icon": "⚡",
              "position": { "x": 300, "y": 20 },
              "config": { "actionType": "filter", "delay": 5 } }
        ],
        "connections": [
            { "id": "c1", "from": "a", "fromType": "output", "to": "b", "toType": "input" }
        ]
    }"##;

    #[test]
    fn test_parse_sample() {
        let snapshot = GraphSnapshot::from_json(SAMPLE).unwrap();
        assert_eq!(snapshot.name, "Demo");
        assert_eq!(snapshot.components.len(), 2);
        assert_eq!(snapshot.components[1].kind(), ComponentKind::Action);
        assert_eq!(snapshot.connections[0].to_type(), AnchorKind::Input);
        assert!(snapshot.is_valid());
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let snapshot = GraphSnapshot::from_json(r#"{ "name": "Empty" }"#).unwrap();
        assert!(snapshot.components.is_empty());
        assert!(snapshot.connections.is_empty());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = GraphSnapshot::from_json("{ nope").unwrap_err();
        assert!(matches!(err, EditorError::SnapshotParse { .. }));
    }

    #[test]
    fn test_validate_reports_issues() {
        let json = serde_json::json!({
            "name": "Bad",
            "components": [
                { "id": "a", "title": "A", "type": "output", "color": "", "icon": "",
                  "position": { "x": 0, "y": 0 }, "config": {} },
                { "id": "a", "title": "A2", "type": "output", "color": "", "icon": "",
                  "position": { "x": 0, "y": 0 }, "config": {} }
            ],
            "connections": [
                { "id": "c1", "from": "a", "fromType": "output", "to": "a", "toType": "input" },
                { "id": "c2", "from": "a", "fromType": "output", "to": "z", "toType": "input" }
            ]
        });
        let snapshot: GraphSnapshot = serde_json::from_value(json).unwrap();
        let issues = snapshot.validate();
        assert_eq!(
            issues,
            vec![
                SnapshotIssue::DuplicateComponent(NodeId::new("a").unwrap()),
                SnapshotIssue::SelfLoop(ConnectionId::new("c1").unwrap()),
                SnapshotIssue::DanglingConnection {
                    connection: ConnectionId::new("c2").unwrap(),
                    missing: NodeId::new("z").unwrap(),
                },
            ]
        );
    }

    #[test]
    fn test_pretty_json_keeps_wire_keys() {
        let snapshot = GraphSnapshot::from_json(SAMPLE).unwrap();
        let text = snapshot.to_pretty_json().unwrap();
        assert!(text.contains("\"fromType\": \"output\""));
        assert!(text.contains("\"type\": \"input\""));
        assert_eq!(GraphSnapshot::from_json(&text).unwrap(), snapshot);
    }
}
