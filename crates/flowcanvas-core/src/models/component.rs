//! Workflow component (graph node) with type-safe configuration

use serde::{Deserialize, Serialize};
use std::fmt;

use super::settings::{ComponentConfig, ConfigPatch};
use crate::error::EditorError;

/// Type-safe wrapper for component identifiers
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a new `NodeId` with validation
    ///
    /// # Errors
    /// Returns an error if the identifier is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, EditorError> {
        let id = id.into();
        if id.is_empty() {
            return Err(EditorError::EmptyIdentifier { what: "component" });
        }
        Ok(Self(id))
    }

    /// Wraps an id produced by an [`IdGenerator`](crate::ids::IdGenerator),
    /// which never yields an empty string.
    pub(crate) const fn from_generated(id: String) -> Self {
        Self(id)
    }

    /// Returns the ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Position in canvas space (pixels, origin at the canvas top-left)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a position at the origin
    #[must_use]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Component-wise difference `self - other`
    #[must_use]
    pub fn delta_from(self, other: Self) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Closed set of component types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Input,
    Output,
    Action,
}

impl ComponentKind {
    pub const ALL: [Self; 3] = [Self::Input, Self::Output, Self::Action];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
            Self::Action => "action",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node on the workflow canvas.
///
/// The component's kind is derived from its configuration variant, so the
/// two can never disagree once a component exists. Color and icon are fixed
/// at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ComponentRecord", into = "ComponentRecord")]
pub struct WorkflowComponent {
    id: NodeId,
    title: String,
    color: String,
    icon: String,
    position: Position,
    config: ComponentConfig,
}

impl WorkflowComponent {
    #[must_use]
    pub fn new(
        id: NodeId,
        title: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
        position: Position,
        config: ComponentConfig,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            color: color.into(),
            icon: icon.into(),
            position,
            config,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &NodeId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        self.config.kind()
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn config(&self) -> &ComponentConfig {
        &self.config
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Merges a partial configuration into this component.
    ///
    /// Returns `false` (and leaves the component untouched) when the patch
    /// targets a different component kind.
    pub fn apply_patch(&mut self, patch: &ConfigPatch) -> bool {
        self.config.merge(patch)
    }

    /// Replaces the configuration wholesale, keeping the kind fixed.
    ///
    /// Returns `false` when `config` is for another kind.
    pub fn replace_config(&mut self, config: ComponentConfig) -> bool {
        if config.kind() != self.kind() {
            return false;
        }
        self.config = config;
        true
    }
}

/// Wire form of a component: `type` and `config` travel side by side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ComponentRecord {
    id: NodeId,
    title: String,
    #[serde(rename = "type")]
    kind: ComponentKind,
    color: String,
    icon: String,
    position: Position,
    config: serde_json::Value,
}

impl TryFrom<ComponentRecord> for WorkflowComponent {
    type Error = EditorError;

    fn try_from(record: ComponentRecord) -> Result<Self, Self::Error> {
        if record.id.as_str().is_empty() {
            return Err(EditorError::EmptyIdentifier { what: "component" });
        }
        let config = ComponentConfig::from_value(record.kind, record.config)?;
        Ok(Self {
            id: record.id,
            title: record.title,
            color: record.color,
            icon: record.icon,
            position: record.position,
            config,
        })
    }
}

impl From<WorkflowComponent> for ComponentRecord {
    fn from(component: WorkflowComponent) -> Self {
        let kind = component.kind();
        Self {
            id: component.id,
            title: component.title,
            kind,
            color: component.color,
            icon: component.icon,
            position: component.position,
            config: component.config.to_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::models::settings::{ActionConfig, ActionType, InputConfig, InputType};

    fn input_component() -> WorkflowComponent {
        WorkflowComponent::new(
            NodeId::new("n1").unwrap(),
            "Input Node",
            "#10b981",
            "📥",
            Position::new(10.0, 20.0),
            ComponentConfig::Input(InputConfig {
                input_type: InputType::Text,
                placeholder: "Enter value".to_string(),
            }),
        )
    }

    #[test]
    fn test_node_id_rejects_empty() {
        assert!(NodeId::new("").is_err());
        assert_eq!(NodeId::new("abc").unwrap().as_str(), "abc");
    }

    #[test]
    fn test_kind_follows_config() {
        let component = input_component();
        assert_eq!(component.kind(), ComponentKind::Input);
    }

    #[test]
    fn test_replace_config_refuses_other_kind() {
        let mut component = input_component();
        let replaced = component.replace_config(ComponentConfig::Action(ActionConfig {
            action_type: ActionType::Filter,
            delay: 5,
        }));
        assert!(!replaced);
        assert_eq!(component.kind(), ComponentKind::Input);
    }

    #[test]
    fn test_wire_format_uses_type_key() {
        let json = serde_json::to_value(input_component()).unwrap();
        assert_eq!(json["type"], "input");
        assert_eq!(json["config"]["inputType"], "text");
        assert_eq!(json["config"]["placeholder"], "Enter value");
        assert_eq!(json["position"]["x"], 10.0);
    }

    #[test]
    fn test_deserialize_rejects_mismatched_config() {
        let json = serde_json::json!({
            "id": "n2",
            "title": "Broken",
            "type": "output",
            "color": "#3b82f6",
            "icon": "📤",
            "position": { "x": 0.0, "y": 0.0 },
            "config": { "inputType": "text", "placeholder": "" }
        });
        let parsed: Result<WorkflowComponent, _> = serde_json::from_value(json);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_position_translation() {
        let moved = Position::new(1.0, 2.0).translated(3.0, -4.0);
        assert_eq!(moved, Position::new(4.0, -2.0));
        assert_eq!(moved.delta_from(Position::new(1.0, 1.0)), (3.0, -3.0));
    }
}
