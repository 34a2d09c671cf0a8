//! Error types for the canvas engine.
//!
//! Local editing operations on unknown ids are not errors (they are silent
//! no-ops reported through return values); the variants here cover input
//! that cannot be represented at all.

use thiserror::Error;

use crate::models::ComponentKind;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// Errors raised by the engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("{what} identifier cannot be empty")]
    EmptyIdentifier { what: &'static str },

    #[error("connection cannot start and end on component '{node}'")]
    SelfLoop { node: String },

    #[error("config does not match {kind} component: {reason}")]
    ConfigShapeMismatch { kind: ComponentKind, reason: String },

    #[error("invalid value '{value}' for {field}")]
    InvalidFieldValue { field: &'static str, value: String },

    #[error("field '{field}' does not apply to {kind} components")]
    FieldNotApplicable {
        field: &'static str,
        kind: ComponentKind,
    },

    #[error("no component is open in the inspector")]
    InspectorClosed,

    #[error("snapshot parse error: {reason}")]
    SnapshotParse { reason: String },

    #[error("snapshot serialization error: {reason}")]
    SnapshotSerialize { reason: String },

    #[error("editor config parse error: {reason}")]
    ConfigParse { reason: String },

    #[error("invalid editor config: {reason}")]
    InvalidConfig { reason: String },
}

impl EditorError {
    /// Create a snapshot parse error.
    pub fn snapshot_parse(reason: impl Into<String>) -> Self {
        Self::SnapshotParse {
            reason: reason.into(),
        }
    }

    /// Create an invalid config error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EditorError::FieldNotApplicable {
            field: "delay",
            kind: ComponentKind::Input,
        };
        assert_eq!(err.to_string(), "field 'delay' does not apply to input components");

        let err = EditorError::SelfLoop {
            node: "n1".to_string(),
        };
        assert!(err.to_string().contains("n1"));
    }

    #[test]
    fn test_error_clone() {
        let err = EditorError::snapshot_parse("eof");
        assert_eq!(err.clone(), err);
    }
}
