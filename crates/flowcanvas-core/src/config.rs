//! Editor configuration.
//!
//! Every field has a default matching the stock editor, so an empty TOML
//! document is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};
use crate::geometry::{NodeFootprint, Offset};

/// Tunables for the canvas engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Radius of an anchor dot, used for anchor hit-testing
    pub anchor_radius: f64,
    /// Minimum finger travel before a touch on a node counts as a drag
    pub touch_drag_threshold: f64,
    /// Viewports at or below this width use the touch input path
    pub mobile_breakpoint: f64,
    /// Size of every component card
    pub footprint: NodeFootprint,
    /// Subtracted from the drop point so the card lands centered under the pointer
    pub drop_offset: Offset,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            anchor_radius: 8.0,
            touch_drag_threshold: 4.0,
            mobile_breakpoint: 768.0,
            footprint: NodeFootprint::default(),
            drop_offset: Offset::new(75.0, 80.0),
        }
    }
}

impl EditorConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    /// Returns [`EditorError::ConfigParse`] for malformed TOML and
    /// [`EditorError::InvalidConfig`] when a value is out of range.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| EditorError::ConfigParse {
            reason: e.to_string(),
        })?;
        config.validate()
    }

    /// Checks that every dimension is finite and sizes are positive.
    ///
    /// # Errors
    /// Returns [`EditorError::InvalidConfig`] naming the first bad value.
    pub fn validate(self) -> Result<Self> {
        let positive = [
            ("footprint.width", self.footprint.width),
            ("footprint.height", self.footprint.height),
            ("anchor_radius", self.anchor_radius),
            ("mobile_breakpoint", self.mobile_breakpoint),
        ];
        if let Some((name, value)) = positive
            .iter()
            .find(|(_, value)| !value.is_finite() || *value <= 0.0)
        {
            return Err(EditorError::invalid_config(format!(
                "{name} must be positive and finite, got {value}"
            )));
        }

        let finite = [
            ("touch_drag_threshold", self.touch_drag_threshold),
            ("drop_offset.x", self.drop_offset.dx),
            ("drop_offset.y", self.drop_offset.dy),
        ];
        if let Some((name, value)) = finite
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(EditorError::invalid_config(format!(
                "{name} must be non-negative and finite, got {value}"
            )));
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = EditorConfig::from_toml_str("").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.footprint.width, 180.0);
        assert_eq!(config.footprint.height, 100.0);
    }

    #[test]
    fn test_partial_override() {
        let config = EditorConfig::from_toml_str(
            "anchor_radius = 12.0\n[drop_offset]\ndx = 90.0\ndy = 50.0\n",
        )
        .unwrap();
        assert_eq!(config.anchor_radius, 12.0);
        assert_eq!(config.drop_offset, Offset::new(90.0, 50.0));
        assert_eq!(config.footprint, NodeFootprint::default());
    }

    #[test]
    fn test_rejects_non_positive_footprint() {
        let result = EditorConfig::from_toml_str("[footprint]\nwidth = 0.0\n");
        assert!(matches!(result, Err(EditorError::InvalidConfig { .. })));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let result = EditorConfig::from_toml_str("zoom = 2.0\n");
        assert!(matches!(result, Err(EditorError::ConfigParse { .. })));
    }
}
