//! Component inspector: a scoped edit buffer for one component.
//!
//! Opening copies the component's title and configuration into a scratch
//! buffer. Edits only touch the scratch; commit writes title and
//! configuration to the graph in one update, discard throws the buffer away.

use tracing::debug;

use crate::error::{EditorError, Result};
use crate::graph::GraphStore;
use crate::models::{ComponentConfig, ComponentKind, ConfigField, FieldWidget, NodeId, WorkflowComponent};

/// Scratch copy of the component under edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scratch {
    pub node: NodeId,
    pub title: String,
    pub config: ComponentConfig,
    /// Raw widget text per edited field, kept so the form shows what was
    /// typed rather than its parsed value
    drafts: Vec<(ConfigField, String)>,
}

impl Scratch {
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        self.config.kind()
    }

    /// Text to show in `field`'s widget: the last raw input, or the
    /// configured value if the field has not been edited
    #[must_use]
    pub fn field_text(&self, field: ConfigField) -> Option<String> {
        self.drafts
            .iter()
            .find(|(edited, _)| *edited == field)
            .map(|(_, raw)| raw.clone())
            .or_else(|| self.config.field_value(field))
    }

    fn set_draft(&mut self, field: ConfigField, raw: &str) {
        self.drafts.retain(|(edited, _)| *edited != field);
        self.drafts.push((field, raw.to_string()));
    }
}

/// One row of the inspector form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: ConfigField,
    pub label: &'static str,
    pub widget: FieldWidget,
    pub value: String,
}

/// Inspector session; closed by default
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InspectorSession {
    scratch: Option<Scratch>,
}

impl InspectorSession {
    #[must_use]
    pub const fn new() -> Self {
        Self { scratch: None }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.scratch.is_some()
    }

    #[must_use]
    pub const fn scratch(&self) -> Option<&Scratch> {
        self.scratch.as_ref()
    }

    /// Starts editing `component`, replacing any open session
    pub fn open(&mut self, component: &WorkflowComponent) {
        debug!(component = %component.id(), "Inspector opened");
        self.scratch = Some(Scratch {
            node: component.id().clone(),
            title: component.title().to_string(),
            config: component.config().clone(),
            drafts: Vec::new(),
        });
    }

    /// # Errors
    /// Returns [`EditorError::InspectorClosed`] if nothing is open.
    pub fn edit_title(&mut self, title: impl Into<String>) -> Result<()> {
        let scratch = self.scratch.as_mut().ok_or(EditorError::InspectorClosed)?;
        scratch.title = title.into();
        Ok(())
    }

    /// Applies raw widget input to one configuration field of the scratch.
    ///
    /// # Errors
    /// - [`EditorError::InspectorClosed`] if nothing is open
    /// - [`EditorError::FieldNotApplicable`] if `field` belongs to another kind
    /// - [`EditorError::InvalidFieldValue`] if a select receives an unknown option
    pub fn edit_config_field(&mut self, field: ConfigField, raw: &str) -> Result<()> {
        let scratch = self.scratch.as_mut().ok_or(EditorError::InspectorClosed)?;
        let kind = scratch.kind();
        if field.kind() != kind {
            return Err(EditorError::FieldNotApplicable {
                field: field.key(),
                kind,
            });
        }
        let patch = field.parse(raw)?;
        scratch.config.merge(&patch);
        scratch.set_draft(field, raw);
        Ok(())
    }

    /// Form rows for the open component, in display order
    #[must_use]
    pub fn fields(&self) -> Vec<FieldView> {
        let Some(scratch) = &self.scratch else {
            return Vec::new();
        };
        ConfigField::for_kind(scratch.kind())
            .iter()
            .map(|&field| FieldView {
                field,
                label: field.label(),
                widget: field.widget(),
                value: scratch.field_text(field).unwrap_or_default(),
            })
            .collect()
    }

    /// Writes the scratch to `graph` and closes.
    ///
    /// Returns `false` if the component was removed while the inspector was
    /// open; the session closes either way.
    ///
    /// # Errors
    /// Returns [`EditorError::InspectorClosed`] if nothing is open.
    pub fn commit(&mut self, graph: &mut GraphStore) -> Result<bool> {
        let scratch = self.scratch.take().ok_or(EditorError::InspectorClosed)?;
        let written = graph.update_node_details(&scratch.node, scratch.title, scratch.config);
        debug!(component = %scratch.node, written, "Inspector committed");
        Ok(written)
    }

    /// Closes without writing
    pub fn discard(&mut self) {
        if let Some(scratch) = self.scratch.take() {
            debug!(component = %scratch.node, "Inspector discarded");
        }
    }

    /// Closes the session if it is editing `node`
    pub fn close_if_editing(&mut self, node: &NodeId) {
        if self.scratch.as_ref().is_some_and(|s| &s.node == node) {
            self.discard();
        }
    }
}
