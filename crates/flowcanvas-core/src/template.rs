//! Palette templates: the stock title, color, icon and config per kind

use crate::models::{ComponentConfig, ComponentKind, NodeId, Position, WorkflowComponent};

/// Blueprint a palette entry instantiates on drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentTemplate {
    pub kind: ComponentKind,
    pub title: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

impl ComponentTemplate {
    /// Stock template for `kind`
    #[must_use]
    pub const fn for_kind(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Input => Self {
                kind,
                title: "Input Node",
                color: "#10b981",
                icon: "📥",
            },
            ComponentKind::Output => Self {
                kind,
                title: "Output Node",
                color: "#3b82f6",
                icon: "📤",
            },
            ComponentKind::Action => Self {
                kind,
                title: "Action Node",
                color: "#f59e0b",
                icon: "⚡",
            },
        }
    }

    /// Fresh component with the template's defaults
    #[must_use]
    pub fn instantiate(&self, id: NodeId, position: Position) -> WorkflowComponent {
        WorkflowComponent::new(
            id,
            self.title,
            self.color,
            self.icon,
            position,
            ComponentConfig::default_for(self.kind),
        )
    }
}

/// Palette entries in display order
#[must_use]
pub fn palette() -> [ComponentTemplate; 3] {
    ComponentKind::ALL.map(ComponentTemplate::for_kind)
}
