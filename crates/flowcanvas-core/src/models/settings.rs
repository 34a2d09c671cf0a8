//! Per-kind component configuration.
//!
//! Configuration is a sum type keyed by [`ComponentKind`]; every match over
//! it is exhaustive, so adding a kind forces every consumer (inspector,
//! wire format, templates) to handle it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use super::component::ComponentKind;
use crate::error::EditorError;

macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => ($wire:literal, $label:literal)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl $name {
            /// `(wire value, display label)` pairs in presentation order
            pub const OPTIONS: &'static [(&'static str, &'static str)] = &[$(($wire, $label)),+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl FromStr for $name {
            type Err = EditorError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(EditorError::InvalidFieldValue {
                        field: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

choice_enum!(
    /// Kind of value an Input component collects
    InputType { Text => ("text", "Text"), Number => ("number", "Number"), File => ("file", "File") }
);

choice_enum!(
    /// Serialization format of an Output component
    OutputFormat { Json => ("json", "JSON"), Csv => ("csv", "CSV"), Text => ("text", "Text") }
);

choice_enum!(
    /// Operation performed by an Action component
    ActionType {
        Transform => ("transform", "Transform"),
        Filter => ("filter", "Filter"),
        Aggregate => ("aggregate", "Aggregate"),
    }
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct InputConfig {
    pub input_type: InputType,
    pub placeholder: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            input_type: InputType::Text,
            placeholder: "Enter value".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct OutputConfig {
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ActionConfig {
    pub action_type: ActionType,
    /// Milliseconds
    pub delay: u64,
}

/// Configuration of a component, one variant per [`ComponentKind`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentConfig {
    Input(InputConfig),
    Output(OutputConfig),
    Action(ActionConfig),
}

impl ComponentConfig {
    /// Default configuration for a component kind
    #[must_use]
    pub fn default_for(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Input => Self::Input(InputConfig::default()),
            ComponentKind::Output => Self::Output(OutputConfig::default()),
            ComponentKind::Action => Self::Action(ActionConfig::default()),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Input(_) => ComponentKind::Input,
            Self::Output(_) => ComponentKind::Output,
            Self::Action(_) => ComponentKind::Action,
        }
    }

    /// Parses the untagged wire object for the given kind.
    ///
    /// # Errors
    /// Returns [`EditorError::ConfigShapeMismatch`] when the object does not
    /// have the shape of `kind`'s configuration.
    pub fn from_value(kind: ComponentKind, value: serde_json::Value) -> Result<Self, EditorError> {
        let mismatch = |e: serde_json::Error| EditorError::ConfigShapeMismatch {
            kind,
            reason: e.to_string(),
        };
        match kind {
            ComponentKind::Input => serde_json::from_value(value).map(Self::Input).map_err(mismatch),
            ComponentKind::Output => serde_json::from_value(value).map(Self::Output).map_err(mismatch),
            ComponentKind::Action => serde_json::from_value(value).map(Self::Action).map_err(mismatch),
        }
    }

    /// Untagged wire object
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        let value = match self {
            Self::Input(config) => serde_json::to_value(config),
            Self::Output(config) => serde_json::to_value(config),
            Self::Action(config) => serde_json::to_value(config),
        };
        // Plain structs of strings, enums and integers always serialize
        value.unwrap_or(serde_json::Value::Null)
    }

    /// Merges the fields present in `patch`; returns `false` on kind mismatch.
    pub fn merge(&mut self, patch: &ConfigPatch) -> bool {
        match (self, patch) {
            (Self::Input(config), ConfigPatch::Input(p)) => {
                if let Some(input_type) = p.input_type {
                    config.input_type = input_type;
                }
                if let Some(placeholder) = &p.placeholder {
                    config.placeholder.clone_from(placeholder);
                }
                true
            }
            (Self::Output(config), ConfigPatch::Output(p)) => {
                if let Some(output_format) = p.output_format {
                    config.output_format = output_format;
                }
                true
            }
            (Self::Action(config), ConfigPatch::Action(p)) => {
                if let Some(action_type) = p.action_type {
                    config.action_type = action_type;
                }
                if let Some(delay) = p.delay {
                    config.delay = delay;
                }
                true
            }
            _ => false,
        }
    }

    /// Current value of `field` rendered as the inspector shows it
    #[must_use]
    pub fn field_value(&self, field: ConfigField) -> Option<String> {
        match (self, field) {
            (Self::Input(c), ConfigField::InputType) => Some(c.input_type.to_string()),
            (Self::Input(c), ConfigField::Placeholder) => Some(c.placeholder.clone()),
            (Self::Output(c), ConfigField::OutputFormat) => Some(c.output_format.to_string()),
            (Self::Action(c), ConfigField::ActionType) => Some(c.action_type.to_string()),
            (Self::Action(c), ConfigField::Delay) => Some(c.delay.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputPatch {
    pub input_type: Option<InputType>,
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputPatch {
    pub output_format: Option<OutputFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionPatch {
    pub action_type: Option<ActionType>,
    pub delay: Option<u64>,
}

/// Partial configuration update; absent fields are left as they are
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigPatch {
    Input(InputPatch),
    Output(OutputPatch),
    Action(ActionPatch),
}

impl ConfigPatch {
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Input(_) => ComponentKind::Input,
            Self::Output(_) => ComponentKind::Output,
            Self::Action(_) => ComponentKind::Action,
        }
    }
}

/// How the inspector renders a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidget {
    Select(&'static [(&'static str, &'static str)]),
    Text,
    Number,
}

/// Editable configuration fields across all kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    InputType,
    Placeholder,
    OutputFormat,
    ActionType,
    Delay,
}

impl ConfigField {
    /// Fields editable for a kind, in display order
    #[must_use]
    pub const fn for_kind(kind: ComponentKind) -> &'static [Self] {
        match kind {
            ComponentKind::Input => &[Self::InputType, Self::Placeholder],
            ComponentKind::Output => &[Self::OutputFormat],
            ComponentKind::Action => &[Self::ActionType, Self::Delay],
        }
    }

    #[must_use]
    pub const fn kind(self) -> ComponentKind {
        match self {
            Self::InputType | Self::Placeholder => ComponentKind::Input,
            Self::OutputFormat => ComponentKind::Output,
            Self::ActionType | Self::Delay => ComponentKind::Action,
        }
    }

    /// Wire key of the field inside the config object
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::InputType => "inputType",
            Self::Placeholder => "placeholder",
            Self::OutputFormat => "outputFormat",
            Self::ActionType => "actionType",
            Self::Delay => "delay",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InputType => "Input Type",
            Self::Placeholder => "Placeholder",
            Self::OutputFormat => "Output Format",
            Self::ActionType => "Action Type",
            Self::Delay => "Delay (ms)",
        }
    }

    #[must_use]
    pub const fn widget(self) -> FieldWidget {
        match self {
            Self::InputType => FieldWidget::Select(InputType::OPTIONS),
            Self::Placeholder => FieldWidget::Text,
            Self::OutputFormat => FieldWidget::Select(OutputFormat::OPTIONS),
            Self::ActionType => FieldWidget::Select(ActionType::OPTIONS),
            Self::Delay => FieldWidget::Number,
        }
    }

    /// Turns raw widget input into a single-field patch.
    ///
    /// # Errors
    /// Returns [`EditorError::InvalidFieldValue`] when a select field receives
    /// a value outside its options.
    pub fn parse(self, raw: &str) -> Result<ConfigPatch, EditorError> {
        Ok(match self {
            Self::InputType => ConfigPatch::Input(InputPatch {
                input_type: Some(raw.parse()?),
                ..InputPatch::default()
            }),
            Self::Placeholder => ConfigPatch::Input(InputPatch {
                placeholder: Some(raw.to_string()),
                ..InputPatch::default()
            }),
            Self::OutputFormat => ConfigPatch::Output(OutputPatch {
                output_format: Some(raw.parse()?),
            }),
            Self::ActionType => ConfigPatch::Action(ActionPatch {
                action_type: Some(raw.parse()?),
                ..ActionPatch::default()
            }),
            Self::Delay => ConfigPatch::Action(ActionPatch {
                delay: Some(parse_delay(raw)),
                ..ActionPatch::default()
            }),
        })
    }
}

/// Lenient millisecond parsing: leading digits win, anything else is zero.
/// Digit runs too large for `u64` saturate.
///
/// `"250"` → 250, `" 12ms"` → 12, `"-5"` → 0, `"abc"` → 0.
#[must_use]
pub fn parse_delay(raw: &str) -> u64 {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    match digits.parse::<u64>() {
        Ok(delay) => delay,
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => 0,
    }
}
