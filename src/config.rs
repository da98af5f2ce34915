// ============================================================================
// Tuple Configuration
// Index policy and text formatting options
// ============================================================================

use crate::numeric::{TupleError, TupleResult};
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Index Policy
// ============================================================================

/// How indexed access treats an index past the last component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndexPolicy {
    /// Fail with `TupleError::OutOfRange`
    #[default]
    Strict,

    /// Alias component 0 for any index >= N
    /// - Compatibility mode for callers written against the old vector family
    /// - Every clamped access emits a `tracing` warning
    LegacyClamp,
}

// ============================================================================
// Field Naming
// ============================================================================

const XYZ: [&str; 3] = ["x", "y", "z"];
const LETTERS: [&str; 10] = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];

/// Labels printed in front of each component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldNaming {
    /// `x, y, z` for arity <= 3, `a..j` otherwise; indices past `j` use the number
    #[default]
    Legacy,

    /// The component index (`0`, `1`, ...)
    Indexed,

    /// No labels, values only
    Bare,
}

impl FieldNaming {
    /// Label for component `index` of a tuple with `arity` components.
    ///
    /// Returns `None` for [`FieldNaming::Bare`].
    pub fn label(self, arity: usize, index: usize) -> Option<Cow<'static, str>> {
        match self {
            FieldNaming::Legacy if arity <= XYZ.len() => XYZ.get(index).map(|s| Cow::Borrowed(*s)),
            FieldNaming::Legacy => Some(
                LETTERS
                    .get(index)
                    .map(|s| Cow::Borrowed(*s))
                    .unwrap_or_else(|| Cow::Owned(index.to_string())),
            ),
            FieldNaming::Indexed => Some(Cow::Owned(index.to_string())),
            FieldNaming::Bare => None,
        }
    }
}

// ============================================================================
// Format Configuration
// ============================================================================

/// Options for rendering a tuple as text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatConfig {
    /// How components are labelled
    pub naming: FieldNaming,

    /// Text between components (legacy: `" | "`)
    pub separator: String,

    /// Text between a label and its value (legacy: `": "`)
    pub label_separator: String,
}

impl FormatConfig {
    /// Create a new configuration with explicit parameters
    pub fn new(naming: FieldNaming, separator: String, label_separator: String) -> Self {
        Self {
            naming,
            separator,
            label_separator,
        }
    }

    /// Builder method: Set field naming
    pub fn with_naming(mut self, naming: FieldNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Builder method: Set component separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Builder method: Set label separator
    pub fn with_label_separator(mut self, label_separator: impl Into<String>) -> Self {
        self.label_separator = label_separator.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> TupleResult<()> {
        if self.separator.is_empty() {
            return Err(TupleError::InvalidConfig("separator cannot be empty"));
        }

        if self.naming != FieldNaming::Bare && self.label_separator.is_empty() {
            return Err(TupleError::InvalidConfig(
                "label separator cannot be empty when components are labelled",
            ));
        }

        Ok(())
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::legacy()
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl FormatConfig {
    /// `x: 1 | y: 2 | z: 3`
    pub fn legacy() -> Self {
        Self::new(FieldNaming::Legacy, " | ".to_string(), ": ".to_string())
    }

    /// `0=1, 1=2, 2=3`
    pub fn indexed() -> Self {
        Self::new(FieldNaming::Indexed, ", ".to_string(), "=".to_string())
    }

    /// `1, 2, 3`
    pub fn compact() -> Self {
        Self::new(FieldNaming::Bare, ", ".to_string(), String::new())
    }
}
