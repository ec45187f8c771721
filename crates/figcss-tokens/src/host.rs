//! Host document model.
//!
//! Mirrors the objects a design tool hands to plugins: variable collections
//! with their modes, variables with per-mode values, and text styles.
//! Field names follow the host's camelCase JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named group of variables with one or more modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableCollection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub modes: Vec<Mode>,
}

impl VariableCollection {
    /// Id of the first mode with the given name.
    pub fn mode_id(&self, name: &str) -> Option<&str> {
        self.modes
            .iter()
            .find(|mode| mode.name == name)
            .map(|mode| mode.mode_id.as_str())
    }
}

/// A named value-set within a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    pub mode_id: String,
    pub name: String,
}

/// The resolved type of a variable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableType {
    Boolean,
    #[default]
    Float,
    String,
    Color,
}

/// A single variable and its value for every mode of its collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub variable_collection_id: String,
    #[serde(default)]
    pub resolved_type: VariableType,
    #[serde(default)]
    pub values_by_mode: BTreeMap<String, VariableValue>,
}

impl Variable {
    /// Numeric value for a mode, if the mode holds a finite number.
    pub fn number_for(&self, mode_id: &str) -> Option<f64> {
        match self.values_by_mode.get(mode_id)? {
            VariableValue::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }
}

/// A per-mode variable value. Anything that is not a plain number
/// (aliases, colors, strings) is kept opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Number(f64),
    Other(serde_json::Value),
}

/// A reusable typographic definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub name: String,
    pub font_name: FontName,
    pub font_size: f64,
    #[serde(default)]
    pub line_height: Metric,
    #[serde(default)]
    pub letter_spacing: Metric,
}

/// Font family plus the free-text style label (e.g. `"Semi Bold Italic"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

/// A line-height or letter-spacing value with its unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub unit: MetricUnit,
    #[serde(default)]
    pub value: f64,
}

impl Metric {
    pub fn pixels(value: f64) -> Self {
        Self {
            unit: MetricUnit::Pixels,
            value,
        }
    }

    pub fn percent(value: f64) -> Self {
        Self {
            unit: MetricUnit::Percent,
            value,
        }
    }
}

/// Unit of a [`Metric`]. Unknown units decode as `Auto`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricUnit {
    Pixels,
    Percent,
    #[default]
    #[serde(other)]
    Auto,
}
