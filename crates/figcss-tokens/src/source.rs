//! Token sources.
//!
//! [`TokenSource`] is the seam between the generator and the design tool.
//! [`Snapshot`] is the in-memory implementation, loaded from a JSON export
//! or handed over by a plugin host.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::host::{TextStyle, Variable, VariableCollection, VariableType};

/// The three host queries the generator depends on.
pub trait TokenSource {
    /// All local variable collections.
    fn variable_collections(&self) -> &[VariableCollection];

    /// All local variables whose resolved type is numeric.
    fn float_variables(&self) -> Vec<&Variable>;

    /// All local text styles.
    fn text_styles(&self) -> &[TextStyle];
}

/// Error loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A captured copy of a document's variables and text styles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub variable_collections: Vec<VariableCollection>,
    #[serde(default)]
    pub variables: Vec<Variable>,
    #[serde(default)]
    pub text_styles: Vec<TextStyle>,
}

impl Snapshot {
    /// Parse a snapshot from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let json = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let snapshot = Self::from_json(&json)?;
        tracing::debug!(
            collections = snapshot.variable_collections.len(),
            variables = snapshot.variables.len(),
            text_styles = snapshot.text_styles.len(),
            "loaded snapshot from {}",
            path.display()
        );
        Ok(snapshot)
    }
}

impl TokenSource for Snapshot {
    fn variable_collections(&self) -> &[VariableCollection] {
        &self.variable_collections
    }

    fn float_variables(&self) -> Vec<&Variable> {
        self.variables
            .iter()
            .filter(|var| var.resolved_type == VariableType::Float)
            .collect()
    }

    fn text_styles(&self) -> &[TextStyle] {
        &self.text_styles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_object_is_empty_snapshot() {
        let snapshot = Snapshot::from_json("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn test_float_variables_skip_other_types() {
        let snapshot = Snapshot::from_json(
            r#"{
                "variables": [
                    { "name": "space-sm", "variableCollectionId": "c", "resolvedType": "FLOAT" },
                    { "name": "brand", "variableCollectionId": "c", "resolvedType": "COLOR" },
                    { "name": "space-md", "variableCollectionId": "c" }
                ]
            }"#,
        )
        .unwrap();
        let names: Vec<&str> = snapshot
            .float_variables()
            .iter()
            .map(|var| var.name.as_str())
            .collect();
        assert_eq!(names, vec!["space-sm", "space-md"]);
    }

    #[test]
    fn test_invalid_json() {
        let err = Snapshot::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SnapshotError::Json(_)));
        assert!(err.to_string().starts_with("invalid snapshot JSON"));
    }

    #[test]
    fn test_missing_file() {
        let err = Snapshot::load(Path::new("/nonexistent/figcss/snapshot.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/figcss/snapshot.json"));
    }
}
