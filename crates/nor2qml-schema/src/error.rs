//! Error types for schema loading and validation.

use std::path::PathBuf;

use thiserror::Error;

use nor2qml_map::MapError;

use crate::violation::SchemaViolation;

#[derive(Debug, Error)]
pub enum SchemaError {
    // === Schema File Errors ===
    #[error("failed to read schema {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The schema or the document under test is not well-formed XML.
    #[error("failed to parse {what}: {message}")]
    Parse { what: String, message: String },

    /// A schema construct this validator does not implement.
    #[error("unsupported schema construct: {construct}")]
    Unsupported { construct: String },

    /// A type, element, group or attribute group reference has no declaration.
    #[error("unresolved {kind} reference '{name}'")]
    UnknownReference { kind: &'static str, name: String },

    // === Validation Errors ===
    /// The document does not conform; at least one violation.
    #[error("document is not schema-valid: {} violation(s), first: {}", .violations.len(), first_message(.violations))]
    Invalid { violations: Vec<SchemaViolation> },

    #[error(transparent)]
    Serialize(#[from] MapError),
}

impl SchemaError {
    pub fn violations(&self) -> &[SchemaViolation] {
        match self {
            SchemaError::Invalid { violations } => violations,
            _ => &[],
        }
    }
}

fn first_message(violations: &[SchemaViolation]) -> String {
    violations
        .first()
        .map_or_else(|| "none".to_string(), ToString::to_string)
}

pub type Result<T> = std::result::Result<T, SchemaError>;
