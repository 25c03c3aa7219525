//! Error types for shape lookup

use thiserror::Error;

use crate::shape::ShapeKind;

/// Errors that can occur when requesting a shape from a cache
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The identifier does not name any known primitive
    #[error("unknown shape kind '{name}' (valid kinds: {})", valid.join(", "))]
    UnknownKind { name: String, valid: Vec<String> },
}

impl ShapeError {
    /// Create an unknown kind error listing every valid identifier
    pub fn unknown_kind(name: impl Into<String>) -> Self {
        Self::UnknownKind {
            name: name.into(),
            valid: ShapeKind::ALL.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// The identifier that failed to resolve
    pub fn name(&self) -> &str {
        match self {
            Self::UnknownKind { name, .. } => name,
        }
    }
}
