//! Error types for schema graph construction and validation.

use thiserror::Error;

/// Error type for schema graph operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A type id does not refer to an entity of this graph.
    #[error("unknown type #{id} referenced by {context}")]
    UnknownType {
        /// Raw type id.
        id: usize,
        /// Where the id was referenced.
        context: String,
    },

    /// Entity has the wrong kind for the position it is used in.
    #[error("{context}: expected {expected}, found {found}")]
    WrongKind {
        /// Where the entity was used.
        context: String,
        /// Expected entity kind.
        expected: &'static str,
        /// Actual entity kind.
        found: &'static str,
    },

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (model, property, ...).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Empty or otherwise unusable name.
    #[error("invalid {kind} name: '{name}'")]
    InvalidName {
        /// Kind of the named entity.
        kind: String,
        /// Offending name.
        name: String,
    },

    /// Circular inheritance or scalar derivation.
    #[error("circular type reference detected: {path}")]
    CircularReference {
        /// Path of the circular reference.
        path: String,
    },
}

impl SchemaError {
    /// Creates an unknown type error.
    pub fn unknown_type(id: usize, context: impl Into<String>) -> Self {
        Self::UnknownType {
            id,
            context: context.into(),
        }
    }

    /// Creates a wrong kind error.
    pub fn wrong_kind(
        context: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::WrongKind {
            context: context.into(),
            expected,
            found,
        }
    }

    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates an invalid name error.
    pub fn invalid_name(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::InvalidName {
            kind: kind.into(),
            name: name.into(),
        }
    }
}
