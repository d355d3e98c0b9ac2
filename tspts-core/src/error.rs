//! Error types for deferred node construction.

use thiserror::Error;

/// Fatal emission error.
///
/// Every variant aborts the current emission. None of them is recovered
/// locally and none of them leaves a partially written output file behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    /// A value was still pending when it had to be read.
    #[error("unresolved value: {what}")]
    Unresolved {
        /// What was being extracted.
        what: String,
    },

    /// The schema uses an entity this emitter has no mapping rule for.
    #[error("unsupported {kind}: '{name}'")]
    Unsupported {
        /// Entity kind (scalar, intrinsic, ...).
        kind: &'static str,
        /// Entity name.
        name: String,
    },

    /// A construction step received a value of the wrong kind.
    #[error("expected {expected}, but received {found}")]
    TypeMismatch {
        /// Expected kind.
        expected: &'static str,
        /// Kind actually received.
        found: &'static str,
    },

    /// A placeholder was resolved a second time.
    #[error("placeholder resolved more than once")]
    DoubleResolution,
}

impl EmitError {
    /// Creates an unresolved-value error.
    pub fn unresolved(what: impl Into<String>) -> Self {
        Self::Unresolved { what: what.into() }
    }

    /// Creates an unsupported-entity error.
    pub fn unsupported(kind: &'static str, name: impl Into<String>) -> Self {
        Self::Unsupported {
            kind,
            name: name.into(),
        }
    }

    /// Creates a type-mismatch error.
    #[must_use]
    pub const fn mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch { expected, found }
    }
}

/// Result type alias for emission operations.
pub type Result<T> = std::result::Result<T, EmitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EmitError::unsupported("scalar", "int128").to_string(),
            "unsupported scalar: 'int128'"
        );
        assert_eq!(
            EmitError::mismatch("type node", "property signature").to_string(),
            "expected type node, but received property signature"
        );
        assert_eq!(
            EmitError::unresolved("declaration 'Person'").to_string(),
            "unresolved value: declaration 'Person'"
        );
        assert_eq!(
            EmitError::DoubleResolution.to_string(),
            "placeholder resolved more than once"
        );
    }
}
