//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Emission error.
    #[error("emit error: {0}")]
    Emit(#[from] tspts_core::EmitError),

    /// Schema graph error.
    #[error("schema error: {0}")]
    Schema(#[from] tspts_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output could not be written.
    #[error("cannot write '{}': {message}", path.display())]
    Output {
        /// Output path.
        path: PathBuf,
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates an output error for the given path.
    pub fn output(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Output {
            path: path.into(),
            message: message.into(),
        }
    }
}
