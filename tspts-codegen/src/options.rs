//! Emitter options.

use serde::{Deserialize, Serialize};

/// Options controlling emission and rendering.
///
/// Deserializes from kebab-case keys; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EmitterOptions {
    output_file: String,
    index_key_name: String,
    export_declarations: bool,
    indent_width: usize,
}

impl EmitterOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output_file: "models.ts".to_string(),
            index_key_name: "key".to_string(),
            export_declarations: false,
            indent_width: 4,
        }
    }

    /// Sets the program source file name.
    #[must_use]
    pub fn output_file(mut self, name: impl Into<String>) -> Self {
        self.output_file = name.into();
        self
    }

    /// Sets the key parameter name used in index signatures.
    #[must_use]
    pub fn index_key_name(mut self, name: impl Into<String>) -> Self {
        self.index_key_name = name.into();
        self
    }

    /// Sets whether type aliases are exported.
    #[must_use]
    pub fn export_declarations(mut self, export: bool) -> Self {
        self.export_declarations = export;
        self
    }

    /// Sets the indentation width of nested members.
    #[must_use]
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Returns the program source file name.
    #[must_use]
    pub fn output_file_name(&self) -> &str {
        &self.output_file
    }

    /// Returns the index signature key name.
    #[must_use]
    pub fn key_name(&self) -> &str {
        &self.index_key_name
    }

    /// Returns true if type aliases are exported.
    #[must_use]
    pub const fn exports(&self) -> bool {
        self.export_declarations
    }

    /// Returns the indentation width.
    #[must_use]
    pub const fn indent(&self) -> usize {
        self.indent_width
    }
}

impl Default for EmitterOptions {
    fn default() -> Self {
        Self::new()
    }
}
