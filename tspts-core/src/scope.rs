//! Declaration registry: ordered declarations per output source file.

use crate::entity::{Declaration, Emitted};
use crate::error::{EmitError, Result};
use std::path::{Path, PathBuf};

/// Identifier of a source file's global scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
    /// Creates a scope id from a raw index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// An output source file and the declarations discovered for it.
#[derive(Debug, Clone)]
pub struct SourceFile<T> {
    path: PathBuf,
    scope: ScopeId,
    declarations: Vec<Declaration<T>>,
}

impl<T> SourceFile<T> {
    /// Returns the output path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file's global scope.
    #[must_use]
    pub const fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Returns the declarations in discovery order.
    #[must_use]
    pub fn declarations(&self) -> &[Declaration<T>] {
        &self.declarations
    }
}

/// Append-only registry of source files and their declarations.
#[derive(Debug, Clone)]
pub struct DeclarationRegistry<T> {
    files: Vec<SourceFile<T>>,
}

impl<T: Clone + 'static> DeclarationRegistry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Opens a new, empty source file and returns its scope.
    pub fn create_source_file(&mut self, path: impl Into<PathBuf>) -> ScopeId {
        let scope = ScopeId(self.files.len());
        self.files.push(SourceFile {
            path: path.into(),
            scope,
            declarations: Vec::new(),
        });
        scope
    }

    /// Appends a declaration to `scope`.
    ///
    /// The value may still be pending.
    ///
    /// # Errors
    /// Returns `EmitError::Unresolved` if the scope does not exist.
    pub fn declare(
        &mut self,
        scope: ScopeId,
        name: impl Into<String>,
        value: Emitted<T>,
    ) -> Result<Declaration<T>> {
        let file = self
            .files
            .get_mut(scope.0)
            .ok_or_else(|| EmitError::unresolved(format!("scope #{}", scope.0)))?;

        let decl = Declaration {
            name: name.into(),
            scope,
            value,
        };
        file.declarations.push(decl.clone());
        Ok(decl)
    }

    /// Replaces the value of the declaration `name` in `scope`.
    ///
    /// Used once a declaration's body is known, so finalization reads the
    /// value directly.
    ///
    /// # Errors
    /// Returns `EmitError::Unresolved` if the scope or declaration does not
    /// exist.
    pub fn update(&mut self, scope: ScopeId, name: &str, value: Emitted<T>) -> Result<()> {
        let decl = self
            .files
            .get_mut(scope.0)
            .and_then(|file| file.declarations.iter_mut().find(|d| d.name == name))
            .ok_or_else(|| EmitError::unresolved(format!("declaration '{}'", name)))?;
        decl.value = value;
        Ok(())
    }

    /// Returns the source file owning `scope`.
    #[must_use]
    pub fn source_file(&self, scope: ScopeId) -> Option<&SourceFile<T>> {
        self.files.get(scope.0)
    }

    /// Returns all source files in creation order.
    #[must_use]
    pub fn source_files(&self) -> &[SourceFile<T>] {
        &self.files
    }
}

impl<T: Clone + 'static> Default for DeclarationRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
