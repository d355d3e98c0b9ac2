//! Emission results: produced values, placeholders and declarations.

use crate::error::{EmitError, Result};
use crate::placeholder::Placeholder;
use crate::scope::ScopeId;

/// A value that is either already produced or still pending.
#[derive(Debug, Clone)]
pub enum Emitted<T> {
    /// Value is available now.
    Ready(T),
    /// Value will be produced when the placeholder resolves.
    Pending(Placeholder<T>),
}

impl<T: Clone + 'static> Emitted<T> {
    /// Wraps an available value.
    #[must_use]
    pub const fn ready(value: T) -> Self {
        Self::Ready(value)
    }

    /// Wraps a placeholder.
    #[must_use]
    pub const fn pending(placeholder: Placeholder<T>) -> Self {
        Self::Pending(placeholder)
    }

    /// Returns true if a value can be read now, either directly or from a
    /// placeholder that has already resolved.
    #[must_use]
    pub fn is_available(&self) -> bool {
        match self {
            Self::Ready(_) => true,
            Self::Pending(ph) => ph.is_resolved(),
        }
    }

    /// Returns the value if one is available.
    ///
    /// A `Pending` whose placeholder has already resolved hands back the
    /// cached value instead of deferring again.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value.clone()),
            Self::Pending(ph) => ph.value(),
        }
    }

    /// Extracts the value, failing if it was never produced.
    ///
    /// # Errors
    /// Returns `EmitError::Unresolved` naming `what` if the value is still
    /// pending.
    pub fn extract(&self, what: &str) -> Result<T> {
        self.value().ok_or_else(|| EmitError::unresolved(what))
    }

    /// Collapses a resolved placeholder into `Ready`.
    #[must_use]
    pub fn settle(self) -> Self {
        match self {
            Self::Pending(ph) => match ph.value() {
                Some(value) => Self::Ready(value),
                None => Self::Pending(ph),
            },
            ready => ready,
        }
    }

    /// Runs `callback` with the value now, or once it resolves.
    ///
    /// # Errors
    /// Returns the callback's error when it runs immediately.
    pub fn on_value<F>(&self, callback: F) -> Result<()>
    where
        F: FnOnce(&T) -> Result<()> + 'static,
    {
        match self {
            Self::Ready(value) => callback(value),
            Self::Pending(ph) => ph.on_value(callback),
        }
    }
}

/// A named, registry-tracked result.
///
/// References to a declaration are built from its name, never from its value.
#[derive(Debug, Clone)]
pub struct Declaration<T> {
    /// Declared name.
    pub name: String,
    /// Scope the declaration belongs to.
    pub scope: ScopeId,
    /// Declared value.
    pub value: Emitted<T>,
}

impl<T: Clone + 'static> Declaration<T> {
    /// Extracts the declared value for finalization.
    ///
    /// # Errors
    /// Returns `EmitError::Unresolved` if the declaration's body never resolved.
    pub fn extract(&self) -> Result<T> {
        self.value.extract(&format!("declaration '{}'", self.name))
    }
}

/// Result of emitting one schema entity.
#[derive(Debug, Clone)]
pub enum EmitEntity<T> {
    /// Anonymous code that is embedded by value.
    Code(Emitted<T>),
    /// Named declaration that is referenced by name.
    Declaration(Declaration<T>),
}

impl<T: Clone + 'static> EmitEntity<T> {
    /// Creates a code entity from an available value.
    #[must_use]
    pub const fn code(value: T) -> Self {
        Self::Code(Emitted::Ready(value))
    }

    /// Returns the entity kind name.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Code(_) => "code",
            Self::Declaration(_) => "declaration",
        }
    }

    /// Returns the emitted value, whatever the entity kind.
    #[must_use]
    pub const fn emitted(&self) -> &Emitted<T> {
        match self {
            Self::Code(value) => value,
            Self::Declaration(decl) => &decl.value,
        }
    }

    /// Narrows the entity to code.
    ///
    /// # Errors
    /// Returns `EmitError::TypeMismatch` for a declaration.
    pub fn into_code(self) -> Result<Emitted<T>> {
        match self {
            Self::Code(value) => Ok(value),
            other => Err(EmitError::mismatch("code", other.kind())),
        }
    }

    /// Narrows the entity to a declaration.
    ///
    /// # Errors
    /// Returns `EmitError::TypeMismatch` for code.
    pub fn into_declaration(self) -> Result<Declaration<T>> {
        match self {
            Self::Declaration(decl) => Ok(decl),
            other => Err(EmitError::mismatch("declaration", other.kind())),
        }
    }
}

impl<T> From<Emitted<T>> for EmitEntity<T> {
    fn from(value: Emitted<T>) -> Self {
        Self::Code(value)
    }
}
