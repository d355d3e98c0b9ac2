//! Single-assignment placeholder for a value that is produced later.
//!
//! A [`Placeholder`] starts pending and is resolved at most once. Callbacks
//! registered while pending fire synchronously, in registration order, inside
//! the [`Placeholder::resolve`] call. Callbacks registered after resolution
//! fire immediately inside [`Placeholder::on_value`].
//!
//! Clones share the same cell.

use crate::error::{EmitError, Result};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Callback<T> = Box<dyn FnOnce(&T) -> Result<()>>;

enum State<T> {
    Pending(Vec<Callback<T>>),
    Resolved(Rc<T>),
}

/// Single-assignment future cell.
pub struct Placeholder<T> {
    state: Rc<RefCell<State<T>>>,
}

impl<T: 'static> Placeholder<T> {
    /// Creates a new pending placeholder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(State::Pending(Vec::new()))),
        }
    }

    /// Returns true once the placeholder holds a value.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(*self.state.borrow(), State::Resolved(_))
    }

    /// Returns the number of callbacks waiting for the value.
    #[must_use]
    pub fn pending_callbacks(&self) -> usize {
        match &*self.state.borrow() {
            State::Pending(callbacks) => callbacks.len(),
            State::Resolved(_) => 0,
        }
    }

    /// Registers a callback for the value.
    ///
    /// If the placeholder is already resolved the callback runs now and its
    /// result is returned. Otherwise it is queued and `Ok(())` is returned.
    ///
    /// # Errors
    /// Returns the callback's error when it runs immediately.
    pub fn on_value<F>(&self, callback: F) -> Result<()>
    where
        F: FnOnce(&T) -> Result<()> + 'static,
    {
        let resolved = {
            let mut state = self.state.borrow_mut();
            match &mut *state {
                State::Pending(callbacks) => {
                    callbacks.push(Box::new(callback));
                    return Ok(());
                }
                State::Resolved(value) => Rc::clone(value),
            }
        };
        callback(&resolved)
    }

    /// Stores the value and fires every queued callback in registration order.
    ///
    /// # Errors
    /// Returns `EmitError::DoubleResolution` if the placeholder was already
    /// resolved, or the first error raised by a callback.
    pub fn resolve(&self, value: T) -> Result<()> {
        let value = Rc::new(value);
        let callbacks = {
            let mut state = self.state.borrow_mut();
            let callbacks = match &mut *state {
                State::Resolved(_) => return Err(EmitError::DoubleResolution),
                State::Pending(callbacks) => std::mem::take(callbacks),
            };
            *state = State::Resolved(Rc::clone(&value));
            callbacks
        };

        for callback in callbacks {
            callback(&value)?;
        }
        Ok(())
    }

    /// Returns true if both handles refer to the same cell.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<T: Clone + 'static> Placeholder<T> {
    /// Returns a copy of the value if resolved.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        match &*self.state.borrow() {
            State::Resolved(value) => Some(T::clone(value)),
            State::Pending(_) => None,
        }
    }
}

impl<T: 'static> Default for Placeholder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Placeholder<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Placeholder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            State::Pending(callbacks) => f
                .debug_struct("Placeholder")
                .field("pending_callbacks", &callbacks.len())
                .finish(),
            State::Resolved(value) => f
                .debug_struct("Placeholder")
                .field("value", value)
                .finish(),
        }
    }
}
