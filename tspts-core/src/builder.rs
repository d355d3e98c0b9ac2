//! Join builder: construct a composite value from children that may still
//! be pending.
//!
//! When every child is available the combiner runs immediately and no
//! placeholder is allocated. Otherwise the combiner runs exactly once, inside
//! the resolution of the last pending child, with the arguments in the
//! original child order.

use crate::entity::{EmitEntity, Emitted};
use crate::error::{EmitError, Result};
use crate::placeholder::Placeholder;
use std::cell::RefCell;
use std::rc::Rc;

type Combine<T> = Box<dyn FnOnce(Vec<T>) -> Result<T>>;

struct JoinState<T> {
    slots: Vec<Option<T>>,
    remaining: usize,
    combine: Option<Combine<T>>,
}

/// Joins `children` into one value built by `combine`.
///
/// Every child must be code; declarations are referenced by name and never
/// joined by value.
///
/// # Errors
/// Returns `EmitError::TypeMismatch` if a child is a declaration, or the
/// combiner's error when it runs immediately. Errors raised by a deferred
/// combiner surface from the `resolve` call that completed the last child.
pub fn join<T, F>(children: Vec<EmitEntity<T>>, combine: F) -> Result<Emitted<T>>
where
    T: Clone + 'static,
    F: FnOnce(Vec<T>) -> Result<T> + 'static,
{
    let mut slots = Vec::with_capacity(children.len());
    let mut pending = Vec::new();

    for (index, child) in children.into_iter().enumerate() {
        match child.into_code()? {
            Emitted::Ready(value) => slots.push(Some(value)),
            Emitted::Pending(ph) => match ph.value() {
                Some(value) => slots.push(Some(value)),
                None => {
                    slots.push(None);
                    pending.push((index, ph));
                }
            },
        }
    }

    if pending.is_empty() {
        return combine(fill(slots)?).map(Emitted::Ready);
    }

    let output = Placeholder::new();
    let state = Rc::new(RefCell::new(JoinState {
        slots,
        remaining: pending.len(),
        combine: Some(Box::new(combine) as Combine<T>),
    }));

    for (index, ph) in pending {
        let state = Rc::clone(&state);
        let output = output.clone();
        ph.on_value(move |value: &T| {
            let ready = {
                let mut state = state.borrow_mut();
                state.slots[index] = Some(value.clone());
                state.remaining -= 1;
                if state.remaining == 0 {
                    Some((std::mem::take(&mut state.slots), state.combine.take()))
                } else {
                    None
                }
            };

            match ready {
                Some((slots, Some(combine))) => output.resolve(combine(fill(slots)?)?),
                Some((_, None)) => Err(EmitError::DoubleResolution),
                None => Ok(()),
            }
        })?;
    }

    Ok(Emitted::Pending(output))
}

fn fill<T>(slots: Vec<Option<T>>) -> Result<Vec<T>> {
    slots
        .into_iter()
        .collect::<Option<Vec<T>>>()
        .ok_or_else(|| EmitError::unresolved("join argument"))
}
