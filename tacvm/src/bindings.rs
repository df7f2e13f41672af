//! Binding environment.
//!
//! The environment records every declared location together with the
//! constant it currently resolves to, if any. It is append-only during an
//! execution and every lookup is a linear scan returning the first match, so
//! a location declared twice always resolves through its first declaration.

use crate::error::ExecError;
use crate::location::{Const, Location};
use smallvec::SmallVec;
use tracing::debug;

/// Number of bindings kept inline before spilling to the heap.
const INLINE_BINDINGS: usize = 8;

/// A declared location and its resolved constant.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub location: Location,
    pub value: Option<Const>,
}

impl Binding {
    /// Whether this binding holds a value.
    pub fn state(&self) -> BindingState {
        match self.value {
            Some(value) => BindingState::Bound(value),
            None => BindingState::Unbound,
        }
    }
}

/// State of a declared location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BindingState {
    /// Declared, no value stored yet.
    Unbound,
    /// Holds a constant.
    Bound(Const),
}

/// Ordered sequence of bindings for a single execution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    entries: SmallVec<[Binding; INLINE_BINDINGS]>,
}

impl Bindings {
    /// Creates an empty environment.
    pub const fn new() -> Self {
        Self {
            entries: SmallVec::new_const(),
        }
    }

    /// Appends an unbound entry for `location`. Earlier declarations of the
    /// same location are left in place and keep shadowing this one.
    pub fn declare(&mut self, location: Location) {
        debug!("Declaring {}", location);
        self.entries.push(Binding {
            location,
            value: None,
        });
    }

    /// Position of the first binding for `location`.
    pub fn position(&self, location: &Location) -> Option<usize> {
        self.entries.iter().position(|b| &b.location == location)
    }

    /// First binding for `location`.
    pub fn get(&self, location: &Location) -> Option<&Binding> {
        self.position(location).map(|idx| &self.entries[idx])
    }

    /// State of the first binding for `location`, if it was declared.
    pub fn state(&self, location: &Location) -> Option<BindingState> {
        self.get(location).map(Binding::state)
    }

    /// Overwrites the value of the first binding for `location`.
    pub fn store(&mut self, location: &Location, value: Const) -> Result<(), ExecError> {
        let idx = self
            .position(location)
            .ok_or_else(|| ExecError::UnresolvedLocation {
                location: location.clone(),
            })?;
        debug!("Storing {:.6} into {}", value, location);
        self.entries[idx].value = Some(value);
        Ok(())
    }

    /// Resolves `location` to a constant.
    ///
    /// Constants resolve to themselves. Variables and temporaries resolve to
    /// the value of their first binding.
    ///
    /// # Panics
    /// If `location` is [`Location::None`]. No instruction may read from an
    /// unused slot, so reaching this is an engine or caller defect.
    pub fn as_const(&self, location: &Location) -> Result<Const, ExecError> {
        match location {
            Location::Constant(value) => Ok(*value),
            Location::Variable(_) | Location::Temporary(_) => {
                let binding = self
                    .get(location)
                    .ok_or_else(|| ExecError::UnresolvedLocation {
                        location: location.clone(),
                    })?;
                binding.value.ok_or_else(|| ExecError::UnboundValue {
                    location: location.clone(),
                })
            }
            Location::None => panic!("NONE location passed to as_const()"),
        }
    }

    /// Number of bindings, counting duplicate declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bindings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.entries.iter()
    }
}
