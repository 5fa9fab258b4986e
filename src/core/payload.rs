//! # Screen Payloads
//!
//! Data handed to a screen when it is pushed or presented "with data".
//! Values are boxed, but every read names the expected type, so a caller
//! asking for the wrong type gets `None` instead of a silently wrong value.

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::fmt;

use crate::core::screen::ScreenId;

/// A boxed payload value that remembers the name of its concrete type.
pub struct Payload {
    value: Box<dyn Any>,
    type_name: &'static str,
}

impl Payload {
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Borrow the value as `T`, or `None` if it was stored as another type.
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payload")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Payloads keyed by screen id. Writing an id again overwrites its entry.
#[derive(Debug, Default)]
pub struct PayloadTable {
    entries: HashMap<ScreenId, Payload>,
}

impl PayloadTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ScreenId, payload: Payload) {
        self.entries.insert(id, payload);
    }

    pub fn get(&self, id: &str) -> Option<&Payload> {
        self.entries.get(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Payload> {
        self.entries.remove(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
