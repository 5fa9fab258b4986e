//! # Destinations
//!
//! The caller's static id → view table, and the lookup rule the presentation
//! host uses: static table first, then the Navigator's dynamic table for the
//! same presentation kind. An id found in neither resolves to `None`.

use log::trace;
use std::collections::HashMap;

use crate::core::navigator::Navigator;
use crate::core::screen::ScreenId;

/// Which dynamic table a lookup falls back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Stack,
    Sheet,
    Cover,
}

pub struct Destinations<V> {
    views: HashMap<ScreenId, V>,
}

impl<V> Default for Destinations<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Destinations<V> {
    pub fn new() -> Self {
        Self {
            views: HashMap::new(),
        }
    }

    /// Builder-style registration.
    pub fn with(mut self, id: impl Into<ScreenId>, view: V) -> Self {
        self.insert(id, view);
        self
    }

    pub fn insert(&mut self, id: impl Into<ScreenId>, view: V) -> Option<V> {
        self.views.insert(id.into(), view)
    }

    pub fn get(&self, id: &str) -> Option<&V> {
        self.views.get(id)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn resolve<'a>(
        &'a self,
        navigator: &'a Navigator<V>,
        kind: Presentation,
        id: &str,
    ) -> Option<&'a V> {
        let found = self.views.get(id).or_else(|| match kind {
            Presentation::Stack => navigator.stack_view(id),
            Presentation::Sheet => navigator.sheet_view(id),
            Presentation::Cover => navigator.cover_view(id),
        });
        if found.is_none() {
            trace!("no view for {id} ({kind:?})");
        }
        found
    }
}

impl<V, I: Into<ScreenId>> FromIterator<(I, V)> for Destinations<V> {
    fn from_iter<T: IntoIterator<Item = (I, V)>>(iter: T) -> Self {
        Self {
            views: iter.into_iter().map(|(id, view)| (id.into(), view)).collect(),
        }
    }
}
