//! # Screen Identifiers
//!
//! A `ScreenId` names a logical screen or a dynamically registered view.
//! It is the only key used by the stack, the presentation slots, the payload
//! table and the view tables.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque, value-compared screen token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenId(String);

impl ScreenId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScreenId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ScreenId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&ScreenId> for ScreenId {
    fn from(id: &ScreenId) -> Self {
        id.clone()
    }
}

// Lets the tables be queried with a plain `&str`.
impl Borrow<str> for ScreenId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ScreenId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ScreenId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
