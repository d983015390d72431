//! Entity category identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Names the entity family a record belongs to (`"topic"`,
/// `"exploration_commit_log"`, ...).
///
/// Categories are configuration-defined rather than a closed enum: the
/// audit registry is built from them at startup, so embedders can introduce
/// new families without touching the engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityCategory(String);

impl EntityCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityCategory {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
