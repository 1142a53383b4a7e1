//! State identifiers.
//!
//! States in a hand-authored automaton are named by short strings such as
//! `q1` or `T`. `StateId` wraps that name so it cannot be confused with input
//! text or symbol labels.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a single automaton state.
///
/// # Example
///
/// ```rust
/// use dfa_walk::core::StateId;
///
/// let q1 = StateId::new("q1");
/// assert_eq!(q1.name(), "q1");
/// assert_eq!(q1.to_string(), "q1");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    /// Create an identifier from any string-like name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for StateId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for StateId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for StateId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
