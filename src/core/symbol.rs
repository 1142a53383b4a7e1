//! Transition labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a transition matches on.
///
/// An `Exact` label matches one alphabet symbol. `Any` matches every alphabet
/// symbol that has no exact transition from the same source state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SymbolSpec {
    Exact(char),
    Any,
}

impl SymbolSpec {
    /// Check whether this label can be taken on `symbol` (ignores precedence).
    pub fn matches(&self, symbol: char) -> bool {
        match self {
            Self::Exact(expected) => *expected == symbol,
            Self::Any => true,
        }
    }
}

impl fmt::Display for SymbolSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(symbol) => write!(f, "{symbol}"),
            Self::Any => f.write_str("*"),
        }
    }
}

impl From<char> for SymbolSpec {
    fn from(symbol: char) -> Self {
        Self::Exact(symbol)
    }
}
