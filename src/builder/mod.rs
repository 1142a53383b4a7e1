//! Builder API for hand-authored automata.
//!
//! Automata are written down as tables: states, alphabet, start, accepting
//! states and transitions. [`DfaBuilder`] collects those tables and checks
//! them as a whole before producing an immutable [`Dfa`](crate::core::Dfa).

pub mod dfa;
pub mod error;
mod rules;

pub use dfa::DfaBuilder;
pub use error::{BuildError, DefinitionError};
