//! Core automaton types.
//!
//! This module contains the pure data of the engine:
//! - State identifiers and transition labels
//! - The immutable [`Dfa`] with its two-tier transition lookup
//! - Trace entries and the [`Verdict`] of a simulation
//!
//! Nothing here has side effects.

mod dfa;
mod state;
mod symbol;
mod trace;

pub use dfa::{Dfa, StateTransitions};
pub use state::StateId;
pub use symbol::SymbolSpec;
pub use trace::{Halt, TraceEntry, Verdict};
