//! Snapshot error types.

use crate::core::StateId;
use crate::registry::Automaton;
use thiserror::Error;

/// Errors raised while exporting or importing a run snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Trace length does not fit the input and the way the run halted
    #[error("Trace has {found} entries, but the run halted after {expected}")]
    TraceLength { found: usize, expected: usize },

    /// Recorded halt symbol is not the input symbol at that position
    #[error("Run halted on '{symbol}' at position {position}, but the input has {actual:?} there")]
    HaltSymbol {
        position: usize,
        symbol: char,
        actual: Option<char>,
    },

    #[error("Verdict says accepted = {accepted}, but the trace ends with step_accepted = {last_step}")]
    Acceptance { accepted: bool, last_step: bool },

    #[error("Run stopped at position {position}, but is marked accepted")]
    AcceptedAfterHalt { position: usize },

    #[error("State '{state}' is not a state of {automaton}")]
    UnknownState { state: StateId, automaton: Automaton },
}
