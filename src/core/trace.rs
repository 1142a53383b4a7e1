//! Simulation traces.
//!
//! A trace is the ordered record of every state the automaton sat in while
//! consuming input, each tagged with whether that step was still on an
//! accepted path. Traces are plain values: built once per simulation and
//! handed to whoever animates them.

use super::state::StateId;
use serde::{Deserialize, Serialize};

/// One step of a simulation.
///
/// For a consumed symbol, `state` is the state *before* consuming it and
/// `step_accepted` says whether a transition existed. The last entry of a
/// fully consumed input holds the resting state and whether it accepts.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TraceEntry {
    pub state: StateId,
    pub step_accepted: bool,
}

impl TraceEntry {
    pub fn new(state: impl Into<StateId>, step_accepted: bool) -> Self {
        Self {
            state: state.into(),
            step_accepted,
        }
    }
}

/// Why a simulation stopped.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Halt {
    /// Every symbol was consumed.
    Consumed,

    /// No transition matched `symbol` at `position`; the rest of the input
    /// was never read.
    UndefinedTransition { position: usize, symbol: char },
}

/// Outcome of running an automaton over an input.
///
/// # Example
///
/// ```rust
/// use dfa_walk::core::{Halt, TraceEntry, Verdict};
///
/// let verdict = Verdict {
///     accepted: true,
///     halt: Halt::Consumed,
///     trace: vec![TraceEntry::new("q1", true), TraceEntry::new("q2", true)],
/// };
///
/// assert_eq!(verdict.path(), vec!["q1", "q2"]);
/// assert_eq!(verdict.final_state().map(|s| s.name()), Some("q2"));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Verdict {
    pub accepted: bool,
    pub halt: Halt,
    pub trace: Vec<TraceEntry>,
}

impl Verdict {
    /// State names in trace order.
    pub fn path(&self) -> Vec<&str> {
        self.trace.iter().map(|entry| entry.state.name()).collect()
    }

    /// Resting state after full consumption, `None` after an early stop.
    pub fn final_state(&self) -> Option<&StateId> {
        match self.halt {
            Halt::Consumed => self.trace.last().map(|entry| &entry.state),
            Halt::UndefinedTransition { .. } => None,
        }
    }

    pub fn stopped_early(&self) -> bool {
        matches!(self.halt, Halt::UndefinedTransition { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_new_accepts_str() {
        let entry = TraceEntry::new("q4", false);
        assert_eq!(entry.state, StateId::new("q4"));
        assert!(!entry.step_accepted);
    }

    #[test]
    fn early_stop_has_no_final_state() {
        let verdict = Verdict {
            accepted: false,
            halt: Halt::UndefinedTransition {
                position: 1,
                symbol: 'a',
            },
            trace: vec![TraceEntry::new("q1", true), TraceEntry::new("q2", false)],
        };

        assert!(verdict.stopped_early());
        assert!(verdict.final_state().is_none());
        assert_eq!(verdict.path(), vec!["q1", "q2"]);
    }

    #[test]
    fn consumed_final_state_is_last_entry() {
        let verdict = Verdict {
            accepted: false,
            halt: Halt::Consumed,
            trace: vec![TraceEntry::new("q1", true), TraceEntry::new("q5", false)],
        };

        assert!(!verdict.stopped_early());
        assert_eq!(verdict.final_state(), Some(&StateId::new("q5")));
    }

    #[test]
    fn verdict_serializes_correctly() {
        let verdict = Verdict {
            accepted: true,
            halt: Halt::Consumed,
            trace: vec![TraceEntry::new("q1", true)],
        };

        let json = serde_json::to_string(&verdict).unwrap();
        let deserialized: Verdict = serde_json::from_str(&json).unwrap();
        assert_eq!(verdict, deserialized);
    }
}
