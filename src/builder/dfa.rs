//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::builder::rules::{self, Draft};
use crate::core::{Dfa, StateId, StateTransitions, SymbolSpec};
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use tracing::debug;

/// Builder for constructing automata with a fluent API.
///
/// Nothing is checked until [`build`](Self::build), which reports every
/// structural problem of the definition at once.
#[derive(Clone, Debug, Default)]
pub struct DfaBuilder {
    states: Vec<StateId>,
    alphabet: Vec<char>,
    start: Option<StateId>,
    accept: Vec<StateId>,
    transitions: Vec<(StateId, SymbolSpec, StateId)>,
}

impl DfaBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare states, in display order.
    pub fn states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StateId>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Declare alphabet symbols, in display order.
    pub fn alphabet<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.alphabet.extend(symbols);
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, state: impl Into<StateId>) -> Self {
        self.start = Some(state.into());
        self
    }

    /// Mark states as accepting.
    pub fn accept<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StateId>,
    {
        self.accept.extend(states.into_iter().map(Into::into));
        self
    }

    /// Add an exact-symbol transition.
    pub fn on(self, from: impl Into<StateId>, symbol: char, to: impl Into<StateId>) -> Self {
        self.transition(from, SymbolSpec::Exact(symbol), to)
    }

    /// Add a wildcard transition taken on any symbol without an exact entry.
    pub fn on_any(self, from: impl Into<StateId>, to: impl Into<StateId>) -> Self {
        self.transition(from, SymbolSpec::Any, to)
    }

    /// Add a transition with an explicit label.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        label: SymbolSpec,
        to: impl Into<StateId>,
    ) -> Self {
        self.transitions.push((from.into(), label, to.into()));
        self
    }

    /// Build the automaton.
    /// Returns an error if the start state is missing or the tables are malformed.
    pub fn build(self) -> Result<Dfa, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;

        let draft = Draft {
            states: self.states,
            alphabet: self.alphabet,
            start,
            accept: self.accept,
            transitions: self.transitions,
        };

        if let Validation::Failure(errors) = rules::check(&draft) {
            return Err(BuildError::Malformed(errors.iter().cloned().collect()));
        }

        let mut transitions: BTreeMap<StateId, StateTransitions> = BTreeMap::new();
        for (from, label, to) in draft.transitions {
            let outgoing = transitions.entry(from).or_default();
            match label {
                SymbolSpec::Exact(symbol) => {
                    outgoing.exact.insert(symbol, to);
                }
                SymbolSpec::Any => outgoing.wildcard = Some(to),
            }
        }

        debug!(
            states = draft.states.len(),
            symbols = draft.alphabet.len(),
            start = %draft.start,
            "built automaton"
        );

        Ok(Dfa {
            states: draft.states,
            alphabet: draft.alphabet,
            start_state: draft.start,
            accept_states: draft.accept.into_iter().collect(),
            transitions,
        })
    }
}
