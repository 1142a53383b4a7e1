//! Immutable automaton description.
//!
//! A [`Dfa`] is only produced by [`DfaBuilder`](crate::builder::DfaBuilder),
//! which checks every structural invariant up front. Once built it is never
//! mutated, so lookups here are pure and infallible.

use super::state::StateId;
use super::symbol::SymbolSpec;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Outgoing transitions of one source state.
///
/// Exact-symbol entries always win over the wildcard entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StateTransitions {
    pub(crate) exact: BTreeMap<char, StateId>,
    pub(crate) wildcard: Option<StateId>,
}

impl StateTransitions {
    /// Resolve `symbol`: exact entry first, wildcard second.
    pub fn resolve(&self, symbol: char) -> Option<&StateId> {
        self.exact.get(&symbol).or(self.wildcard.as_ref())
    }

    /// Exact-symbol entries ordered by symbol.
    pub fn exact(&self) -> impl Iterator<Item = (char, &StateId)> + '_ {
        self.exact.iter().map(|(symbol, target)| (*symbol, target))
    }

    /// Wildcard target, if this state has one.
    pub fn wildcard(&self) -> Option<&StateId> {
        self.wildcard.as_ref()
    }
}

/// A hand-authored deterministic finite automaton.
///
/// # Example
///
/// ```rust
/// use dfa_walk::builder::DfaBuilder;
///
/// let dfa = DfaBuilder::new()
///     .states(["q1", "q2"])
///     .alphabet(['a', 'b'])
///     .start("q1")
///     .accept(["q2"])
///     .on("q1", 'a', "q1")
///     .on("q1", 'b', "q2")
///     .on_any("q2", "q2")
///     .build()
///     .unwrap();
///
/// assert_eq!(dfa.lookup_transition(&"q1".into(), 'b').map(|s| s.name()), Some("q2"));
/// assert_eq!(dfa.lookup_transition(&"q2".into(), 'a').map(|s| s.name()), Some("q2"));
/// assert!(dfa.is_accepting(&"q2".into()));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dfa {
    pub(crate) states: Vec<StateId>,
    pub(crate) alphabet: Vec<char>,
    pub(crate) start_state: StateId,
    pub(crate) accept_states: BTreeSet<StateId>,
    pub(crate) transitions: BTreeMap<StateId, StateTransitions>,
}

impl Dfa {
    /// States in declaration order.
    pub fn states(&self) -> &[StateId] {
        &self.states
    }

    /// Alphabet symbols in declaration order.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn start_state(&self) -> &StateId {
        &self.start_state
    }

    pub fn accept_states(&self) -> &BTreeSet<StateId> {
        &self.accept_states
    }

    /// Check whether `symbol` belongs to the alphabet.
    pub fn in_alphabet(&self, symbol: char) -> bool {
        self.alphabet.contains(&symbol)
    }

    /// Find the next state for `symbol` from `state`.
    ///
    /// Returns the exact-symbol target if one is defined, otherwise the
    /// wildcard target, otherwise `None`. `None` means the automaton rejects
    /// without moving to any state.
    pub fn lookup_transition(&self, state: &StateId, symbol: char) -> Option<&StateId> {
        self.transitions
            .get(state)
            .and_then(|outgoing| outgoing.resolve(symbol))
    }

    /// Membership test against the accepting states.
    pub fn is_accepting(&self, state: &StateId) -> bool {
        self.accept_states.contains(state)
    }

    /// Outgoing transitions of `state`, if it has any.
    pub fn transitions_from(&self, state: &StateId) -> Option<&StateTransitions> {
        self.transitions.get(state)
    }

    /// Every transition as `(from, label, to)`.
    ///
    /// Sources follow state declaration order; exact entries come before the
    /// wildcard entry of the same source.
    pub fn edges(&self) -> impl Iterator<Item = (&StateId, SymbolSpec, &StateId)> + '_ {
        self.states.iter().flat_map(move |from| {
            self.transitions
                .get(from)
                .into_iter()
                .flat_map(move |outgoing| {
                    outgoing
                        .exact()
                        .map(move |(symbol, to)| (from, SymbolSpec::Exact(symbol), to))
                        .chain(outgoing.wildcard().map(move |to| (from, SymbolSpec::Any, to)))
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DfaBuilder;

    fn trap_dfa() -> Dfa {
        DfaBuilder::new()
            .states(["q1", "q2", "T"])
            .alphabet(['a', 'b'])
            .start("q1")
            .accept(["q2"])
            .on("q1", 'a', "q2")
            .on("q1", 'b', "T")
            .on("T", 'a', "q1")
            .on_any("T", "T")
            .build()
            .unwrap()
    }

    #[test]
    fn exact_transition_resolves() {
        let dfa = trap_dfa();
        assert_eq!(
            dfa.lookup_transition(&StateId::new("q1"), 'a'),
            Some(&StateId::new("q2"))
        );
    }

    #[test]
    fn exact_beats_wildcard() {
        let dfa = trap_dfa();
        assert_eq!(
            dfa.lookup_transition(&StateId::new("T"), 'a'),
            Some(&StateId::new("q1"))
        );
        assert_eq!(
            dfa.lookup_transition(&StateId::new("T"), 'b'),
            Some(&StateId::new("T"))
        );
    }

    #[test]
    fn missing_transition_is_none() {
        let dfa = trap_dfa();
        assert_eq!(dfa.lookup_transition(&StateId::new("q2"), 'a'), None);
        assert_eq!(dfa.lookup_transition(&StateId::new("nowhere"), 'a'), None);
    }

    #[test]
    fn is_accepting_checks_membership() {
        let dfa = trap_dfa();
        assert!(dfa.is_accepting(&StateId::new("q2")));
        assert!(!dfa.is_accepting(&StateId::new("q1")));
        assert!(!dfa.is_accepting(&StateId::new("T")));
    }

    #[test]
    fn edges_follow_declaration_order() {
        let dfa = trap_dfa();
        let edges: Vec<String> = dfa
            .edges()
            .map(|(from, label, to)| format!("{from}-{label}->{to}"))
            .collect();

        assert_eq!(
            edges,
            vec!["q1-a->q2", "q1-b->T", "T-a->q1", "T-*->T"]
        );
    }

    #[test]
    fn in_alphabet_uses_declared_symbols() {
        let dfa = trap_dfa();
        assert!(dfa.in_alphabet('a'));
        assert!(!dfa.in_alphabet('c'));
        assert_eq!(dfa.alphabet(), &['a', 'b']);
    }
}
