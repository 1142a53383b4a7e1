//! Structural checks for automaton definitions using Validation.
//!
//! Every check runs, and all failures are accumulated so a broken table
//! reports each of its problems in one pass.

use crate::builder::error::DefinitionError;
use crate::core::{StateId, SymbolSpec};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of a single definition check.
pub type CheckResult = Validation<(), NonEmptyVec<DefinitionError>>;

/// Unchecked automaton tables as collected by the builder.
#[derive(Clone, Debug)]
pub(crate) struct Draft {
    pub states: Vec<StateId>,
    pub alphabet: Vec<char>,
    pub start: StateId,
    pub accept: Vec<StateId>,
    pub transitions: Vec<(StateId, SymbolSpec, StateId)>,
}

fn require(ok: bool, violation: impl FnOnce() -> DefinitionError) -> CheckResult {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Run every structural check against `draft`, accumulating ALL violations.
pub(crate) fn check(draft: &Draft) -> CheckResult {
    let mut checks: Vec<CheckResult> = Vec::new();

    checks.push(require(!draft.states.is_empty(), || {
        DefinitionError::NoStates
    }));
    checks.push(require(!draft.alphabet.is_empty(), || {
        DefinitionError::EmptyAlphabet
    }));

    let mut seen_states = HashSet::new();
    for state in &draft.states {
        checks.push(require(seen_states.insert(state), || {
            DefinitionError::DuplicateState {
                state: state.clone(),
            }
        }));
    }

    let mut seen_symbols = HashSet::new();
    for symbol in &draft.alphabet {
        checks.push(require(seen_symbols.insert(*symbol), || {
            DefinitionError::DuplicateSymbol { symbol: *symbol }
        }));
    }

    checks.push(require(seen_states.contains(&draft.start), || {
        DefinitionError::UnknownStartState {
            state: draft.start.clone(),
        }
    }));

    for state in &draft.accept {
        checks.push(require(seen_states.contains(state), || {
            DefinitionError::UnknownAcceptState {
                state: state.clone(),
            }
        }));
    }

    let mut seen_labels = HashSet::new();
    for (from, label, to) in &draft.transitions {
        checks.push(require(seen_states.contains(from), || {
            DefinitionError::UnknownSource {
                state: from.clone(),
            }
        }));
        checks.push(require(seen_states.contains(to), || {
            DefinitionError::UnknownTarget {
                from: from.clone(),
                to: to.clone(),
            }
        }));
        if let SymbolSpec::Exact(symbol) = label {
            checks.push(require(seen_symbols.contains(symbol), || {
                DefinitionError::SymbolOutsideAlphabet {
                    from: from.clone(),
                    symbol: *symbol,
                }
            }));
        }
        checks.push(require(seen_labels.insert((from, *label)), || {
            DefinitionError::DuplicateTransition {
                from: from.clone(),
                label: *label,
            }
        }));
    }

    Validation::all_vec(checks).map(|_| ())
}
