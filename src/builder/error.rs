//! Build errors for automaton definitions.

use crate::core::{StateId, SymbolSpec};
use thiserror::Error;

/// A single structural problem in an automaton definition.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DefinitionError {
    #[error("Automaton declares no states")]
    NoStates,

    #[error("Automaton declares an empty alphabet")]
    EmptyAlphabet,

    #[error("State '{state}' is declared more than once")]
    DuplicateState { state: StateId },

    #[error("Symbol '{symbol}' is declared more than once")]
    DuplicateSymbol { symbol: char },

    #[error("Start state '{state}' is not a declared state")]
    UnknownStartState { state: StateId },

    #[error("Accepting state '{state}' is not a declared state")]
    UnknownAcceptState { state: StateId },

    #[error("Transition source '{state}' is not a declared state")]
    UnknownSource { state: StateId },

    #[error("Transition from '{from}' targets undeclared state '{to}'")]
    UnknownTarget { from: StateId, to: StateId },

    #[error("Transition from '{from}' uses symbol '{symbol}' outside the alphabet")]
    SymbolOutsideAlphabet { from: StateId, symbol: char },

    #[error("State '{from}' defines more than one transition on '{label}'")]
    DuplicateTransition { from: StateId, label: SymbolSpec },
}

/// Errors that can occur when building an automaton.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,

    #[error("Malformed automaton definition: {}", join(.0))]
    Malformed(Vec<DefinitionError>),
}

fn join(errors: &[DefinitionError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_lists_every_problem() {
        let error = BuildError::Malformed(vec![
            DefinitionError::NoStates,
            DefinitionError::EmptyAlphabet,
        ]);

        assert_eq!(
            error.to_string(),
            "Malformed automaton definition: Automaton declares no states; \
             Automaton declares an empty alphabet"
        );
    }

    #[test]
    fn definition_errors_name_the_culprit() {
        let error = DefinitionError::UnknownTarget {
            from: StateId::new("q1"),
            to: StateId::new("q9"),
        };
        assert_eq!(
            error.to_string(),
            "Transition from 'q1' targets undeclared state 'q9'"
        );

        let error = DefinitionError::DuplicateTransition {
            from: StateId::new("T"),
            label: SymbolSpec::Any,
        };
        assert_eq!(
            error.to_string(),
            "State 'T' defines more than one transition on '*'"
        );
    }
}
