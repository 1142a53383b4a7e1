//! Selection of an automaton, including the "nothing selected" sentinel.

use super::Automaton;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Label of the sentinel entry at the top of the selection list.
pub const UNSELECTED_LABEL: &str = "--- Select ---";

/// What the user has picked from the list of automata.
///
/// `Unselected` disables input entirely and never resolves to an automaton.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Unselected,
    Automaton(Automaton),
}

impl Selection {
    /// Display labels in list order, sentinel first.
    pub fn options() -> Vec<&'static str> {
        std::iter::once(UNSELECTED_LABEL)
            .chain(Automaton::ALL.iter().map(Automaton::pattern))
            .collect()
    }

    /// Map a display label back to a selection.
    pub fn from_label(label: &str) -> Option<Self> {
        if label == UNSELECTED_LABEL {
            return Some(Self::Unselected);
        }
        Automaton::ALL
            .into_iter()
            .find(|automaton| automaton.pattern() == label)
            .map(Self::Automaton)
    }

    pub fn automaton(&self) -> Option<Automaton> {
        match self {
            Self::Unselected => None,
            Self::Automaton(automaton) => Some(*automaton),
        }
    }

    /// Whether the text input and validate button should be enabled.
    pub fn input_enabled(&self) -> bool {
        self.automaton().is_some()
    }

    /// Placeholder text for the input field; empty when there is none.
    pub fn placeholder(&self) -> &'static str {
        self.automaton()
            .and_then(|automaton| automaton.placeholder())
            .unwrap_or("")
    }
}

/// Error for an unrecognised automaton name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown automaton '{0}'. Use 1-4 or one of: aba-bab, binary, a-or-b, a-star-b")]
pub struct ParseAutomatonError(pub String);

impl FromStr for Automaton {
    type Err = ParseAutomatonError;

    /// Accepts the list number (`1`-`4`), the slug, or the displayed pattern.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Automaton::ALL
            .into_iter()
            .find(|automaton| {
                s == automaton.number().to_string()
                    || s.eq_ignore_ascii_case(automaton.slug())
                    || s == automaton.pattern()
            })
            .ok_or_else(|| ParseAutomatonError(s.to_string()))
    }
}
