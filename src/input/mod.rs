//! Validation of raw user input before simulation.
//!
//! The simulator assumes every symbol it sees belongs to the automaton's
//! alphabet. This module is the boundary that makes sure of it: it strips
//! whitespace, applies the empty-input policy and checks the alphabet.
//!
//! The empty string is a legal word for an automaton (and accepted by one
//! whose start state accepts), so refusing it is a policy here rather than a
//! rule of the simulator.

pub mod error;

pub use error::InputError;

use crate::core::Dfa;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Policy knobs for the input boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputPolicy {
    /// Refuse strings that are empty after whitespace stripping.
    pub reject_empty: bool,
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self { reject_empty: true }
    }
}

/// Remove every whitespace character, including interior ones.
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Validate `raw` against `dfa` with the default policy.
///
/// # Example
///
/// ```rust
/// use dfa_walk::input::{validate_input, InputError};
/// use dfa_walk::registry::{Automaton, Registry};
///
/// let dfa = Registry::global().get(Automaton::AbaBab);
///
/// assert_eq!(validate_input(dfa, " ab ba ").unwrap(), "abba");
/// assert_eq!(validate_input(dfa, "   "), Err(InputError::Empty));
/// assert!(matches!(
///     validate_input(dfa, "abc"),
///     Err(InputError::InvalidAlphabet { .. })
/// ));
/// ```
pub fn validate_input(dfa: &Dfa, raw: &str) -> Result<String, InputError> {
    validate_with(dfa, raw, InputPolicy::default())
}

/// Validate `raw` against `dfa` under an explicit policy.
///
/// Returns the stripped input, ready for [`simulate`](crate::simulator::simulate).
pub fn validate_with(dfa: &Dfa, raw: &str, policy: InputPolicy) -> Result<String, InputError> {
    let input = strip_whitespace(raw);

    if input.is_empty() && policy.reject_empty {
        warn!("rejecting empty input");
        return Err(InputError::Empty);
    }

    if !input.chars().all(|symbol| dfa.in_alphabet(symbol)) {
        warn!(%input, "input contains symbols outside the alphabet");
        return Err(InputError::InvalidAlphabet {
            input,
            alphabet: dfa.alphabet().to_vec(),
        });
    }

    Ok(input)
}
