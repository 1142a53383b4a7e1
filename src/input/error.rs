//! User-facing input errors.

use thiserror::Error;

/// Reasons a raw input string is refused before simulation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Empty/Invalid Input")]
    Empty,

    #[error(
        "String '{input}' contains invalid characters, please only use characters from the alphabet: {}",
        list(.alphabet)
    )]
    InvalidAlphabet { input: String, alphabet: Vec<char> },
}

fn list(alphabet: &[char]) -> String {
    alphabet
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
