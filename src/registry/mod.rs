//! The four built-in automata and the selection surface around them.
//!
//! The tables are hand-authored equivalents of four regular expressions; none
//! of them is computed. They are built once, checked once, and then shared
//! read-only through [`Registry::global`].

mod selection;

pub use selection::{ParseAutomatonError, Selection, UNSELECTED_LABEL};

use crate::builder::{BuildError, DfaBuilder};
use crate::core::Dfa;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Names of the built-in automata.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Automaton {
    /// `(aba+bab) (a+b)* (bab) (a+b)* (a+b+ab+ba) (a+b+aa)*`
    AbaBab,
    /// `((101 + 111 + 101) + (1+0+11)) (1 + 0 + 01)* (111 + 000 + 101) (1+0)*`
    Binary,
    /// `(a+b)`
    AOrB,
    /// `(a*b)`
    AStarB,
}

impl Automaton {
    pub const ALL: [Automaton; 4] = [Self::AbaBab, Self::Binary, Self::AOrB, Self::AStarB];

    /// One-based position in the selection list.
    pub fn number(&self) -> usize {
        match self {
            Self::AbaBab => 1,
            Self::Binary => 2,
            Self::AOrB => 3,
            Self::AStarB => 4,
        }
    }

    /// Short identifier used on the command line and in snapshots.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::AbaBab => "aba-bab",
            Self::Binary => "binary",
            Self::AOrB => "a-or-b",
            Self::AStarB => "a-star-b",
        }
    }

    /// The regular expression this automaton recognises, as displayed.
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::AbaBab => "(aba+bab) (a+b)* (bab) (a+b)* (a+b+ab+ba) (a+b+aa)*",
            Self::Binary => {
                "((101 + 111 + 101) + (1+0+11)) (1 + 0 + 01)* (111 + 000 + 101) (1+0)*"
            }
            Self::AOrB => "(a+b)",
            Self::AStarB => "(a*b)",
        }
    }

    /// Example input shown in an empty text field.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::AbaBab => Some("abaababbab"),
            Self::Binary => Some("101110001"),
            Self::AOrB => Some("ab"),
            Self::AStarB => None,
        }
    }

    fn definition(&self) -> Result<Dfa, BuildError> {
        match self {
            Self::AbaBab => aba_bab(),
            Self::Binary => binary(),
            Self::AOrB => a_or_b(),
            Self::AStarB => a_star_b(),
        }
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

/// Immutable table of the built-in automata.
#[derive(Debug)]
pub struct Registry {
    automata: [Dfa; 4],
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// Build and check all four automata.
    pub fn standard() -> Result<Self, BuildError> {
        let [first, second, third, fourth] =
            Automaton::ALL.map(|automaton| automaton.definition());
        Ok(Self {
            automata: [first?, second?, third?, fourth?],
        })
    }

    /// Process-wide registry, built on first use.
    ///
    /// # Panics
    ///
    /// Panics if a built-in table is malformed. That is a programming error in
    /// this crate and surfaces on first use rather than mid-simulation.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(|| {
            Registry::standard().expect("built-in automata tables should always build")
        })
    }

    pub fn get(&self, automaton: Automaton) -> &Dfa {
        &self.automata[automaton.number() - 1]
    }

    /// Resolve a selection; `None` for the unselected sentinel.
    pub fn select(&self, selection: Selection) -> Option<&Dfa> {
        selection.automaton().map(|automaton| self.get(automaton))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Automaton, &Dfa)> + '_ {
        Automaton::ALL
            .into_iter()
            .map(move |automaton| (automaton, self.get(automaton)))
    }
}

fn aba_bab() -> Result<Dfa, BuildError> {
    DfaBuilder::new()
        .states([
            "q1", "q2", "q3", "q4", "q5", "q6", "q7", "q8", "q9", "q10", "q11", "T",
        ])
        .alphabet(['a', 'b'])
        .start("q1")
        .accept(["q10", "q11"])
        // aba | bab prefix
        .on("q1", 'a', "q2")
        .on("q2", 'b', "q3")
        .on("q3", 'a', "q6")
        .on("q1", 'b', "q4")
        .on("q4", 'a', "q5")
        .on("q5", 'b', "q6")
        // trap
        .on("q2", 'a', "T")
        .on("q3", 'b', "T")
        .on("q4", 'b', "T")
        .on("q5", 'a', "T")
        .on_any("T", "T")
        // (a+b)* bab (a+b)* ...
        .on("q6", 'a', "q6")
        .on("q6", 'b', "q7")
        .on("q7", 'b', "q7")
        .on("q7", 'a', "q8")
        .on("q8", 'a', "q6")
        .on("q8", 'b', "q9")
        .on("q9", 'a', "q10")
        .on("q9", 'b', "q11")
        .on("q10", 'a', "q10")
        .on("q11", 'b', "q11")
        .on("q10", 'b', "q11")
        .on("q11", 'a', "q10")
        .build()
}

fn binary() -> Result<Dfa, BuildError> {
    DfaBuilder::new()
        .states(["q1", "q2", "q3", "q4", "q5", "q6", "q7", "q8"])
        .alphabet(['1', '0'])
        .start("q1")
        .accept(["q8"])
        .on_any("q1", "q2")
        .on("q2", '1', "q3")
        .on("q2", '0', "q4")
        .on("q3", '0', "q5")
        .on("q3", '1', "q6")
        .on("q4", '1', "q3")
        .on("q4", '0', "q7")
        .on("q5", '1', "q8")
        .on("q5", '0', "q7")
        .on("q6", '0', "q5")
        .on("q6", '1', "q8")
        .on("q7", '1', "q3")
        .on("q7", '0', "q8")
        .on_any("q8", "q8")
        .build()
}

fn a_or_b() -> Result<Dfa, BuildError> {
    DfaBuilder::new()
        .states(["q1", "q2", "q3"])
        .alphabet(['a', 'b'])
        .start("q1")
        .accept(["q2", "q3"])
        .on("q1", 'a', "q2")
        .on("q1", 'b', "q3")
        .on("q2", 'a', "q2")
        .on("q2", 'b', "q2")
        .on("q3", 'a', "q3")
        .on("q3", 'b', "q3")
        .build()
}

fn a_star_b() -> Result<Dfa, BuildError> {
    DfaBuilder::new()
        .states(["q1", "q2"])
        .alphabet(['a', 'b'])
        .start("q1")
        .accept(["q1", "q2"])
        .on("q1", 'a', "q1")
        .on("q1", 'b', "q2")
        .on("q2", 'a', "q2")
        .on("q2", 'b', "q2")
        .build()
}
