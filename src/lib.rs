//! dfa-walk: step-by-step acceptance traces for hand-authored DFAs
//!
//! dfa-walk decides whether a deterministic finite automaton accepts an input
//! and records the walk so it can be animated. The deciding part is a pure
//! function; pacing and drawing live in a thin shell around it.
//!
//! # Core Concepts
//!
//! - **Dfa**: immutable automaton with exact and wildcard transitions
//! - **Registry**: the four built-in automata, built once and shared
//! - **Simulator**: runs an input and returns a [`Verdict`] with its trace
//! - **Animation**: turns a trace into paint/pause instructions and replays them
//!
//! # Example
//!
//! ```rust
//! use dfa_walk::animation::{interpret, play, Cancellation, Highlights, PlaybackConfig, ThreadPacer};
//! use dfa_walk::input::validate_input;
//! use dfa_walk::registry::{Automaton, Registry};
//! use dfa_walk::simulator::simulate;
//!
//! let dfa = Registry::global().get(Automaton::AOrB);
//! let input = validate_input(dfa, "b a").unwrap();
//! let verdict = simulate(dfa, &input);
//! assert!(verdict.accepted);
//! assert_eq!(verdict.path(), vec!["q1", "q3", "q3"]);
//!
//! let steps = interpret(dfa, &verdict.trace);
//! let mut highlights = Highlights::new();
//! play(
//!     &steps,
//!     &mut highlights,
//!     &mut ThreadPacer,
//!     &PlaybackConfig::instant(),
//!     &Cancellation::new(),
//! );
//! ```

pub mod animation;
pub mod builder;
pub mod core;
pub mod dot;
pub mod input;
pub mod registry;
pub mod simulator;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{Dfa, StateId, SymbolSpec, TraceEntry, Verdict};
pub use builder::{BuildError, DfaBuilder};
pub use input::InputError;
pub use registry::{Automaton, Registry, Selection};
pub use simulator::simulate;
