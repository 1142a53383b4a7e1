//! Walkthrough
//!
//! This example runs one input through each built-in automaton and replays the
//! animation without delays.
//!
//! Key concepts:
//! - Input is cleaned and checked against the automaton's alphabet first
//! - Simulation is a pure function returning a verdict and its trace
//! - The trace is interpreted into paint/pause instructions
//! - Playback applies those instructions to any renderer
//!
//! Run with: cargo run --example walkthrough

use dfa_walk::animation::{
    interpret, play, Cancellation, Highlights, PlaybackConfig, PlaybackOutcome, ThreadPacer,
};
use dfa_walk::input::validate_input;
use dfa_walk::{simulate, Automaton, Registry};

fn main() {
    println!("=== DFA Walkthrough Example ===\n");

    let registry = Registry::global();
    let runs = [
        (Automaton::AbaBab, "aba ab abab"),
        (Automaton::Binary, "1"),
        (Automaton::AOrB, "ba"),
        (Automaton::AStarB, "aaab"),
        (Automaton::AbaBab, "abc"),
    ];

    for (automaton, raw) in runs {
        let dfa = registry.get(automaton);
        println!("{automaton} <- {raw:?}");

        // Validation happens before any simulation
        let input = match validate_input(dfa, raw) {
            Ok(input) => input,
            Err(e) => {
                println!("  rejected: {e}\n");
                continue;
            }
        };

        let verdict = simulate(dfa, &input);
        println!("  path: {}", verdict.path().join(" -> "));

        let steps = interpret(dfa, &verdict.trace);
        let mut highlights = Highlights::new();
        let outcome = play(
            &steps,
            &mut highlights,
            &mut ThreadPacer,
            &PlaybackConfig::instant(),
            &Cancellation::new(),
        );
        assert_eq!(
            outcome,
            PlaybackOutcome::Completed {
                applied: steps.len()
            }
        );

        for (state, style) in highlights.as_map() {
            println!("  {state:<4} {style}");
        }
        println!(
            "  {}\n",
            if verdict.accepted { "accepted" } else { "not accepted" }
        );
    }
}
