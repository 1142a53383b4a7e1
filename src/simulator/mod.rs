//! Deterministic execution of an automaton over an input.
//!
//! [`simulate`] is a pure, total function of `(dfa, input)`: it never fails and
//! always returns the same [`Verdict`] for the same arguments. Validating the
//! input (non-empty, inside the alphabet) is the caller's job; see
//! [`crate::input`].

use crate::core::{Dfa, Halt, TraceEntry, Verdict};
use crate::input::{validate_with, InputError, InputPolicy};
use tracing::debug;

/// Run `dfa` over `input` and record the walk.
///
/// For each symbol the state before consuming it is recorded together with
/// whether a transition existed. A missing transition stops the walk at once
/// with a rejection; otherwise one last entry records the resting state and
/// whether it accepts. The trace therefore never exceeds `input` length + 1.
///
/// # Example
///
/// ```rust
/// use dfa_walk::registry::{Automaton, Registry};
/// use dfa_walk::simulator::simulate;
///
/// let dfa = Registry::global().get(Automaton::AStarB);
/// let verdict = simulate(dfa, "aaab");
///
/// assert!(verdict.accepted);
/// assert_eq!(verdict.path(), vec!["q1", "q1", "q1", "q1", "q2"]);
/// ```
pub fn simulate(dfa: &Dfa, input: &str) -> Verdict {
    let mut trace = Vec::with_capacity(input.chars().count() + 1);
    let mut current = dfa.start_state();

    for (position, symbol) in input.chars().enumerate() {
        let next = dfa.lookup_transition(current, symbol);
        trace.push(TraceEntry::new(current.clone(), next.is_some()));

        let Some(next) = next else {
            debug!(state = %current, %symbol, position, "no transition, rejecting");
            return Verdict {
                accepted: false,
                halt: Halt::UndefinedTransition { position, symbol },
                trace,
            };
        };

        debug!(from = %current, %symbol, to = %next, "step");
        current = next;
    }

    let accepted = dfa.is_accepting(current);
    trace.push(TraceEntry::new(current.clone(), accepted));
    debug!(state = %current, accepted, "input consumed");

    Verdict {
        accepted,
        halt: Halt::Consumed,
        trace,
    }
}

/// Validate raw user input under `policy`, then simulate it.
///
/// Input errors are reported before the automaton is touched.
pub fn simulate_input(dfa: &Dfa, raw: &str, policy: InputPolicy) -> Result<Verdict, InputError> {
    let input = validate_with(dfa, raw, policy)?;
    Ok(simulate(dfa, &input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DfaBuilder;
    use crate::core::StateId;

    fn partial_dfa() -> Dfa {
        DfaBuilder::new()
            .states(["s", "m", "f"])
            .alphabet(['x', 'y'])
            .start("s")
            .accept(["f"])
            .on("s", 'x', "m")
            .on("m", 'y', "f")
            .build()
            .unwrap()
    }

    #[test]
    fn accepted_walk_records_every_step() {
        let verdict = simulate(&partial_dfa(), "xy");

        assert!(verdict.accepted);
        assert_eq!(verdict.halt, Halt::Consumed);
        assert_eq!(
            verdict.trace,
            vec![
                TraceEntry::new("s", true),
                TraceEntry::new("m", true),
                TraceEntry::new("f", true),
            ]
        );
    }

    #[test]
    fn non_accepting_final_state_rejects() {
        let verdict = simulate(&partial_dfa(), "x");

        assert!(!verdict.accepted);
        assert_eq!(verdict.halt, Halt::Consumed);
        assert_eq!(verdict.trace.last(), Some(&TraceEntry::new("m", false)));
    }

    #[test]
    fn undefined_transition_stops_early() {
        let verdict = simulate(&partial_dfa(), "xxyyy");

        assert!(!verdict.accepted);
        assert_eq!(
            verdict.halt,
            Halt::UndefinedTransition {
                position: 1,
                symbol: 'x'
            }
        );
        assert_eq!(
            verdict.trace,
            vec![TraceEntry::new("s", true), TraceEntry::new("m", false)]
        );
    }

    #[test]
    fn empty_input_checks_start_state_only() {
        let verdict = simulate(&partial_dfa(), "");

        assert!(!verdict.accepted);
        assert_eq!(verdict.trace, vec![TraceEntry::new("s", false)]);
    }

    #[test]
    fn exact_transition_wins_over_wildcard() {
        let dfa = DfaBuilder::new()
            .states(["a", "b", "sink"])
            .alphabet(['0', '1'])
            .start("a")
            .accept(["b"])
            .on("a", '1', "b")
            .on_any("a", "sink")
            .on_any("sink", "sink")
            .build()
            .unwrap();

        let verdict = simulate(&dfa, "1");
        assert!(verdict.accepted);
        assert_eq!(verdict.final_state(), Some(&StateId::new("b")));

        let verdict = simulate(&dfa, "0");
        assert!(!verdict.accepted);
        assert_eq!(verdict.final_state(), Some(&StateId::new("sink")));
    }

    #[test]
    fn simulate_input_validates_first() {
        let dfa = partial_dfa();
        let policy = InputPolicy::default();

        assert_eq!(simulate_input(&dfa, "", policy), Err(InputError::Empty));
        assert!(matches!(
            simulate_input(&dfa, "xz", policy),
            Err(InputError::InvalidAlphabet { .. })
        ));
        assert!(simulate_input(&dfa, " x y ", policy).unwrap().accepted);
    }

    #[test]
    fn simulate_is_deterministic() {
        let dfa = partial_dfa();
        assert_eq!(simulate(&dfa, "xyx"), simulate(&dfa, "xyx"));
    }
}
