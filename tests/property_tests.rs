//! Property-based tests for the simulator.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated automata and inputs.

use dfa_walk::animation::{interpret, RenderStep, Style};
use dfa_walk::core::{Halt, StateId};
use dfa_walk::{simulate, Automaton, Dfa, DfaBuilder, Registry};
use proptest::prelude::*;
use std::collections::BTreeMap;

const STATES: usize = 4;
const SYMBOLS: [char; 3] = ['a', 'b', 'c'];

fn state(index: usize) -> StateId {
    StateId::new(format!("s{index}"))
}

fn word(automaton: Automaton) -> impl Strategy<Value = String> {
    let alphabet = Registry::global().get(automaton).alphabet().to_vec();
    prop::collection::vec(prop::sample::select(alphabet), 0..24)
        .prop_map(|symbols| symbols.into_iter().collect::<String>())
}

prop_compose! {
    fn builtin_run()(automaton in prop::sample::select(Automaton::ALL.to_vec()))
        (input in word(automaton), automaton in Just(automaton)) -> (Automaton, String) {
        (automaton, input)
    }
}

/// A partial automaton over `SYMBOLS` with its tables kept alongside.
#[derive(Debug, Clone)]
struct Layered {
    dfa: Dfa,
    exact: BTreeMap<(usize, char), usize>,
    wildcard: Vec<Option<usize>>,
}

prop_compose! {
    fn layered_dfa()(
        exact in prop::collection::vec(
            (0..STATES, prop::sample::select(SYMBOLS.to_vec()), 0..STATES),
            0..10,
        ),
        wildcard in prop::collection::vec(prop::option::of(0..STATES), STATES),
        accept in prop::collection::vec(any::<bool>(), STATES),
    ) -> Layered {
        let exact: BTreeMap<(usize, char), usize> = exact
            .into_iter()
            .map(|(from, symbol, to)| ((from, symbol), to))
            .collect();

        let mut builder = DfaBuilder::new()
            .states((0..STATES).map(state))
            .alphabet(SYMBOLS)
            .start(state(0))
            .accept((0..STATES).filter(|i| accept[*i]).map(state));
        for ((from, symbol), to) in &exact {
            builder = builder.on(state(*from), *symbol, state(*to));
        }
        for (from, to) in wildcard.iter().enumerate() {
            if let Some(to) = to {
                builder = builder.on_any(state(from), state(*to));
            }
        }

        Layered {
            dfa: builder.build().unwrap(),
            exact,
            wildcard,
        }
    }
}

fn symbols() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(SYMBOLS.to_vec()), 0..16)
        .prop_map(|symbols| symbols.into_iter().collect::<String>())
}

proptest! {
    #[test]
    fn trace_never_exceeds_input_plus_one((automaton, input) in builtin_run()) {
        let verdict = simulate(Registry::global().get(automaton), &input);
        prop_assert!(!verdict.trace.is_empty());
        prop_assert!(verdict.trace.len() <= input.chars().count() + 1);
    }

    #[test]
    fn simulate_is_deterministic((automaton, input) in builtin_run()) {
        let dfa = Registry::global().get(automaton);
        prop_assert_eq!(simulate(dfa, &input), simulate(dfa, &input));
    }

    #[test]
    fn builtin_automata_consume_whole_words((automaton, input) in builtin_run()) {
        let dfa = Registry::global().get(automaton);
        let verdict = simulate(dfa, &input);

        prop_assert_eq!(verdict.halt, Halt::Consumed);
        prop_assert_eq!(verdict.trace.len(), input.chars().count() + 1);
    }

    #[test]
    fn trace_follows_transitions((automaton, input) in builtin_run()) {
        let dfa = Registry::global().get(automaton);
        let verdict = simulate(dfa, &input);

        prop_assert_eq!(&verdict.trace[0].state, dfa.start_state());
        for (window, symbol) in verdict.trace.windows(2).zip(input.chars()) {
            prop_assert_eq!(dfa.lookup_transition(&window[0].state, symbol), Some(&window[1].state));
        }
    }

    #[test]
    fn exact_symbol_takes_precedence(layered in layered_dfa()) {
        for from in 0..STATES {
            for symbol in SYMBOLS {
                let expected = layered
                    .exact
                    .get(&(from, symbol))
                    .copied()
                    .or(layered.wildcard[from])
                    .map(state);
                prop_assert_eq!(
                    layered.dfa.lookup_transition(&state(from), symbol).cloned(),
                    expected
                );
            }
        }
    }

    #[test]
    fn early_stop_ends_the_trace(layered in layered_dfa(), input in symbols()) {
        let verdict = simulate(&layered.dfa, &input);

        if let Halt::UndefinedTransition { position, symbol } = verdict.halt {
            prop_assert!(!verdict.accepted);
            prop_assert_eq!(verdict.trace.len(), position + 1);
            prop_assert_eq!(input.chars().nth(position), Some(symbol));
            prop_assert!(!verdict.trace[position].step_accepted);
            prop_assert!(verdict.trace[..position].iter().all(|entry| entry.step_accepted));
        }
    }

    #[test]
    fn accepted_iff_consumed_into_accepting_state(layered in layered_dfa(), input in symbols()) {
        let verdict = simulate(&layered.dfa, &input);

        let expected = verdict.halt == Halt::Consumed
            && verdict
                .final_state()
                .map(|state| layered.dfa.is_accepting(state))
                .unwrap_or(false);
        prop_assert_eq!(verdict.accepted, expected);
        prop_assert_eq!(verdict.trace.last().map(|entry| entry.step_accepted), Some(verdict.accepted));
    }

    #[test]
    fn animation_ends_on_a_terminal_style((automaton, input) in builtin_run()) {
        let dfa = Registry::global().get(automaton);
        let verdict = simulate(dfa, &input);
        let steps = interpret(dfa, &verdict.trace);

        let last = steps.iter().rev().find_map(|step| match step {
            RenderStep::Paint { style, .. } => Some(*style),
            RenderStep::Pause(_) => None,
        });
        let expected = if verdict.accepted { Style::Confirmed } else { Style::Rejected };
        prop_assert_eq!(last, Some(expected));
    }
}
