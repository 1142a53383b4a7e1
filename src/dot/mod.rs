//! Graphviz export.
//!
//! Produces DOT source for an automaton, optionally with fill colours for the
//! states highlighted at some point of an animation. Layout and drawing are
//! left to Graphviz.

use crate::animation::Style;
use crate::core::{Dfa, StateId, SymbolSpec};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Fill colour used for a highlighted state.
pub fn fill_color(style: Style) -> &'static str {
    match style {
        Style::Neutral => "white",
        Style::Visited => "yellow",
        Style::Confirmed => "green",
        Style::Rejected => "red",
    }
}

/// Converts the automaton to the [dot](https://graphviz.org/docs/layouts/dot/)
/// language, laid out left to right.
///
/// Accepting states are drawn as double circles. A wildcard edge is labelled
/// with the whole alphabet joined by commas, e.g. `a,b`.
///
/// # Example
///
/// ```rust
/// use dfa_walk::dot::to_dot;
/// use dfa_walk::registry::{Automaton, Registry};
/// use std::collections::BTreeMap;
///
/// let dfa = Registry::global().get(Automaton::AStarB);
/// let dot = to_dot(dfa, &BTreeMap::new());
///
/// assert!(dot.starts_with("digraph dfa {"));
/// assert!(dot.contains("\tq1 -> q2 [label = \"b\"];"));
/// ```
pub fn to_dot(dfa: &Dfa, highlights: &BTreeMap<StateId, Style>) -> String {
    let mut dot = String::from("digraph dfa {\n\trankdir = LR;\n\n");

    for state in dfa.states() {
        let shape = if dfa.is_accepting(state) {
            "doublecircle"
        } else {
            "circle"
        };
        let fill = highlights
            .get(state)
            .map(|style| format!(", style = filled, fillcolor = {}", fill_color(*style)))
            .unwrap_or_default();
        writeln!(dot, "\t{} [shape = {shape}{fill}];", quote(state)).ok();
    }

    dot.push('\n');

    let wildcard_label = dfa
        .alphabet()
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(",");

    for (from, label, to) in dfa.edges() {
        let label = match label {
            SymbolSpec::Exact(symbol) => symbol.to_string(),
            SymbolSpec::Any => wildcard_label.clone(),
        };
        writeln!(
            dot,
            "\t{} -> {} [label = \"{}\"];",
            quote(from),
            quote(to),
            escape(&label)
        )
        .ok();
    }

    dot.push('}');
    dot
}

/// Identifiers made of ASCII letters, digits and underscores go bare.
fn quote(state: &StateId) -> String {
    let name = state.name();
    let bare = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if bare {
        name.to_string()
    } else {
        format!("\"{}\"", escape(name))
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
