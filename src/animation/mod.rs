//! Turning a trace into rendering instructions.
//!
//! [`interpret`] is pure: it maps a finished trace to an ordered list of
//! [`RenderStep`]s. [`playback`] replays those steps against a renderer with
//! pacing. The verdict is always computed before any of this starts, so
//! cancelling or skipping playback never changes the result.

pub mod playback;

pub use playback::{
    cancel_on_line, play, Cancellation, Highlights, Pacer, PlaybackConfig, PlaybackOutcome, Renderer,
    ThreadPacer,
};

use crate::core::{Dfa, StateId, TraceEntry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual style a renderer applies to a state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Default look.
    Neutral,
    /// In transit; reverted to neutral right after the blink.
    Visited,
    /// Valid step on an accepting state; stays highlighted.
    Confirmed,
    /// Step without a transition, or a non-accepting end; stays highlighted.
    Rejected,
}

impl Style {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Visited => "visited",
            Self::Confirmed => "confirmed",
            Self::Rejected => "rejected",
        }
    }

    /// Whether the style stays on screen once painted.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Rejected)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of pause between instructions.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Pace {
    /// Before each trace entry.
    Step,
    /// Between a transient highlight and its revert.
    Blink,
}

/// One instruction for the rendering collaborator.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum RenderStep {
    Pause(Pace),
    Paint { state: StateId, style: Style },
}

impl RenderStep {
    fn paint(state: &StateId, style: Style) -> Self {
        Self::Paint {
            state: state.clone(),
            style,
        }
    }
}

/// Map a trace to rendering instructions.
///
/// Each entry is preceded by a step pause, then:
/// - a valid step on an accepting state is painted `Confirmed`;
/// - an invalid step is painted `Rejected` and ends the animation;
/// - any other state blinks: `Visited`, blink pause, `Neutral`.
///
/// # Example
///
/// ```rust
/// use dfa_walk::animation::{interpret, Pace, RenderStep, Style};
/// use dfa_walk::registry::{Automaton, Registry};
/// use dfa_walk::simulator::simulate;
///
/// let dfa = Registry::global().get(Automaton::AOrB);
/// let verdict = simulate(dfa, "a");
/// let steps = interpret(dfa, &verdict.trace);
///
/// assert_eq!(
///     steps,
///     vec![
///         RenderStep::Pause(Pace::Step),
///         RenderStep::Paint { state: "q1".into(), style: Style::Visited },
///         RenderStep::Pause(Pace::Blink),
///         RenderStep::Paint { state: "q1".into(), style: Style::Neutral },
///         RenderStep::Pause(Pace::Step),
///         RenderStep::Paint { state: "q2".into(), style: Style::Confirmed },
///     ]
/// );
/// ```
pub fn interpret(dfa: &Dfa, trace: &[TraceEntry]) -> Vec<RenderStep> {
    let mut steps = Vec::with_capacity(trace.len() * 4);

    for entry in trace {
        steps.push(RenderStep::Pause(Pace::Step));

        if entry.step_accepted && dfa.is_accepting(&entry.state) {
            steps.push(RenderStep::paint(&entry.state, Style::Confirmed));
        } else if !entry.step_accepted {
            steps.push(RenderStep::paint(&entry.state, Style::Rejected));
            break;
        } else {
            steps.push(RenderStep::paint(&entry.state, Style::Visited));
            steps.push(RenderStep::Pause(Pace::Blink));
            steps.push(RenderStep::paint(&entry.state, Style::Neutral));
        }
    }

    steps
}
