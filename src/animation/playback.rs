//! Paced replay of rendering instructions.

use super::{Pace, RenderStep, Style};
use crate::core::StateId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::BufRead;
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::info;

/// Receives paint instructions; the crate itself never draws.
pub trait Renderer {
    fn paint(&mut self, state: &StateId, style: Style);
}

/// Performs pauses between instructions.
pub trait Pacer {
    /// Wait for `duration`, returning early if `cancel` fires.
    fn pause(&mut self, duration: Duration, cancel: &Cancellation);
}

/// Pacer that blocks the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration, cancel: &Cancellation) {
        cancel.wait(duration);
    }
}

/// Timing of playback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Pause before each trace entry.
    pub step_delay_ms: u64,
    /// Pause between a transient highlight and its revert.
    pub blink_delay_ms: u64,
    /// Apply instructions back to back.
    pub skip_delays: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 1000,
            blink_delay_ms: 500,
            skip_delays: false,
        }
    }
}

impl PlaybackConfig {
    /// Config with every pause skipped.
    pub fn instant() -> Self {
        Self {
            skip_delays: true,
            ..Self::default()
        }
    }

    pub fn delay(&self, pace: Pace) -> Duration {
        match pace {
            Pace::Step => Duration::from_millis(self.step_delay_ms),
            Pace::Blink => Duration::from_millis(self.blink_delay_ms),
        }
    }
}

/// Shared cancellation flag for a playback in progress.
///
/// Clones share the same flag, so one can be handed to another thread.
#[derive(Clone, Debug, Default)]
pub struct Cancellation {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl Cancellation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        let (flag, signal) = &*self.inner;
        *flag.lock().unwrap_or_else(PoisonError::into_inner) = true;
        signal.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.inner.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Block for up to `duration`; returns `true` if cancelled meanwhile.
    pub fn wait(&self, duration: Duration) -> bool {
        let (flag, signal) = &*self.inner;
        let guard = flag.lock().unwrap_or_else(PoisonError::into_inner);
        let (guard, _) = signal
            .wait_timeout_while(guard, duration, |cancelled| !*cancelled)
            .unwrap_or_else(PoisonError::into_inner);
        *guard
    }
}

/// Cancel `cancel` as soon as `reader` yields a line.
///
/// End of input or a read error leaves the playback running. The CLI feeds
/// stdin here so pressing Enter stops the animation.
pub fn cancel_on_line<R>(mut reader: R, cancel: Cancellation) -> JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        let mut line = String::new();
        if matches!(reader.read_line(&mut line), Ok(read) if read > 0) {
            info!("cancellation requested");
            cancel.cancel();
        }
    })
}

/// How a playback ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PlaybackOutcome {
    /// Every instruction was applied.
    Completed { applied: usize },
    /// Stopped before instruction number `applied`.
    Cancelled { applied: usize },
}

/// Replay `steps` against `renderer`, pausing through `pacer`.
///
/// Cancellation is checked before every instruction; a pause interrupted by
/// cancellation ends the playback at the next check.
pub fn play<R, P>(
    steps: &[RenderStep],
    renderer: &mut R,
    pacer: &mut P,
    config: &PlaybackConfig,
    cancel: &Cancellation,
) -> PlaybackOutcome
where
    R: Renderer + ?Sized,
    P: Pacer + ?Sized,
{
    info!(steps = steps.len(), skip_delays = config.skip_delays, "playback started");

    for (applied, step) in steps.iter().enumerate() {
        if cancel.is_cancelled() {
            info!(applied, "playback cancelled");
            return PlaybackOutcome::Cancelled { applied };
        }

        match step {
            RenderStep::Pause(pace) => {
                if !config.skip_delays {
                    pacer.pause(config.delay(*pace), cancel);
                }
            }
            RenderStep::Paint { state, style } => renderer.paint(state, *style),
        }
    }

    info!(applied = steps.len(), "playback finished");
    PlaybackOutcome::Completed {
        applied: steps.len(),
    }
}

/// Renderer that keeps the current style of every painted state.
///
/// Feeding its contents to [`to_dot`](crate::dot::to_dot) gives the graph as it
/// looks at that moment of the animation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Highlights {
    styles: BTreeMap<StateId, Style>,
}

impl Highlights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style_of(&self, state: &StateId) -> Option<Style> {
        self.styles.get(state).copied()
    }

    pub fn as_map(&self) -> &BTreeMap<StateId, Style> {
        &self.styles
    }

    pub fn clear(&mut self) {
        self.styles.clear();
    }
}

impl Renderer for Highlights {
    fn paint(&mut self, state: &StateId, style: Style) {
        self.styles.insert(state.clone(), style);
    }
}
