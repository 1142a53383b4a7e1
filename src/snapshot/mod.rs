//! Serializable records of validation runs.
//!
//! A [`Snapshot`] captures one run: which automaton, what input, and the full
//! verdict. It is the hand-off format for renderers living outside this
//! process, in JSON or compact binary form.

use crate::animation::{interpret, RenderStep};
use crate::core::{Halt, Verdict};
use crate::registry::{Automaton, Registry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// One recorded validation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the run was recorded
    pub recorded_at: DateTime<Utc>,

    pub automaton: Automaton,

    /// Input after whitespace stripping
    pub input: String,

    pub verdict: Verdict,
}

impl Snapshot {
    /// Record a finished run.
    pub fn record(automaton: Automaton, input: impl Into<String>, verdict: Verdict) -> Self {
        let snapshot = Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            recorded_at: Utc::now(),
            automaton,
            input: input.into(),
            verdict,
        };
        debug!(id = %snapshot.id, automaton = automaton.slug(), "recorded snapshot");
        snapshot
    }

    /// Rendering instructions for replaying this run.
    pub fn steps(&self, registry: &Registry) -> Vec<RenderStep> {
        interpret(registry.get(self.automaton), &self.verdict.trace)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let trace = &self.verdict.trace;
        let expected = match self.verdict.halt {
            Halt::Consumed => self.input.chars().count() + 1,
            Halt::UndefinedTransition { position, .. } => position + 1,
        };
        let Some(last) = trace.last().filter(|_| trace.len() == expected) else {
            return Err(SnapshotError::TraceLength {
                found: trace.len(),
                expected,
            });
        };

        if let Halt::UndefinedTransition { position, symbol } = self.verdict.halt {
            let actual = self.input.chars().nth(position);
            if actual != Some(symbol) {
                return Err(SnapshotError::HaltSymbol {
                    position,
                    symbol,
                    actual,
                });
            }
            if self.verdict.accepted {
                return Err(SnapshotError::AcceptedAfterHalt { position });
            }
        }

        if last.step_accepted != self.verdict.accepted {
            return Err(SnapshotError::Acceptance {
                accepted: self.verdict.accepted,
                last_step: last.step_accepted,
            });
        }

        let dfa = Registry::global().get(self.automaton);
        if let Some(entry) = trace.iter().find(|entry| !dfa.states().contains(&entry.state)) {
            return Err(SnapshotError::UnknownState {
                state: entry.state.clone(),
                automaton: self.automaton,
            });
        }

        Ok(())
    }
}
