//! The drag/resize decision table.
//!
//! Policy is configuration, not store behavior: the stores only supply
//! [`conflicts_same_day`] as a query primitive, and the gesture-handling
//! layer decides what to do with the answer. Nothing in this crate blocks,
//! prompts, or reschedules.
//!
//! [`conflicts_same_day`]: crate::EventStore::conflicts_same_day

use serde::{Deserialize, Serialize};

/// When a move/resize gesture becomes a store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommitPolicy {
    /// Commit immediately on gesture release.
    #[default]
    Always,
    /// Hold the mutation pending until the user confirms.
    ConfirmThenCommit,
}

impl CommitPolicy {
    /// `true` if a confirmation step must happen between the gesture and
    /// the store call.
    pub fn requires_confirmation(self) -> bool {
        matches!(self, CommitPolicy::ConfirmThenCommit)
    }
}

/// What the caller does with detected conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictBehavior {
    /// Ignore conflicts entirely.
    Allow,
    /// Commit, then surface the conflicts to the user. Never blocks.
    #[default]
    Inform,
    /// Reserved for automatic rescheduling. Accepted in configuration but
    /// intentionally given no semantics here.
    AutoShift,
}

/// Aggregate policy handed to the gesture-handling layer at composition
/// time. Deserializes from kebab-case wire names (`confirm-then-commit`,
/// `auto-shift`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SchedulingPolicy {
    #[serde(default)]
    pub commit: CommitPolicy,
    #[serde(default)]
    pub conflicts: ConflictBehavior,
}
