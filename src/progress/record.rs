//! The persisted progress record and its decode/normalize rules.
//!
//! The wire shape is a single flat JSON object with camelCase keys (see
//! [`ProgressRecord`]); every field falls back to its default when missing
//! so older or hand-edited payloads still load.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::content::STAGE_MAX;

/// Snapshot of one first-time level completion: which shadow feature was
/// removed and which human feature was gained. Both are `None` once the
/// corresponding pool is exhausted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformationEvent {
    pub level: u8,
    pub removed: Option<String>,
    pub gained: Option<String>,
}

/// The sole persisted entity. Mutated only through
/// [`complete_level`](crate::progress::complete_level) and reset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressRecord {
    /// Completed level ids, sorted ascending, each at most once.
    pub completed_levels: Vec<u8>,
    /// Best score ever per level, keyed by the level id as a string.
    pub level_scores: BTreeMap<String, u32>,
    /// Always the sum of `level_scores` values after any mutation.
    pub total_score: u32,
    /// Shadow features removed so far, `0..=5`.
    pub devil_removed: u8,
    /// Human features gained so far, `0..=5`.
    pub human_gained: u8,
    /// Append-only transformation history, one entry per first clear.
    pub transforms: Vec<TransformationEvent>,
}

impl ProgressRecord {
    pub fn is_completed(&self, level: u8) -> bool {
        self.completed_levels.contains(&level)
    }

    pub fn best_score(&self, level: u8) -> u32 {
        self.level_scores
            .get(&level.to_string())
            .copied()
            .unwrap_or(0)
    }

    /// Repair invariants after a decode: completed list sorted and unique,
    /// counters inside `0..=5`. Stored scores and totals are kept as-is.
    pub fn normalize(&mut self) {
        self.completed_levels.sort_unstable();
        self.completed_levels.dedup();
        self.devil_removed = self.devil_removed.min(STAGE_MAX);
        self.human_gained = self.human_gained.min(STAGE_MAX);
    }
}
