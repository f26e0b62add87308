//! Completion rules on top of the stored progress record.

use crate::content::{DEVIL_FEATURES, HUMAN_FEATURES, LEVEL_META, STAGE_MAX};

use super::record::{ProgressRecord, TransformationEvent};
use super::store::ProgressStore;

/// Level 1 is always open, every other level needs its predecessor cleared.
pub fn is_level_unlocked(record: &ProgressRecord, level: u8) -> bool {
    if level <= 1 {
        return true;
    }
    record.is_completed(level - 1)
}

/// True once every listed level has been cleared at least once.
pub fn is_game_completed(record: &ProgressRecord) -> bool {
    LEVEL_META.iter().all(|meta| record.is_completed(meta.id))
}

#[derive(Debug)]
pub struct LevelCompleteResult {
    pub record: ProgressRecord,
    pub first_clear: bool,
    pub transformation: TransformationEvent,
}

/// Applies a finished run to the stored record and persists the result.
///
/// Scores are floored and clamped at zero, a level's best only ever grows,
/// and the totals are recomputed as the full sum of bests. On first clear
/// the shadow/human counters each advance by one (capped at the pool size)
/// and the transformation is appended to the log; repeat clears update
/// scores only.
pub fn complete_level(store: &mut ProgressStore, level: u8, raw_score: f64) -> LevelCompleteResult {
    let mut record = store.load();

    let earned = sanitize_score(raw_score);
    let best = record.best_score(level).max(earned);
    record.level_scores.insert(level.to_string(), best);
    record.total_score = record.level_scores.values().sum();

    let first_clear = !record.is_completed(level);
    let mut transformation = TransformationEvent {
        level,
        removed: None,
        gained: None,
    };
    if first_clear {
        record.completed_levels.push(level);
        record.completed_levels.sort_unstable();
        transformation.removed = DEVIL_FEATURES
            .get(record.devil_removed as usize)
            .map(|s| s.to_string());
        transformation.gained = HUMAN_FEATURES
            .get(record.human_gained as usize)
            .map(|s| s.to_string());
        record.devil_removed = (record.devil_removed + 1).min(STAGE_MAX);
        record.human_gained = (record.human_gained + 1).min(STAGE_MAX);
        record.transforms.push(transformation.clone());
    }

    store.save(&record);
    LevelCompleteResult {
        record,
        first_clear,
        transformation,
    }
}

pub(crate) fn sanitize_score(raw: f64) -> u32 {
    // `as` saturates, so NaN and out-of-range values stay safe.
    raw.floor().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_clear_records_everything() {
        let mut store = ProgressStore::in_memory();
        let result = complete_level(&mut store, 1, 37.0);

        assert!(result.first_clear);
        assert_eq!(result.record.completed_levels, vec![1]);
        assert_eq!(result.record.best_score(1), 37);
        assert_eq!(result.record.total_score, 37);
        assert_eq!(result.record.devil_removed, 1);
        assert_eq!(result.record.human_gained, 1);
        assert_eq!(result.transformation.level, 1);
        assert_eq!(result.transformation.removed.as_deref(), Some("Гордыня"));
        assert_eq!(result.transformation.gained.as_deref(), Some("Принятие"));
        assert_eq!(result.record.transforms.len(), 1);
    }

    #[test]
    fn repeat_clear_keeps_counters_and_log() {
        let mut store = ProgressStore::in_memory();
        complete_level(&mut store, 1, 37.0);
        let result = complete_level(&mut store, 1, 50.0);

        assert!(!result.first_clear);
        assert_eq!(result.record.best_score(1), 50);
        assert_eq!(result.record.total_score, 50);
        assert_eq!(result.record.devil_removed, 1);
        assert_eq!(result.record.human_gained, 1);
        assert_eq!(result.record.transforms.len(), 1);
        assert_eq!(result.transformation.removed, None);
        assert_eq!(result.transformation.gained, None);
    }

    #[test]
    fn lower_repeat_score_does_not_shrink_best() {
        let mut store = ProgressStore::in_memory();
        complete_level(&mut store, 2, 60.0);
        let result = complete_level(&mut store, 2, 20.0);
        assert_eq!(result.record.best_score(2), 60);
        assert_eq!(result.record.total_score, 60);
    }

    #[test]
    fn score_is_floored_and_clamped() {
        let mut store = ProgressStore::in_memory();
        let result = complete_level(&mut store, 1, 37.9);
        assert_eq!(result.record.best_score(1), 37);

        let result = complete_level(&mut store, 2, -5.0);
        assert_eq!(result.record.best_score(2), 0);
        // The zero entry is still written.
        assert!(result.record.level_scores.contains_key("2"));
    }

    #[test]
    fn total_is_the_sum_over_all_levels() {
        let mut store = ProgressStore::in_memory();
        complete_level(&mut store, 1, 40.0);
        let result = complete_level(&mut store, 2, 25.0);
        assert_eq!(result.record.total_score, 65);
    }

    #[test]
    fn exhausted_pools_yield_empty_transformation() {
        let mut store = ProgressStore::in_memory();
        let mut seeded = ProgressRecord::default();
        seeded.devil_removed = STAGE_MAX;
        seeded.human_gained = STAGE_MAX;
        store.save(&seeded);

        let result = complete_level(&mut store, 3, 10.0);
        assert!(result.first_clear);
        assert_eq!(result.transformation.removed, None);
        assert_eq!(result.transformation.gained, None);
        // Still logged, and the counters stay capped.
        assert_eq!(result.record.transforms.len(), 1);
        assert_eq!(result.record.devil_removed, STAGE_MAX);
        assert_eq!(result.record.human_gained, STAGE_MAX);
    }

    #[test]
    fn result_matches_what_was_persisted() {
        let mut store = ProgressStore::in_memory();
        let result = complete_level(&mut store, 1, 12.0);
        assert_eq!(store.load(), result.record);
    }

    #[test]
    fn out_of_order_completion_is_recorded_sorted() {
        let mut store = ProgressStore::in_memory();
        complete_level(&mut store, 3, 5.0);
        let result = complete_level(&mut store, 1, 5.0);
        assert_eq!(result.record.completed_levels, vec![1, 3]);
    }

    #[test]
    fn unlock_chain_follows_predecessors() {
        let record = ProgressRecord::default();
        assert!(is_level_unlocked(&record, 1));
        assert!(!is_level_unlocked(&record, 2));

        let mut store = ProgressStore::in_memory();
        let record = complete_level(&mut store, 1, 10.0).record;
        assert!(is_level_unlocked(&record, 2));
        assert!(!is_level_unlocked(&record, 3));
    }

    #[test]
    fn completing_a_level_does_not_unlock_unrelated_ones() {
        let mut store = ProgressStore::in_memory();
        let record = complete_level(&mut store, 3, 10.0).record;
        assert!(is_level_unlocked(&record, 4));
        assert!(!is_level_unlocked(&record, 2));
    }

    #[test]
    fn game_completed_needs_all_levels() {
        let mut store = ProgressStore::in_memory();
        for level in 1..=4u8 {
            complete_level(&mut store, level, 10.0);
        }
        assert!(!is_game_completed(&store.load()));
        complete_level(&mut store, 5, 10.0);
        assert!(is_game_completed(&store.load()));
    }
}
