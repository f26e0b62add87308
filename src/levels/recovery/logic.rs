//! Resource path — pure game logic (no rendering / IO).

use crate::levels::run::{LevelRun, STRESS_MAX};

use super::state::{
    FieldItem, Phase, RecoveryState, BAD_CHANCE, CHOICE_TICKS, COLLECT_TICKS, ITEM_LIFETIME_TICKS,
    MAX_NODES, SLOTS, SPAWN_INTERVAL_TICKS,
};

/// Score for picking a direction at a node.
pub const PICK_SCORE: f64 = 6.0;
/// Score for gathering a useful resource.
pub const GOOD_SCORE: f64 = 4.0;
/// Stress relief for gathering a useful resource.
pub const GOOD_RELIEF: f64 = -1.0;
/// Score charge for touching a hazard.
pub const HARM_SCORE: f64 = -8.0;
/// Stress spike for touching a hazard.
pub const HARM_STRESS: f64 = 14.0;
/// Shown when hazards overflow the gauge mid-event.
pub const OVERLOAD_MESSAGE: &str = "Слишком много урона от опасных объектов.";
/// Shown when the clock runs out before the path is walked.
pub const EXPIRY_MESSAGE: &str = "Нужно пройти все 5 узлов и не переполнить стресс.";

// ── RNG (same LCG as the maze) ─────────────────────────────────────────

fn next_rng(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407)
}

fn rng_range(seed: &mut u64, max: u32) -> u32 {
    *seed = next_rng(*seed);
    ((*seed >> 33) % max as u64) as u32
}

fn rng_chance(seed: &mut u64, chance: f64) -> bool {
    (rng_range(seed, 10_000) as f64) < chance * 10_000.0
}

// ── Tick ───────────────────────────────────────────────────────────────

/// Advance the node loop: countdowns, spawning, object decay, expiry.
pub fn tick(state: &mut RecoveryState, run: &mut LevelRun, delta_ticks: u32) {
    if run.ended() {
        return;
    }
    // Deferred expiry: the path must be complete with the gauge intact.
    if run.expired() {
        let walked = state.node_index >= MAX_NODES && run.stress() < STRESS_MAX;
        run.finish(walked, Some(EXPIRY_MESSAGE));
        return;
    }
    for _ in 0..delta_ticks {
        if run.ended() {
            return;
        }
        step_one_tick(state, run);
    }
}

fn step_one_tick(state: &mut RecoveryState, run: &mut LevelRun) {
    match state.phase {
        Phase::Choice => {
            state.choice_ticks_left = state.choice_ticks_left.saturating_sub(1);
            if state.choice_ticks_left == 0 {
                // Hesitation picks the first option.
                pick_option(state, run, 0);
            }
        }
        Phase::Collect => {
            state.spawn_cooldown = state.spawn_cooldown.saturating_sub(1);
            if state.spawn_cooldown == 0 {
                spawn_item(state);
                state.spawn_cooldown = SPAWN_INTERVAL_TICKS;
            }
            for item in &mut state.items {
                item.ttl = item.ttl.saturating_sub(1);
            }
            state.items.retain(|item| item.ttl > 0);

            if run.stress() >= STRESS_MAX {
                run.finish(false, Some(OVERLOAD_MESSAGE));
                return;
            }
            state.collect_ticks_left = state.collect_ticks_left.saturating_sub(1);
            if state.collect_ticks_left == 0 {
                finish_collect(state, run);
            }
        }
    }
}

/// Spawn one object into a random free slot; a full field skips the spawn.
pub fn spawn_item(state: &mut RecoveryState) {
    let free: Vec<usize> = (0..SLOTS)
        .filter(|slot| state.item_in_slot(*slot).is_none())
        .collect();
    if free.is_empty() {
        return;
    }
    let slot = free[rng_range(&mut state.rng_seed, free.len() as u32) as usize];
    let harmful = rng_chance(&mut state.rng_seed, state.bad_chance);
    state.items.push(FieldItem {
        slot,
        harmful,
        ttl: ITEM_LIFETIME_TICKS,
    });
}

// ── Player actions ─────────────────────────────────────────────────────

/// Pick a direction at the current node and start its collect event.
/// Returns whether a pick happened.
pub fn pick_option(state: &mut RecoveryState, run: &mut LevelRun, option_idx: usize) -> bool {
    if run.ended() || state.phase != Phase::Choice || option_idx >= 3 {
        return false;
    }
    let option = state.options()[option_idx];
    state.picked.push(option);
    state.bad_chance = BAD_CHANCE[option_idx];
    run.add_score(PICK_SCORE);

    state.phase = Phase::Collect;
    state.current_option = Some(option);
    state.collect_ticks_left = COLLECT_TICKS;
    state.spawn_cooldown = SPAWN_INTERVAL_TICKS;
    run.set_timer_paused(false);
    true
}

/// Gather the object in `slot`. Useful resources score and soothe; hazards
/// cost score and spike stress. Returns whether anything was gathered.
pub fn collect_item(state: &mut RecoveryState, run: &mut LevelRun, slot: usize) -> bool {
    if run.ended() || state.phase != Phase::Collect {
        return false;
    }
    let idx = match state.items.iter().position(|item| item.slot == slot) {
        Some(idx) => idx,
        None => return false,
    };
    let item = state.items.remove(idx);
    if item.harmful {
        run.add_score(HARM_SCORE);
        run.add_stress(HARM_STRESS);
    } else {
        run.add_score(GOOD_SCORE);
        run.add_stress(GOOD_RELIEF);
    }
    true
}

// ── Node transitions ───────────────────────────────────────────────────

fn finish_collect(state: &mut RecoveryState, run: &mut LevelRun) {
    state.items.clear();
    state.current_option = None;
    state.node_index += 1;
    enter_choice(state, run);
}

fn enter_choice(state: &mut RecoveryState, run: &mut LevelRun) {
    run.set_timer_paused(true);
    if state.node_index >= MAX_NODES {
        run.finish(true, None);
        return;
    }
    state.phase = Phase::Choice;
    state.choice_ticks_left = CHOICE_TICKS;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::run::{ExpiryRule, RunConfig, RunOutcome};
    use crate::time::TICKS_PER_SEC;

    use super::super::state::CHOICE_SETS;

    fn test_run() -> LevelRun {
        let mut run = LevelRun::new(RunConfig {
            start_stress: 18.0,
            show_stress: true,
            expiry: ExpiryRule::Defer,
            ..RunConfig::new(5)
        });
        run.set_timer_paused(true);
        run
    }

    /// State parked mid-collect with spawning pushed out of the way.
    fn collecting_state(seed: u64) -> RecoveryState {
        let mut state = RecoveryState::new(seed);
        state.phase = Phase::Collect;
        state.collect_ticks_left = 10 * COLLECT_TICKS;
        state.spawn_cooldown = u32::MAX;
        state
    }

    #[test]
    fn pick_scores_and_opens_the_collect_event() {
        let mut state = RecoveryState::new(3);
        let mut run = test_run();
        assert!(pick_option(&mut state, &mut run, 1));
        assert_eq!(state.phase, Phase::Collect);
        assert_eq!(state.current_option, Some("Точка контакта"));
        assert_eq!(state.bad_chance, BAD_CHANCE[1]);
        assert_eq!(run.score(), PICK_SCORE);
        assert!(!run.timer_paused());
    }

    #[test]
    fn pick_outside_the_choice_phase_is_rejected() {
        let mut state = RecoveryState::new(3);
        let mut run = test_run();
        assert!(pick_option(&mut state, &mut run, 0));
        assert!(!pick_option(&mut state, &mut run, 0));
        assert_eq!(state.picked.len(), 1);
    }

    #[test]
    fn hesitation_auto_picks_the_first_option() {
        let mut state = RecoveryState::new(3);
        let mut run = test_run();
        tick(&mut state, &mut run, CHOICE_TICKS);
        assert_eq!(state.phase, Phase::Collect);
        assert_eq!(state.picked, vec!["Точка тишины"]);
    }

    #[test]
    fn collect_event_times_out_into_the_next_node() {
        let mut state = RecoveryState::new(3);
        let mut run = test_run();
        pick_option(&mut state, &mut run, 0);
        tick(&mut state, &mut run, COLLECT_TICKS);
        assert_eq!(state.phase, Phase::Choice);
        assert_eq!(state.node_index, 1);
        assert!(state.items.is_empty());
        assert!(run.timer_paused());
        assert_eq!(state.options(), CHOICE_SETS[1]);
    }

    #[test]
    fn objects_fade_after_their_lifetime() {
        let mut state = collecting_state(3);
        let mut run = test_run();
        state.items.push(FieldItem {
            slot: 4,
            harmful: false,
            ttl: 5,
        });
        tick(&mut state, &mut run, 4);
        assert!(state.item_in_slot(4).is_some());
        tick(&mut state, &mut run, 1);
        assert!(state.item_in_slot(4).is_none());
    }

    #[test]
    fn gathering_a_resource_scores_and_soothes() {
        let mut state = collecting_state(3);
        let mut run = test_run();
        state.items.push(FieldItem {
            slot: 2,
            harmful: false,
            ttl: ITEM_LIFETIME_TICKS,
        });
        assert!(collect_item(&mut state, &mut run, 2));
        assert_eq!(run.score(), GOOD_SCORE);
        assert_eq!(run.stress(), 17.0);
        assert!(state.items.is_empty());
    }

    #[test]
    fn touching_a_hazard_costs_and_strains() {
        let mut state = collecting_state(3);
        let mut run = test_run();
        run.add_score(PICK_SCORE);
        state.items.push(FieldItem {
            slot: 0,
            harmful: true,
            ttl: ITEM_LIFETIME_TICKS,
        });
        assert!(collect_item(&mut state, &mut run, 0));
        // 6 - 8 bottoms out at zero.
        assert_eq!(run.score(), 0.0);
        assert_eq!(run.stress(), 32.0);
    }

    #[test]
    fn empty_slot_gathers_nothing() {
        let mut state = collecting_state(3);
        let mut run = test_run();
        assert!(!collect_item(&mut state, &mut run, 7));
        assert_eq!(run.score(), 0.0);
    }

    #[test]
    fn hazard_overflow_fails_the_event() {
        let mut state = collecting_state(3);
        let mut run = test_run();
        for _ in 0..6 {
            state.items.push(FieldItem {
                slot: state.items.len(),
                harmful: true,
                ttl: ITEM_LIFETIME_TICKS,
            });
        }
        for slot in 0..6 {
            collect_item(&mut state, &mut run, slot);
        }
        // 18 + 6 * 14 caps at the gauge limit; the next tick notices.
        tick(&mut state, &mut run, 1);
        assert_eq!(
            run.outcome(),
            Some(&RunOutcome::Failure {
                message: OVERLOAD_MESSAGE.to_string()
            })
        );
    }

    #[test]
    fn five_nodes_walk_the_whole_path() {
        let mut state = RecoveryState::new(9);
        let mut run = test_run();
        for _ in 0..MAX_NODES {
            assert!(pick_option(&mut state, &mut run, 0));
            tick(&mut state, &mut run, COLLECT_TICKS);
        }
        assert_eq!(run.outcome(), Some(&RunOutcome::Success));
        assert_eq!(state.picked.len(), MAX_NODES);
    }

    #[test]
    fn expiry_before_the_last_node_fails() {
        let mut state = RecoveryState::new(9);
        let mut run = test_run();
        pick_option(&mut state, &mut run, 0);
        run.tick(TICKS_PER_SEC * 60);
        assert!(run.expired());
        tick(&mut state, &mut run, 1);
        assert_eq!(
            run.outcome(),
            Some(&RunOutcome::Failure {
                message: EXPIRY_MESSAGE.to_string()
            })
        );
    }

    #[test]
    fn full_field_skips_the_spawn() {
        let mut state = collecting_state(3);
        state.bad_chance = BAD_CHANCE[0];
        for slot in 0..SLOTS {
            state.items.push(FieldItem {
                slot,
                harmful: false,
                ttl: ITEM_LIFETIME_TICKS,
            });
        }
        spawn_item(&mut state);
        assert_eq!(state.items.len(), SLOTS);
    }
}
