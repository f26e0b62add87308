//! Reflection choices — pure game logic (no rendering / IO).

use crate::levels::run::LevelRun;

use super::state::{AcceptanceState, PROMPTS, STRESS_THRESHOLD};

/// Score for accepting a statement.
pub const ACCEPT_SCORE: f64 = 5.0;
/// Stress relief from accepting.
pub const ACCEPT_RELIEF: f64 = -11.0;
/// Score for trying to fix the statement.
pub const FIX_SCORE: f64 = 12.0;
/// Stress cost of fixing.
pub const FIX_STRAIN: f64 = 14.0;
/// Shown when fixing pushes the gauge over the threshold.
pub const OVERLOAD_MESSAGE: &str = "Стресс вышел за предел. Попробуй чаще выбирать принятие.";

// ── RNG (same LCG as the maze) ─────────────────────────────────────────

fn next_rng(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407)
}

fn rng_range(seed: &mut u64, max: u32) -> u32 {
    *seed = next_rng(*seed);
    ((*seed >> 33) % max as u64) as u32
}

pub fn new_state(seed: u64) -> AcceptanceState {
    let mut state = AcceptanceState {
        prompt_idx: 0,
        answered: 0,
        rng_seed: seed,
    };
    rotate_prompt(&mut state);
    state
}

/// Pick the next statement at random. Repeats are allowed.
pub fn rotate_prompt(state: &mut AcceptanceState) {
    state.prompt_idx = rng_range(&mut state.rng_seed, PROMPTS.len() as u32) as usize;
}

// ── Choices ────────────────────────────────────────────────────────────

/// Accepting relieves stress and scores a little.
pub fn accept(state: &mut AcceptanceState, run: &mut LevelRun) {
    if run.ended() {
        return;
    }
    run.add_stress(ACCEPT_RELIEF);
    run.add_score(ACCEPT_SCORE);
    state.answered += 1;
    rotate_prompt(state);
}

/// Fixing scores more but strains the gauge; crossing the threshold ends
/// the run in failure.
pub fn fix(state: &mut AcceptanceState, run: &mut LevelRun) {
    if run.ended() {
        return;
    }
    run.add_stress(FIX_STRAIN);
    run.add_score(FIX_SCORE);
    state.answered += 1;
    rotate_prompt(state);
    if run.stress() >= STRESS_THRESHOLD {
        run.finish(false, Some(OVERLOAD_MESSAGE));
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::levels::run::{ExpiryRule, RunConfig, STRESS_MAX};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_prompt_index_always_valid(seed in any::<u64>(), n in 0usize..100) {
            let mut state = new_state(seed);
            prop_assert!(state.prompt_idx < PROMPTS.len());
            for _ in 0..n {
                rotate_prompt(&mut state);
                prop_assert!(state.prompt_idx < PROMPTS.len());
            }
        }

        #[test]
        fn prop_gauge_stays_bounded_for_any_choice_sequence(
            seed in any::<u64>(),
            choices in prop::collection::vec(any::<bool>(), 0..80),
        ) {
            let mut state = new_state(seed);
            let mut run = LevelRun::new(RunConfig {
                start_stress: 38.0,
                expiry: ExpiryRule::StressBelow(STRESS_THRESHOLD),
                ..RunConfig::new(4)
            });
            for accept_it in choices {
                if accept_it {
                    accept(&mut state, &mut run);
                } else {
                    fix(&mut state, &mut run);
                }
                prop_assert!((0.0..=STRESS_MAX).contains(&run.stress()));
                if run.ended() {
                    // The only mid-run exit is the overload failure.
                    prop_assert!(run.stress() >= STRESS_THRESHOLD);
                    break;
                }
            }
        }
    }
}
