//! Lane runner — pure game logic (no rendering / IO).

use crate::levels::run::{LevelRun, STRESS_MAX};
use crate::time::SECS_PER_TICK;

use super::state::{
    Irritant, IrritationState, FIELD_PX, LANES, SPAWN_INTERVAL_TICKS, SPEED_MAX, SPEED_MIN,
};

/// Score for neutralizing one irritant.
pub const NEUTRALIZE_SCORE: f64 = 14.0;
/// Stress for an irritant that slips past the bottom.
pub const MISS_STRESS: f64 = 7.0;
/// Shown when the gauge overflows mid-run.
pub const OVERLOAD_MESSAGE: &str = "Стресс переполнен. Попробуй другой ритм движения.";

// ── RNG (same LCG as the maze) ─────────────────────────────────────────

fn next_rng(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407)
}

fn rng_range(seed: &mut u64, max: u32) -> u32 {
    *seed = next_rng(*seed);
    ((*seed >> 33) % max as u64) as u32
}

// ── Tick ───────────────────────────────────────────────────────────────

/// Advance spawning and falling, charge misses, fail on overload.
pub fn tick(state: &mut IrritationState, run: &mut LevelRun, delta_ticks: u32) {
    for _ in 0..delta_ticks {
        if run.ended() {
            return;
        }
        step_one_tick(state, run);
    }
}

fn step_one_tick(state: &mut IrritationState, run: &mut LevelRun) {
    state.spawn_cooldown = state.spawn_cooldown.saturating_sub(1);
    if state.spawn_cooldown == 0 {
        spawn_irritant(state);
        state.spawn_cooldown = SPAWN_INTERVAL_TICKS;
    }

    let mut missed = 0u32;
    state.irritants.retain_mut(|item| {
        item.y += item.speed * SECS_PER_TICK;
        if item.y >= FIELD_PX {
            missed += 1;
            false
        } else {
            true
        }
    });

    for _ in 0..missed {
        run.add_stress(MISS_STRESS);
    }
    if run.stress() >= STRESS_MAX {
        run.finish(false, Some(OVERLOAD_MESSAGE));
    }
}

/// Spawn one irritant in a random lane at a random speed.
pub fn spawn_irritant(state: &mut IrritationState) {
    let lane = rng_range(&mut state.rng_seed, LANES as u32) as usize;
    let span = (SPEED_MAX - SPEED_MIN) as u32 + 1;
    let speed = SPEED_MIN + rng_range(&mut state.rng_seed, span) as f64;
    state.irritants.push(Irritant {
        lane,
        y: 0.0,
        speed,
    });
}

// ── Player actions ─────────────────────────────────────────────────────

/// Neutralize the lowest irritant in the lane. Returns whether anything
/// was there to remove.
pub fn neutralize_lane(state: &mut IrritationState, run: &mut LevelRun, lane: usize) -> bool {
    if run.ended() || lane >= LANES {
        return false;
    }
    let lowest = state
        .irritants
        .iter()
        .enumerate()
        .filter(|(_, item)| item.lane == lane)
        .max_by(|(_, a), (_, b)| a.y.total_cmp(&b.y))
        .map(|(i, _)| i);
    match lowest {
        Some(i) => {
            state.irritants.remove(i);
            run.add_score(NEUTRALIZE_SCORE);
            true
        }
        None => false,
    }
}

/// Shift the avatar one lane over. Cosmetic.
pub fn change_lane(state: &mut IrritationState, delta: i32) {
    let next = (state.player_lane as i32 + delta).clamp(0, LANES as i32 - 1);
    state.player_lane = next as usize;
}
