//! Lane-runner game state.

/// Number of lanes.
pub const LANES: usize = 3;
/// Virtual field height in pixels; irritants travel from 0 to here.
pub const FIELD_PX: f64 = 640.0;
/// Ticks between spawns (700 ms at 10 ticks/sec).
pub const SPAWN_INTERVAL_TICKS: u32 = 7;
/// Slowest fall speed, px/s.
pub const SPEED_MIN: f64 = 190.0;
/// Fastest fall speed, px/s.
pub const SPEED_MAX: f64 = 300.0;

/// One falling irritant.
#[derive(Clone, Debug)]
pub struct Irritant {
    pub lane: usize,
    /// Distance travelled down the field, px.
    pub y: f64,
    /// Fall speed, px/s.
    pub speed: f64,
}

/// Lane-runner state.
pub struct IrritationState {
    pub irritants: Vec<Irritant>,
    /// Avatar lane. Cosmetic: neutralizing does not depend on it.
    pub player_lane: usize,
    /// Ticks until the next spawn.
    pub spawn_cooldown: u32,
    pub rng_seed: u64,
}

impl IrritationState {
    pub fn new(seed: u64) -> Self {
        Self {
            irritants: Vec::new(),
            player_lane: 1,
            spawn_cooldown: SPAWN_INTERVAL_TICKS,
            rng_seed: seed,
        }
    }
}
