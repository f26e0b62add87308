//! Fixed-timestep clock using an accumulator pattern.
//!
//! The browser draw loop fires at ~60fps with a variable delta. GameTime
//! folds those frames into discrete ticks at [`TICKS_PER_SEC`], so level
//! timers and spawn cadences stay deterministic and testable.

/// Tick rate shared by every screen and level.
pub const TICKS_PER_SEC: u32 = 10;

/// Seconds advanced by one tick.
pub const SECS_PER_TICK: f64 = 1.0 / TICKS_PER_SEC as f64;

pub struct GameTime {
    /// Milliseconds per tick (100ms at 10 ticks/sec)
    ms_per_tick: f64,
    /// Milliseconds received but not yet consumed as ticks
    accumulator: f64,
    /// Total elapsed ticks since creation
    pub total_ticks: u64,
    /// Timestamp of the last update (ms), None until the first frame
    last_timestamp: Option<f64>,
}

impl GameTime {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec as f64,
            accumulator: 0.0,
            total_ticks: 0,
            last_timestamp: None,
        }
    }

    /// Feed a wall-clock timestamp (from `performance.now()`) and get back
    /// the number of whole ticks to process this frame.
    ///
    /// Deltas are clamped at 500ms so a backgrounded tab does not dump a
    /// burst of catch-up ticks on return.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, 500.0),
            None => 0.0, // First frame: no delta
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        self.total_ticks += ticks as u64;
        ticks
    }
}
