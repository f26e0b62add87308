//! Semantic action IDs for lane-runner click targets.

// ── Lanes ──────────────────────────────────────────────────────────────
pub const LANE_BASE: u16 = 10; // +lane 0..2
