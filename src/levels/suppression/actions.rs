//! Semantic action IDs for breathing-maze click targets.

// ── Movement pad ───────────────────────────────────────────────────────
pub const MOVE_UP: u16 = 10;
pub const MOVE_DOWN: u16 = 11;
pub const MOVE_LEFT: u16 = 12;
pub const MOVE_RIGHT: u16 = 13;

// ── Breath ─────────────────────────────────────────────────────────────
pub const BREATHE: u16 = 20;
