//! Semantic action IDs for reflection-choice click targets.

// ── Choices ────────────────────────────────────────────────────────────
pub const ACCEPT: u16 = 10;
pub const FIX: u16 = 11;
