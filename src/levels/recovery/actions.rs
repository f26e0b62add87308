//! Semantic action IDs for resource-path click targets.

// ── Node choice ────────────────────────────────────────────────────────
pub const CHOICE_BASE: u16 = 10; // +option 0..2

// ── Field objects ──────────────────────────────────────────────────────
pub const ITEM_BASE: u16 = 20; // +slot 0..8, keyed 1-9
