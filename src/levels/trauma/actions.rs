//! Semantic action IDs for card-sorting click targets.

// ── Buckets ────────────────────────────────────────────────────────────
pub const SORT_BASE: u16 = 10; // +bucket 0..2 (Факт, Чувство, Мысль)
