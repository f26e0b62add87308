//! Reflection-choice game state.

/// Stress ceiling the run must stay under.
pub const STRESS_THRESHOLD: f64 = 85.0;

/// Inner statements the mirror brings up.
pub const PROMPTS: [&str; 7] = [
    "Я вижу страх перед чужой оценкой.",
    "Я снова пытаюсь быть идеальным.",
    "Мне трудно остановить внутренний спор.",
    "Я устал доказывать, что достоин тепла.",
    "Во мне поднимается волна стыда.",
    "Я хочу всё контролировать, чтобы не болело.",
    "Внутри много уязвимости и мало опоры.",
];

/// Reflection-choice state.
pub struct AcceptanceState {
    /// Index into [`PROMPTS`] of the current statement.
    pub prompt_idx: usize,
    /// How many choices have been made this run.
    pub answered: u32,
    pub rng_seed: u64,
}
