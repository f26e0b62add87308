//! Card sorting — pure game logic (no rendering / IO).

use crate::levels::run::LevelRun;

use super::state::{CardKind, TraumaState, DECK};

/// Score for a correctly sorted card.
pub const CORRECT_SCORE: f64 = 16.0;
/// Consolation score for a wrong bucket.
pub const WRONG_SCORE: f64 = 2.0;

// ── RNG (same LCG as the maze) ─────────────────────────────────────────

fn next_rng(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407)
}

fn rng_range(seed: &mut u64, max: u32) -> u32 {
    *seed = next_rng(*seed);
    ((*seed >> 33) % max as u64) as u32
}

// ── Deck ───────────────────────────────────────────────────────────────

/// Fisher-Yates over the whole nine-card template.
fn shuffled_deck(rng_seed: &mut u64) -> Vec<usize> {
    let mut deck: Vec<usize> = (0..DECK.len()).collect();
    for i in (1..deck.len()).rev() {
        let j = rng_range(rng_seed, (i + 1) as u32) as usize;
        deck.swap(i, j);
    }
    deck
}

pub fn new_state(seed: u64) -> TraumaState {
    let mut rng_seed = seed;
    let deck = shuffled_deck(&mut rng_seed);
    TraumaState {
        deck,
        sorted_count: 0,
        correct_count: 0,
        rng_seed,
    }
}

/// Index into [`DECK`] of the card on top, if any.
pub fn top_card(state: &TraumaState) -> Option<usize> {
    state.deck.last().copied()
}

// ── Sorting ────────────────────────────────────────────────────────────

/// Drop the top card into a bucket. A correct bucket pays full, a wrong
/// one pays the consolation score; either way the next card comes up. An
/// emptied deck reshuffles the full template. Returns whether the bucket
/// was correct.
pub fn sort_top_card(state: &mut TraumaState, run: &mut LevelRun, bucket: CardKind) -> bool {
    if run.ended() {
        return false;
    }
    let card_idx = match state.deck.pop() {
        Some(i) => i,
        None => return false,
    };

    let correct = DECK[card_idx].kind == bucket;
    state.sorted_count += 1;
    if correct {
        state.correct_count += 1;
        run.add_score(CORRECT_SCORE);
    } else {
        run.add_score(WRONG_SCORE);
    }

    if state.deck.is_empty() {
        state.deck = shuffled_deck(&mut state.rng_seed);
    }
    correct
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::run::RunConfig;

    #[test]
    fn new_deck_holds_the_full_template() {
        let state = new_state(42);
        let mut indices = state.deck.clone();
        indices.sort_unstable();
        assert_eq!(indices, (0..DECK.len()).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_shuffles_the_same_way() {
        assert_eq!(new_state(9).deck, new_state(9).deck);
    }

    #[test]
    fn correct_bucket_pays_full() {
        let mut state = new_state(1);
        let mut run = LevelRun::new(RunConfig::new(3));
        state.deck = vec![0]; // "В 9:00 сообщение..." is a fact
        assert!(sort_top_card(&mut state, &mut run, CardKind::Fact));
        assert_eq!(run.score(), CORRECT_SCORE);
        assert_eq!(state.correct_count, 1);
    }

    #[test]
    fn wrong_bucket_still_advances() {
        let mut state = new_state(1);
        let mut run = LevelRun::new(RunConfig::new(3));
        state.deck = vec![1]; // a feeling card
        assert!(!sort_top_card(&mut state, &mut run, CardKind::Fact));
        assert_eq!(run.score(), WRONG_SCORE);
        assert_eq!(state.sorted_count, 1);
        assert_eq!(state.correct_count, 0);
    }

    #[test]
    fn emptied_deck_reshuffles_the_template() {
        let mut state = new_state(5);
        let mut run = LevelRun::new(RunConfig::new(3));
        for _ in 0..DECK.len() {
            sort_top_card(&mut state, &mut run, CardKind::Fact);
        }
        assert_eq!(state.sorted_count, DECK.len() as u32);
        assert_eq!(state.deck.len(), DECK.len());
    }

    #[test]
    fn mixed_session_accumulates_both_scores() {
        let mut state = new_state(1);
        let mut run = LevelRun::new(RunConfig::new(3));
        state.deck = vec![0, 1]; // top is the feeling card
        sort_top_card(&mut state, &mut run, CardKind::Feeling);
        sort_top_card(&mut state, &mut run, CardKind::Feeling);
        assert_eq!(run.score(), CORRECT_SCORE + WRONG_SCORE);
    }

    #[test]
    fn ended_run_rejects_sorting() {
        let mut state = new_state(1);
        let mut run = LevelRun::new(RunConfig::new(3));
        run.finish(true, None);
        assert!(!sort_top_card(&mut state, &mut run, CardKind::Fact));
        assert_eq!(state.sorted_count, 0);
    }
}
