//! Уровень 3 «Травма» — сортировка карт.
//!
//! Inner statements come up one card at a time; file each one as a fact,
//! a feeling, or a thought. Right buckets pay full, wrong ones a little,
//! and the deck reshuffles for as long as the timer runs.

mod actions;
mod logic;
mod render;
mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::levels::run::{ExpiryRule, LevelRun, RunConfig};
use crate::levels::Level;

use actions::*;
use state::{TraumaState, ALL_KINDS};

pub struct TraumaLevel {
    pub state: TraumaState,
    run: LevelRun,
}

impl TraumaLevel {
    pub fn new(seed: u64) -> Self {
        Self {
            state: logic::new_state(seed),
            run: LevelRun::new(RunConfig {
                expiry: ExpiryRule::Clear,
                ..RunConfig::new(3)
            }),
        }
    }

    fn sort_into(&mut self, bucket_idx: usize) {
        logic::sort_top_card(&mut self.state, &mut self.run, ALL_KINDS[bucket_idx]);
    }

    fn handle_key(&mut self, key: char) -> bool {
        match key {
            '1' | '2' | '3' => {
                self.sort_into(key as usize - '1' as usize);
                true
            }
            _ => false,
        }
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        match action_id {
            id if (SORT_BASE..SORT_BASE + ALL_KINDS.len() as u16).contains(&id) => {
                self.sort_into((id - SORT_BASE) as usize);
                true
            }
            _ => false,
        }
    }
}

impl Level for TraumaLevel {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Click(id) => self.handle_click(*id),
        }
    }

    fn tick(&mut self, delta_ticks: u32) {
        self.run.tick(delta_ticks);
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, &self.run, f, area, click_state);
    }

    fn run(&self) -> &LevelRun {
        &self.run
    }

    fn run_mut(&mut self) -> &mut LevelRun {
        &mut self.run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::run::RunOutcome;
    use crate::time::TICKS_PER_SEC;

    #[test]
    fn digit_keys_sort_into_buckets() {
        let mut level = TraumaLevel::new(1);
        level.state.deck = vec![0]; // a fact card
        assert!(level.handle_input(&InputEvent::Key('1')));
        assert_eq!(level.run().score(), logic::CORRECT_SCORE);
        assert_eq!(level.state.deck.len(), state::DECK.len());
    }

    #[test]
    fn bucket_clicks_map_in_order() {
        let mut level = TraumaLevel::new(1);
        level.state.deck = vec![0]; // a fact card into the thought bucket
        assert!(level.handle_input(&InputEvent::Click(SORT_BASE + 2)));
        assert_eq!(level.run().score(), logic::WRONG_SCORE);
        assert!(!level.handle_input(&InputEvent::Click(SORT_BASE + 3)));
    }

    #[test]
    fn unrelated_keys_fall_through() {
        let mut level = TraumaLevel::new(1);
        assert!(!level.handle_input(&InputEvent::Key('x')));
        assert_eq!(level.run().score(), 0.0);
    }

    #[test]
    fn run_times_out_to_success() {
        let mut level = TraumaLevel::new(1);
        level.tick(TICKS_PER_SEC * 60);
        assert_eq!(level.run().outcome(), Some(&RunOutcome::Success));
    }
}
