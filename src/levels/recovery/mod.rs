//! Уровень 5 «Восстановление» — путь ресурсов.
//!
//! Five nodes in a row: pick a direction while the clock waits, then a
//! ten-second gathering event where useful resources soothe and hazards
//! strain the gauge. The run succeeds once every node is walked.

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
use state::{Phase, RecoveryState, SLOTS};

pub struct RecoveryLevel {
    pub state: RecoveryState,
    run: LevelRun,
}

impl RecoveryLevel {
    pub fn new(seed: u64) -> Self {
        let mut run = LevelRun::new(RunConfig {
            start_stress: 18.0,
            show_stress: true,
            expiry: ExpiryRule::Defer,
            ..RunConfig::new(5)
        });
        // The clock only runs during collect events.
        run.set_timer_paused(true);
        Self {
            state: RecoveryState::new(seed),
            run,
        }
    }

    fn handle_key(&mut self, key: char) -> bool {
        match self.state.phase {
            Phase::Choice => match key {
                '1' | '2' | '3' => {
                    let option = key as usize - '1' as usize;
                    logic::pick_option(&mut self.state, &mut self.run, option);
                    true
                }
                _ => false,
            },
            Phase::Collect => match key {
                '1'..='9' => {
                    let slot = key as usize - '1' as usize;
                    logic::collect_item(&mut self.state, &mut self.run, slot);
                    true
                }
                _ => false,
            },
        }
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        if (CHOICE_BASE..CHOICE_BASE + 3).contains(&action_id) {
            let option = (action_id - CHOICE_BASE) as usize;
            logic::pick_option(&mut self.state, &mut self.run, option);
            true
        } else if (ITEM_BASE..ITEM_BASE + SLOTS as u16).contains(&action_id) {
            let slot = (action_id - ITEM_BASE) as usize;
            logic::collect_item(&mut self.state, &mut self.run, slot);
            true
        } else {
            false
        }
    }
}

impl Level for RecoveryLevel {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Click(id) => self.handle_click(*id),
        }
    }

    fn tick(&mut self, delta_ticks: u32) {
        self.run.tick(delta_ticks);
        logic::tick(&mut self.state, &mut self.run, delta_ticks);
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
