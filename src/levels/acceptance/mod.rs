//! Уровень 4 «Самопринятие» — выбор отражения.
//!
//! The mirror keeps raising inner statements. Accepting one relieves
//! stress for a small score; fixing pays more but strains the gauge, and
//! crossing the threshold ends the run.

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
use state::{AcceptanceState, STRESS_THRESHOLD};

pub struct AcceptanceLevel {
    pub state: AcceptanceState,
    run: LevelRun,
}

impl AcceptanceLevel {
    pub fn new(seed: u64) -> Self {
        Self {
            state: logic::new_state(seed),
            run: LevelRun::new(RunConfig {
                start_stress: 38.0,
                show_stress: true,
                expiry: ExpiryRule::StressBelow(STRESS_THRESHOLD),
                ..RunConfig::new(4)
            }),
        }
    }

    fn handle_key(&mut self, key: char) -> bool {
        match key {
            '1' => {
                logic::accept(&mut self.state, &mut self.run);
                true
            }
            '2' => {
                logic::fix(&mut self.state, &mut self.run);
                true
            }
            _ => false,
        }
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        match action_id {
            ACCEPT => {
                logic::accept(&mut self.state, &mut self.run);
                true
            }
            FIX => {
                logic::fix(&mut self.state, &mut self.run);
                true
            }
            _ => false,
        }
    }
}

impl Level for AcceptanceLevel {
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
