//! Уровень 1 «Подавление» — лабиринт дыхания.
//!
//! Walk the maze to the glowing exit: every step scores, the exit pays a
//! bonus and rebuilds the maze. A breath briefly lights the walls up.

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
use state::{Dir, SuppressionState};

pub struct SuppressionLevel {
    pub state: SuppressionState,
    run: LevelRun,
}

impl SuppressionLevel {
    pub fn new(seed: u64) -> Self {
        Self {
            state: logic::new_state(seed),
            run: LevelRun::new(RunConfig {
                expiry: ExpiryRule::Clear,
                ..RunConfig::new(1)
            }),
        }
    }

    fn handle_key(&mut self, key: char) -> bool {
        let dir = match key {
            'w' | 'k' => Some(Dir::Up),
            's' | 'j' => Some(Dir::Down),
            'a' | 'h' => Some(Dir::Left),
            'd' | 'l' => Some(Dir::Right),
            _ => None,
        };
        if let Some(dir) = dir {
            logic::try_move(&mut self.state, &mut self.run, dir);
            return true;
        }
        if key == 'b' || key == ' ' {
            logic::breathe(&mut self.state, &self.run);
            return true;
        }
        false
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        let dir = match action_id {
            MOVE_UP => Some(Dir::Up),
            MOVE_DOWN => Some(Dir::Down),
            MOVE_LEFT => Some(Dir::Left),
            MOVE_RIGHT => Some(Dir::Right),
            _ => None,
        };
        if let Some(dir) = dir {
            logic::try_move(&mut self.state, &mut self.run, dir);
            return true;
        }
        if action_id == BREATHE {
            logic::breathe(&mut self.state, &self.run);
            return true;
        }
        false
    }
}

impl Level for SuppressionLevel {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Click(id) => self.handle_click(*id),
        }
    }

    fn tick(&mut self, delta_ticks: u32) {
        self.run.tick(delta_ticks);
        logic::tick(&mut self.state, delta_ticks);
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
    fn click_pad_moves_the_player() {
        let mut level = SuppressionLevel::new(3);
        let action = if !level.state.maze.cell(0, 0).wall(Dir::Right) {
            MOVE_RIGHT
        } else {
            MOVE_DOWN
        };
        assert!(level.handle_input(&InputEvent::Click(action)));
        assert_ne!(level.state.player, (0, 0));
        assert_eq!(level.run().score(), logic::STEP_SCORE);
    }

    #[test]
    fn movement_keys_are_consumed_even_when_blocked() {
        let mut level = SuppressionLevel::new(3);
        // 'a' walks into the left border wall: consumed, player stays.
        assert!(level.handle_input(&InputEvent::Key('a')));
        assert_eq!(level.state.player, (0, 0));
        assert!(!level.handle_input(&InputEvent::Key('q')));
    }

    #[test]
    fn breath_key_lights_the_walls() {
        let mut level = SuppressionLevel::new(3);
        assert!(level.handle_input(&InputEvent::Key('b')));
        assert_eq!(level.state.reveal_ticks, logic::BREATH_TICKS);
        level.tick(5);
        assert_eq!(level.state.reveal_ticks, logic::BREATH_TICKS - 5);
    }

    #[test]
    fn unknown_click_is_not_consumed() {
        let mut level = SuppressionLevel::new(3);
        assert!(!level.handle_input(&InputEvent::Click(999)));
    }

    #[test]
    fn run_times_out_to_success() {
        let mut level = SuppressionLevel::new(3);
        level.tick(TICKS_PER_SEC * 60);
        assert!(level.run().expired());
        assert_eq!(level.run().outcome(), Some(&RunOutcome::Success));
    }
}
