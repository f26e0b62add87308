//! Уровень 2 «Раздражение» — бег по полосам.
//!
//! Irritants drop down three lanes. Neutralize them before they reach the
//! bottom; every slip charges the stress gauge, and a full gauge ends the
//! run.

mod actions;
mod logic;
mod render;
mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::levels::run::{ExpiryRule, LevelRun, RunConfig, STRESS_MAX};
use crate::levels::Level;

use actions::*;
use state::{IrritationState, LANES};

pub struct IrritationLevel {
    pub state: IrritationState,
    run: LevelRun,
}

impl IrritationLevel {
    pub fn new(seed: u64) -> Self {
        Self {
            state: IrritationState::new(seed),
            run: LevelRun::new(RunConfig {
                start_stress: 30.0,
                show_stress: true,
                expiry: ExpiryRule::StressBelow(STRESS_MAX),
                ..RunConfig::new(2)
            }),
        }
    }

    fn handle_key(&mut self, key: char) -> bool {
        match key {
            '1' | '2' | '3' => {
                let lane = key as usize - '1' as usize;
                logic::neutralize_lane(&mut self.state, &mut self.run, lane);
                true
            }
            'a' | 'h' => {
                logic::change_lane(&mut self.state, -1);
                true
            }
            'd' | 'l' => {
                logic::change_lane(&mut self.state, 1);
                true
            }
            _ => false,
        }
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        match action_id {
            id if (LANE_BASE..LANE_BASE + LANES as u16).contains(&id) => {
                let lane = (id - LANE_BASE) as usize;
                logic::neutralize_lane(&mut self.state, &mut self.run, lane);
                true
            }
            _ => false,
        }
    }
}

impl Level for IrritationLevel {
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

#[cfg(test)]
mod tests {
    use super::state::{Irritant, FIELD_PX};
    use super::*;
    use crate::levels::run::RunOutcome;
    use crate::time::TICKS_PER_SEC;

    fn with_idle_spawner(seed: u64) -> IrritationLevel {
        let mut level = IrritationLevel::new(seed);
        level.state.spawn_cooldown = 10_000;
        level
    }

    #[test]
    fn digit_key_neutralizes_the_lane() {
        let mut level = with_idle_spawner(1);
        level.state.irritants.push(Irritant {
            lane: 0,
            y: 100.0,
            speed: 200.0,
        });
        assert!(level.handle_input(&InputEvent::Key('1')));
        assert!(level.state.irritants.is_empty());
        assert_eq!(level.run().score(), logic::NEUTRALIZE_SCORE);
    }

    #[test]
    fn lane_click_targets_map_to_lanes() {
        let mut level = with_idle_spawner(1);
        level.state.irritants.push(Irritant {
            lane: 2,
            y: 40.0,
            speed: 200.0,
        });
        assert!(level.handle_input(&InputEvent::Click(LANE_BASE + 2)));
        assert!(level.state.irritants.is_empty());
        assert!(!level.handle_input(&InputEvent::Click(LANE_BASE + 3)));
    }

    #[test]
    fn avatar_keys_switch_lanes() {
        let mut level = with_idle_spawner(1);
        assert!(level.handle_input(&InputEvent::Key('a')));
        assert_eq!(level.state.player_lane, 0);
        assert!(level.handle_input(&InputEvent::Key('d')));
        assert!(level.handle_input(&InputEvent::Key('d')));
        assert_eq!(level.state.player_lane, 2);
    }

    #[test]
    fn slipped_irritants_overflow_into_failure() {
        let mut level = with_idle_spawner(1);
        for _ in 0..10 {
            level.state.irritants.push(Irritant {
                lane: 1,
                y: FIELD_PX - 1.0,
                speed: 300.0,
            });
        }
        level.tick(1);
        assert_eq!(
            level.run().outcome(),
            Some(&RunOutcome::Failure {
                message: logic::OVERLOAD_MESSAGE.to_string()
            })
        );
    }

    #[test]
    fn clean_defense_survives_to_the_timeout() {
        let mut level = IrritationLevel::new(8);
        for _ in 0..(TICKS_PER_SEC * 60) {
            level.tick(1);
            for lane in 0..LANES as u16 {
                level.handle_input(&InputEvent::Click(LANE_BASE + lane));
            }
        }
        assert!(level.run().expired());
        assert_eq!(level.run().outcome(), Some(&RunOutcome::Success));
        assert!(level.run().score() > 0.0);
    }
}
