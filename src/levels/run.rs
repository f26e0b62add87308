//! Shared per-run state: score, stress, countdown timer, and the single
//! finish decision every level funnels through.

use crate::progress::engine::sanitize_score;
use crate::progress::{complete_level, ProgressStore, TransformationEvent};
use crate::time::SECS_PER_TICK;

pub const STRESS_MAX: f64 = 100.0;
pub const DEFAULT_DURATION_SECS: f64 = 60.0;
pub const DEFAULT_FAIL_MESSAGE: &str = "Попробуй снова: путь не закрепился.";

/// What happens when the countdown reaches zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExpiryRule {
    /// Running out the clock clears the level.
    Clear,
    /// Clears only while stress stays under the limit.
    StressBelow(f64),
    /// The level decides itself; the run just raises its expired flag.
    Defer,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub level: u8,
    pub duration_secs: f64,
    pub start_stress: f64,
    /// Whether the HUD shows the stress gauge.
    pub show_stress: bool,
    pub expiry: ExpiryRule,
}

impl RunConfig {
    pub fn new(level: u8) -> Self {
        Self {
            level,
            duration_secs: DEFAULT_DURATION_SECS,
            start_stress: 0.0,
            show_stress: false,
            expiry: ExpiryRule::Clear,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Success,
    Failure { message: String },
}

/// Where the app goes after a concluded run.
#[derive(Debug, Clone, PartialEq)]
pub enum RunTransition {
    Transform {
        level: u8,
        score: u32,
        first_clear: bool,
        transformation: TransformationEvent,
    },
    Hub {
        message: String,
    },
}

/// One attempt at a level.
///
/// Score and stress mutate only through the clamping methods here, the
/// finish decision sticks on first call, and [`conclude`](LevelRun::conclude)
/// hands the attempt off to the progress store at most once.
pub struct LevelRun {
    config: RunConfig,
    score: f64,
    stress: f64,
    time_left: f64,
    timer_paused: bool,
    expired: bool,
    outcome: Option<RunOutcome>,
    handed_off: bool,
}

impl LevelRun {
    pub fn new(config: RunConfig) -> Self {
        let mut run = Self {
            score: 0.0,
            stress: 0.0,
            time_left: config.duration_secs,
            timer_paused: false,
            expired: false,
            outcome: None,
            handed_off: false,
            config,
        };
        let start = run.config.start_stress;
        run.set_stress(start);
        run
    }

    pub fn level(&self) -> u8 {
        self.config.level
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn stress(&self) -> f64 {
        self.stress
    }

    pub fn time_left(&self) -> f64 {
        self.time_left
    }

    pub fn show_stress(&self) -> bool {
        self.config.show_stress
    }

    pub fn timer_paused(&self) -> bool {
        self.timer_paused
    }

    pub fn ended(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn expired(&self) -> bool {
        self.expired
    }

    pub fn outcome(&self) -> Option<&RunOutcome> {
        self.outcome.as_ref()
    }

    /// Advance the countdown. Levels call this before their own tick logic.
    pub fn tick(&mut self, delta_ticks: u32) {
        if self.ended() {
            return;
        }
        if !self.timer_paused {
            let dt = delta_ticks as f64 * SECS_PER_TICK;
            self.time_left = (self.time_left - dt).max(0.0);
        }
        if self.time_left <= 0.0 && !self.expired {
            self.expired = true;
            match self.config.expiry {
                ExpiryRule::Clear => self.finish(true, None),
                ExpiryRule::StressBelow(limit) => self.finish(self.stress < limit, None),
                ExpiryRule::Defer => {}
            }
        }
    }

    pub fn set_timer_paused(&mut self, paused: bool) {
        self.timer_paused = paused;
    }

    /// Add to the score; it never drops below zero.
    pub fn add_score(&mut self, value: f64) {
        if self.ended() {
            return;
        }
        self.score = (self.score + value).max(0.0);
    }

    /// Add to the stress gauge, clamped to 0..=100.
    pub fn add_stress(&mut self, value: f64) {
        if self.ended() {
            return;
        }
        self.stress = (self.stress + value).clamp(0.0, STRESS_MAX);
    }

    /// Set the stress gauge outright, same clamp as [`add_stress`](Self::add_stress).
    pub fn set_stress(&mut self, value: f64) {
        if self.ended() {
            return;
        }
        self.stress = value.clamp(0.0, STRESS_MAX);
    }

    /// Record the outcome. The first call wins; later calls are ignored.
    pub fn finish(&mut self, success: bool, fail_message: Option<&str>) {
        if self.outcome.is_some() {
            return;
        }
        self.outcome = Some(if success {
            RunOutcome::Success
        } else {
            RunOutcome::Failure {
                message: fail_message.unwrap_or(DEFAULT_FAIL_MESSAGE).to_string(),
            }
        });
    }

    /// Hand a finished run off to the progress store.
    ///
    /// Success records the level completion and yields the transform screen
    /// payload; failure leaves the store untouched and sends the player back
    /// to the hub with a toast. Returns `None` until an outcome exists and
    /// after the first hand-off.
    pub fn conclude(&mut self, store: &mut ProgressStore) -> Option<RunTransition> {
        if self.handed_off {
            return None;
        }
        let outcome = self.outcome.clone()?;
        self.handed_off = true;
        Some(match outcome {
            RunOutcome::Success => {
                let earned = sanitize_score(self.score);
                let result = complete_level(store, self.config.level, self.score);
                RunTransition::Transform {
                    level: self.config.level,
                    score: earned,
                    first_clear: result.first_clear,
                    transformation: result.transformation,
                }
            }
            RunOutcome::Failure { message } => RunTransition::Hub { message },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::TICKS_PER_SEC;

    fn run_with(expiry: ExpiryRule) -> LevelRun {
        LevelRun::new(RunConfig {
            expiry,
            ..RunConfig::new(1)
        })
    }

    #[test]
    fn new_run_reflects_config() {
        let run = LevelRun::new(RunConfig {
            duration_secs: 45.0,
            start_stress: 30.0,
            show_stress: true,
            ..RunConfig::new(2)
        });
        assert_eq!(run.level(), 2);
        assert_eq!(run.time_left(), 45.0);
        assert_eq!(run.stress(), 30.0);
        assert_eq!(run.score(), 0.0);
        assert!(run.show_stress());
        assert!(!run.ended());
    }

    #[test]
    fn timer_counts_down_in_ticks() {
        let mut run = run_with(ExpiryRule::Clear);
        run.tick(TICKS_PER_SEC);
        assert!((run.time_left() - 59.0).abs() < 1e-9);
    }

    #[test]
    fn paused_timer_freezes() {
        let mut run = run_with(ExpiryRule::Clear);
        run.set_timer_paused(true);
        run.tick(TICKS_PER_SEC * 10);
        assert_eq!(run.time_left(), 60.0);
        run.set_timer_paused(false);
        run.tick(TICKS_PER_SEC);
        assert!((run.time_left() - 59.0).abs() < 1e-9);
    }

    #[test]
    fn expiry_clear_succeeds() {
        let mut run = run_with(ExpiryRule::Clear);
        run.tick(TICKS_PER_SEC * 60);
        assert!(run.expired());
        assert_eq!(run.outcome(), Some(&RunOutcome::Success));
    }

    #[test]
    fn expiry_stress_below_checks_the_gauge() {
        let mut run = run_with(ExpiryRule::StressBelow(85.0));
        run.add_stress(50.0);
        run.tick(TICKS_PER_SEC * 60);
        assert_eq!(run.outcome(), Some(&RunOutcome::Success));

        let mut run = run_with(ExpiryRule::StressBelow(85.0));
        run.add_stress(90.0);
        run.tick(TICKS_PER_SEC * 60);
        assert_eq!(
            run.outcome(),
            Some(&RunOutcome::Failure {
                message: DEFAULT_FAIL_MESSAGE.to_string()
            })
        );
    }

    #[test]
    fn expiry_defer_only_raises_the_flag() {
        let mut run = run_with(ExpiryRule::Defer);
        run.tick(TICKS_PER_SEC * 60);
        assert!(run.expired());
        assert!(!run.ended());

        run.finish(false, Some("Нужно пройти все узлы."));
        assert_eq!(
            run.outcome(),
            Some(&RunOutcome::Failure {
                message: "Нужно пройти все узлы.".to_string()
            })
        );
    }

    #[test]
    fn finish_is_idempotent() {
        let mut run = run_with(ExpiryRule::Clear);
        run.finish(false, Some("первая причина"));
        run.finish(true, None);
        assert_eq!(
            run.outcome(),
            Some(&RunOutcome::Failure {
                message: "первая причина".to_string()
            })
        );
    }

    #[test]
    fn ended_run_ignores_mutation() {
        let mut run = run_with(ExpiryRule::Clear);
        run.add_score(10.0);
        run.finish(true, None);
        run.add_score(10.0);
        run.add_stress(40.0);
        run.set_stress(70.0);
        run.tick(TICKS_PER_SEC * 5);
        assert_eq!(run.score(), 10.0);
        assert_eq!(run.stress(), 0.0);
        assert_eq!(run.time_left(), 60.0);
    }

    #[test]
    fn score_never_goes_negative() {
        let mut run = run_with(ExpiryRule::Clear);
        run.add_score(-5.0);
        assert_eq!(run.score(), 0.0);
        run.add_score(10.0);
        run.add_score(-3.0);
        assert_eq!(run.score(), 7.0);
    }

    #[test]
    fn stress_clamps_to_gauge_bounds() {
        let mut run = run_with(ExpiryRule::Clear);
        run.add_stress(-20.0);
        assert_eq!(run.stress(), 0.0);
        run.add_stress(250.0);
        assert_eq!(run.stress(), STRESS_MAX);
        run.set_stress(-5.0);
        assert_eq!(run.stress(), 0.0);
        run.set_stress(140.0);
        assert_eq!(run.stress(), STRESS_MAX);
        run.set_stress(18.0);
        assert_eq!(run.stress(), 18.0);
    }

    #[test]
    fn conclude_success_records_and_transitions() {
        let mut store = ProgressStore::in_memory();
        let mut run = run_with(ExpiryRule::Clear);
        run.add_score(37.9);
        run.finish(true, None);

        let transition = run.conclude(&mut store).unwrap();
        match transition {
            RunTransition::Transform {
                level,
                score,
                first_clear,
                transformation,
            } => {
                assert_eq!(level, 1);
                assert_eq!(score, 37);
                assert!(first_clear);
                assert_eq!(transformation.removed.as_deref(), Some("Гордыня"));
            }
            other => panic!("expected transform transition, got {:?}", other),
        }
        assert!(store.load().is_completed(1));
    }

    #[test]
    fn conclude_failure_keeps_store_untouched() {
        let mut store = ProgressStore::in_memory();
        let mut run = run_with(ExpiryRule::Clear);
        run.add_score(20.0);
        run.finish(false, Some("Стресс переполнен."));

        let transition = run.conclude(&mut store).unwrap();
        assert_eq!(
            transition,
            RunTransition::Hub {
                message: "Стресс переполнен.".to_string()
            }
        );
        assert_eq!(store.load(), Default::default());
    }

    #[test]
    fn conclude_fires_at_most_once() {
        let mut store = ProgressStore::in_memory();
        let mut run = run_with(ExpiryRule::Clear);
        assert!(run.conclude(&mut store).is_none()); // not finished yet

        run.finish(true, None);
        assert!(run.conclude(&mut store).is_some());
        assert!(run.conclude(&mut store).is_none());
        assert_eq!(store.load().transforms.len(), 1);
    }
}
