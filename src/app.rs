//! Application shell: screens, transitions, toasts, the tick loop.
//!
//! The shell owns the progress store and the current screen. Levels hand
//! control back through [`crate::levels::run::LevelRun::conclude`], which
//! the tick loop polls after advancing the active level.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::levels::run::RunTransition;
use crate::levels::{create_level, Level};
use crate::progress::{is_game_completed, ProgressRecord, ProgressStore};
use crate::screens::hub::{self, HubEvent};
use crate::screens::results::{self, ResultsEvent};
use crate::screens::transform::{self, TransformView};
use crate::share;
use crate::telegram::{self, ShareStatus};
use crate::time::TICKS_PER_SEC;

/// Global action: leave the current screen for the hub (Esc, or the back
/// affordance the shell maps onto it).
pub const BACK_TO_HUB: u16 = 1;

/// Ticks a toast stays in the footer (3 s).
const TOAST_TICKS: u32 = 3 * TICKS_PER_SEC;

const TOAST_RESET: &str = "Прогресс очищен.";
const TOAST_UPDATED: &str = "Результат обновлён.";
const TOAST_RESTART: &str = "Путь начат заново.";
const TOAST_SHARED: &str = "Результат отправлен.";
const TOAST_COPIED: &str = "Текст результата скопирован.";
const TOAST_SHARE_FAILED: &str = "Поделиться не удалось. Попробуй снова.";

pub enum AppScreen {
    Hub,
    Playing { level: Box<dyn Level> },
    Transform { view: TransformView },
    Results,
}

pub struct App {
    store: ProgressStore,
    /// Cached copy of the stored record, refreshed on every transition.
    record: ProgressRecord,
    screen: AppScreen,
    toast: Option<(String, u32)>,
    rng_seed: u64,
}

impl App {
    pub fn new(store: ProgressStore, seed: u64) -> Self {
        let record = store.load();
        Self {
            store,
            record,
            screen: AppScreen::Hub,
            toast: None,
            rng_seed: seed | 1,
        }
    }

    pub fn handle_input(&mut self, event: &InputEvent) {
        if *event == InputEvent::Click(BACK_TO_HUB) {
            if !matches!(self.screen, AppScreen::Hub) {
                self.go_hub();
            }
            return;
        }

        match &mut self.screen {
            AppScreen::Hub => {
                let hub_event = match event {
                    InputEvent::Key(key) => hub::handle_key(&self.record, *key),
                    InputEvent::Click(id) => hub::handle_click(&self.record, *id),
                };
                if let Some(hub_event) = hub_event {
                    self.apply_hub_event(hub_event);
                }
            }
            AppScreen::Playing { level } => {
                let consumed = level.handle_input(event);
                if consumed && matches!(event, InputEvent::Click(_)) {
                    telegram::haptic_impact("light");
                }
            }
            AppScreen::Transform { view } => {
                let advance = match event {
                    InputEvent::Key(key) => transform::is_continue_key(*key),
                    InputEvent::Click(id) => *id == transform::CONTINUE,
                };
                let repeat_clear = !view.first_clear;
                if advance {
                    telegram::haptic_impact("medium");
                    self.leave_transform(repeat_clear);
                }
            }
            AppScreen::Results => {
                let results_event = match event {
                    InputEvent::Key(key) => results::handle_key(*key),
                    InputEvent::Click(id) => results::handle_click(*id),
                };
                if let Some(results_event) = results_event {
                    self.apply_results_event(results_event);
                }
            }
        }
    }

    /// Advance the clock: fade the toast, tick the active level, and pick
    /// up the run's transition once it ends.
    pub fn tick(&mut self, delta_ticks: u32) {
        if delta_ticks == 0 {
            return;
        }
        if let Some((_, ticks_left)) = &mut self.toast {
            *ticks_left = ticks_left.saturating_sub(delta_ticks);
            if *ticks_left == 0 {
                self.toast = None;
            }
        }

        if let AppScreen::Playing { level } = &mut self.screen {
            level.tick(delta_ticks);
            if let Some(transition) = level.run_mut().conclude(&mut self.store) {
                match transition {
                    RunTransition::Transform {
                        level,
                        score,
                        first_clear,
                        transformation,
                    } => {
                        telegram::haptic_notify("success");
                        self.refresh_record();
                        self.screen = AppScreen::Transform {
                            view: TransformView {
                                level,
                                score,
                                first_clear,
                                transformation,
                            },
                        };
                    }
                    RunTransition::Hub { message } => {
                        telegram::haptic_notify("error");
                        self.go_hub();
                        self.show_toast(&message);
                    }
                }
            }
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        match &self.screen {
            AppScreen::Hub => hub::render(&self.record, self.toast_text(), f, area, click_state),
            AppScreen::Playing { level } => level.render(f, area, click_state),
            AppScreen::Transform { view } => {
                transform::render(view, &self.record, f, area, click_state)
            }
            AppScreen::Results => {
                let quote = share::pick_quote(self.record.total_score as u64);
                results::render(&self.record, quote, self.toast_text(), f, area, click_state)
            }
        }
    }

    fn apply_hub_event(&mut self, event: HubEvent) {
        match event {
            HubEvent::OpenLevel(level_id) => {
                let seed = self.next_seed();
                if let Some(level) = create_level(level_id, seed) {
                    telegram::haptic_impact("light");
                    self.screen = AppScreen::Playing { level };
                }
            }
            HubEvent::ResetProgress => {
                self.store.reset();
                self.refresh_record();
                self.show_toast(TOAST_RESET);
            }
            HubEvent::OpenResults => {
                self.screen = AppScreen::Results;
            }
        }
    }

    fn apply_results_event(&mut self, event: ResultsEvent) {
        match event {
            ResultsEvent::Share => {
                let quote = share::pick_quote(self.record.total_score as u64);
                let text = share::share_text(&self.record, quote);
                let toast = match telegram::share(&text) {
                    ShareStatus::Shared => TOAST_SHARED,
                    ShareStatus::Copied => TOAST_COPIED,
                    ShareStatus::Failed => TOAST_SHARE_FAILED,
                };
                self.show_toast(toast);
            }
            ResultsEvent::BackToHub => self.go_hub(),
            ResultsEvent::Restart => {
                self.store.reset();
                self.go_hub();
                self.show_toast(TOAST_RESTART);
            }
        }
    }

    /// The transform screen flows onward: to the results once the whole
    /// path is walked, to the hub otherwise.
    fn leave_transform(&mut self, repeat_clear: bool) {
        self.refresh_record();
        self.screen = if is_game_completed(&self.record) {
            AppScreen::Results
        } else {
            AppScreen::Hub
        };
        if repeat_clear {
            self.show_toast(TOAST_UPDATED);
        }
    }

    fn go_hub(&mut self) {
        self.refresh_record();
        self.screen = AppScreen::Hub;
    }

    fn refresh_record(&mut self) {
        self.record = self.store.load();
    }

    fn show_toast(&mut self, text: &str) {
        self.toast = Some((text.to_string(), TOAST_TICKS));
    }

    fn toast_text(&self) -> Option<&str> {
        self.toast.as_ref().map(|(text, _)| text.as_str())
    }

    fn next_seed(&mut self) -> u64 {
        self.rng_seed = self
            .rng_seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.rng_seed
    }
}
