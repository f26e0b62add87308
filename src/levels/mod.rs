//! Level trait, level factory, and the HUD strip shared by all levels.

pub mod acceptance;
pub mod irritation;
pub mod recovery;
pub mod run;
pub mod suppression;
pub mod trauma;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::Paragraph;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use run::LevelRun;

/// Trait that all levels implement.
pub trait Level {
    /// Handle an input event. Returns true if the event was consumed.
    fn handle_input(&mut self, event: &InputEvent) -> bool;

    /// Advance level logic by `delta_ticks` discrete ticks.
    fn tick(&mut self, delta_ticks: u32);

    /// Render the level into the given area.
    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>);

    /// The shared run state (score, stress, timer, outcome).
    fn run(&self) -> &LevelRun;

    fn run_mut(&mut self) -> &mut LevelRun;
}

/// Create a level instance by its number. `seed` feeds the level's RNG.
pub fn create_level(level: u8, seed: u64) -> Option<Box<dyn Level>> {
    match level {
        1 => Some(Box::new(suppression::SuppressionLevel::new(seed))),
        2 => Some(Box::new(irritation::IrritationLevel::new(seed))),
        3 => Some(Box::new(trauma::TraumaLevel::new(seed))),
        4 => Some(Box::new(acceptance::AcceptanceLevel::new(seed))),
        5 => Some(Box::new(recovery::RecoveryLevel::new(seed))),
        _ => None,
    }
}

/// Paint the one-row HUD: score, countdown, and the stress gauge when the
/// level opts in.
pub fn render_hud(run: &LevelRun, f: &mut Frame, area: Rect) {
    let mut spans = vec![
        Span::styled(
            format!(" Очки: {}", run.score().floor() as i64),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  Время: {}", run.time_left().ceil() as u32),
            if run.timer_paused() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            },
        ),
    ];

    if run.show_stress() {
        let stress = run.stress().round() as u32;
        let color = if stress >= 85 {
            Color::Red
        } else if stress >= 60 {
            Color::Yellow
        } else {
            Color::Green
        };
        let bar_len = 10usize;
        let filled = ((run.stress() / run::STRESS_MAX * bar_len as f64).round() as usize).min(bar_len);
        let bar: String = "█".repeat(filled) + &"░".repeat(bar_len - filled);
        spans.push(Span::styled(
            format!("  Стресс: {} ", stress),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(bar, Style::default().fg(color)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
