//! Экран трансформации: этап завершён, тень отступает на шаг.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::character;
use crate::content::level_meta;
use crate::input::ClickState;
use crate::progress::{ProgressRecord, TransformationEvent};

use super::{render_title_bar, stage_color};

// ── Actions ────────────────────────────────────────────────────────────
pub const CONTINUE: u16 = 10;

/// Snapshot of a finished run, shown until the player continues.
pub struct TransformView {
    pub level: u8,
    pub score: u32,
    pub first_clear: bool,
    pub transformation: TransformationEvent,
}

/// Keys that advance past the transformation.
pub fn is_continue_key(key: char) -> bool {
    matches!(key, ' ' | 'c' | '\n')
}

pub fn render(
    view: &TransformView,
    record: &ProgressRecord,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(9),    // portraits
            Constraint::Length(5), // what changed
            Constraint::Length(3), // continue button
        ])
        .split(area);

    let title = match level_meta(view.level) {
        Some(meta) => format!("Этап завершён: {}", meta.title),
        None => "Этап завершён".to_string(),
    };
    render_title_bar(f, chunks[0], &title, Color::Green);

    let (before, after) = character::transform_stages(record, view.first_clear);
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(chunks[1]);
    render_portrait(f, halves[0], " До ", before);
    render_portrait(f, halves[1], " После ", after);

    render_changes(view, f, chunks[2]);

    // The whole bottom bar continues, like the in-game footers.
    let button = Paragraph::new(Line::from(Span::styled(
        "Продолжить путь [C / тап]",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    )
    .alignment(Alignment::Center);
    f.render_widget(button, chunks[3]);
    click_state.borrow_mut().add_click_target(chunks[3], CONTINUE);
}

fn render_portrait(f: &mut Frame, area: Rect, title: &str, stage: u8) {
    let tint = Style::default().fg(stage_color(stage));
    let lines: Vec<Line> = character::portrait(stage)
        .iter()
        .map(|row| Line::from(Span::styled(*row, tint)))
        .collect();
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title.to_string()),
        );
    f.render_widget(widget, area);
}

fn render_changes(view: &TransformView, f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    if let Some(removed) = &view.transformation.removed {
        lines.push(Line::from(Span::styled(
            format!("Снято: {}", removed),
            Style::default().fg(Color::Red),
        )));
    }
    if let Some(gained) = &view.transformation.gained {
        lines.push(Line::from(Span::styled(
            format!("Проявлено: {}", gained),
            Style::default().fg(Color::Green),
        )));
    }
    if !view.first_clear {
        lines.push(Line::from(Span::styled(
            "Результат обновлён.",
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("Очки этапа: {}", view.score),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
