//! Хаб «Внутренний путь»: вступление, список уровней, стадия персонажа.
//!
//! The hub is pure over the stored record: rendering reads it, input maps
//! to a [`HubEvent`] and the shell applies the consequences.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::character;
use crate::content::{DISCLAIMER, HUB_INTRO, LEVEL_META, STAGE_MAX};
use crate::input::{is_narrow_layout, ClickState};
use crate::progress::{is_game_completed, is_level_unlocked, ProgressRecord};
use crate::widgets::ClickableList;

use super::{render_footer, render_title_bar, stage_color};

// ── Actions ────────────────────────────────────────────────────────────
pub const OPEN_LEVEL_BASE: u16 = 10; // +index 0..4
pub const RESET_PROGRESS: u16 = 20;
pub const OPEN_RESULTS: u16 = 21;

/// What the hub asks the shell to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HubEvent {
    OpenLevel(u8),
    ResetProgress,
    OpenResults,
}

pub fn handle_key(record: &ProgressRecord, key: char) -> Option<HubEvent> {
    match key {
        '1'..='5' => {
            let level = key as u8 - b'0';
            is_level_unlocked(record, level).then_some(HubEvent::OpenLevel(level))
        }
        'r' => Some(HubEvent::ResetProgress),
        'f' if is_game_completed(record) => Some(HubEvent::OpenResults),
        _ => None,
    }
}

pub fn handle_click(record: &ProgressRecord, action_id: u16) -> Option<HubEvent> {
    let levels = LEVEL_META.len() as u16;
    match action_id {
        RESET_PROGRESS => Some(HubEvent::ResetProgress),
        OPEN_RESULTS if is_game_completed(record) => Some(HubEvent::OpenResults),
        id if (OPEN_LEVEL_BASE..OPEN_LEVEL_BASE + levels).contains(&id) => {
            let level = (id - OPEN_LEVEL_BASE) as u8 + 1;
            is_level_unlocked(record, level).then_some(HubEvent::OpenLevel(level))
        }
        _ => None,
    }
}

pub fn render(
    record: &ProgressRecord,
    toast: Option<&str>,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let is_narrow = is_narrow_layout(area.width);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(10),   // menu / character
            Constraint::Length(3), // footer or toast
        ])
        .split(area);

    render_title_bar(f, chunks[0], "Внутренний путь", Color::Cyan);

    if is_narrow {
        render_menu(record, f, chunks[1], true, click_state);
    } else {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);
        render_menu(record, f, cols[0], false, click_state);
        render_character(record, f, cols[1]);
    }

    let hint = if is_game_completed(record) {
        " Тап по уровню. F: финальный итог. R: сброс."
    } else {
        " Тап по уровню или цифры 1-5. R: сброс прогресса."
    };
    render_footer(f, chunks[2], toast, hint);
}

fn render_menu(
    record: &ProgressRecord,
    f: &mut Frame,
    area: Rect,
    is_narrow: bool,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let inner_width = if is_narrow {
        area.width
    } else {
        area.width.saturating_sub(2)
    };

    let mut list = ClickableList::new();
    list.push(Line::from(Span::styled(
        HUB_INTRO,
        Style::default().fg(Color::Gray),
    )));
    list.push(Line::from(""));
    if is_narrow {
        // No character panel on phones; the stage lives in the menu instead.
        list.push(Line::from(Span::styled(
            format!("Стадия: {}/{}", character::stage(record), STAGE_MAX),
            Style::default().fg(Color::Cyan),
        )));
        list.push(Line::from(""));
    }

    for (i, meta) in LEVEL_META.iter().enumerate() {
        let unlocked = is_level_unlocked(record, meta.id);
        let completed = record.is_completed(meta.id);
        let key_style = if unlocked {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let label_style = if unlocked {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let label = if is_narrow {
            meta.title.to_string()
        } else {
            format!("{} — {}", meta.title, meta.subtitle)
        };

        let mut spans = vec![
            Span::styled(format!(" [{}] ", meta.id), key_style),
            Span::styled(label, label_style),
        ];
        if completed {
            spans.push(Span::styled(
                format!(" • {} очков", record.best_score(meta.id)),
                Style::default().fg(Color::Green),
            ));
        } else if !unlocked {
            spans.push(Span::styled(
                " (закрыто)",
                Style::default().fg(Color::DarkGray),
            ));
        }
        list.push_clickable(Line::from(spans), OPEN_LEVEL_BASE + i as u16);
    }

    list.push(Line::from(""));
    if is_game_completed(record) {
        list.push_clickable(
            Line::from(vec![
                Span::styled(
                    " [F] ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("К финальному итогу", Style::default().fg(Color::Cyan)),
            ]),
            OPEN_RESULTS,
        );
    }
    list.push_clickable(
        Line::from(vec![
            Span::styled(
                " [R] ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("Сбросить прогресс", Style::default().fg(Color::Red)),
        ]),
        RESET_PROGRESS,
    );

    let borders = if is_narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Уровни ");

    let mut cs = click_state.borrow_mut();
    list.register_targets(area, &mut cs, 1, 1, 0, inner_width);
    let widget = Paragraph::new(list.into_lines())
        .wrap(Wrap { trim: false })
        .block(block);
    f.render_widget(widget, area);
}

fn render_character(record: &ProgressRecord, f: &mut Frame, area: Rect) {
    let stage = character::stage(record);
    let tint = Style::default().fg(stage_color(stage));

    let mut lines: Vec<Line> = character::portrait(stage)
        .iter()
        .map(|row| Line::from(Span::styled(*row, tint)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Стадия: {}/{}", stage, STAGE_MAX),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        DISCLAIMER,
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .title(" Персонаж "),
        );
    f.render_widget(widget, area);
}
