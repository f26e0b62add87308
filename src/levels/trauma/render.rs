//! Card-sorting rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::levels::render_hud;
use crate::levels::run::LevelRun;

use super::actions::*;
use super::logic;
use super::state::{TraumaState, ALL_KINDS, DECK};

pub fn render(
    state: &TraumaState,
    run: &LevelRun,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let is_narrow = is_narrow_layout(area.width);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // HUD
            Constraint::Min(7),    // card
            Constraint::Length(3), // buckets
        ])
        .split(area);

    render_hud(run, f, chunks[0]);
    render_card(state, f, chunks[1], is_narrow);
    render_buckets(f, chunks[2], is_narrow, click_state);
}

fn render_card(state: &TraumaState, f: &mut Frame, area: Rect, is_narrow: bool) {
    let title = if is_narrow {
        " Травма "
    } else {
        " Уровень 3: Травма "
    };
    let borders = if is_narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };

    let mut lines = vec![Line::from("")];
    if let Some(idx) = logic::top_card(state) {
        lines.push(Line::from(Span::styled(
            format!("«{}»", DECK[idx].text),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Отправь карточку в корзину: Факт / Чувство / Мысль",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        format!(
            "Разобрано: {}, верно: {}",
            state.sorted_count, state.correct_count
        ),
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Magenta))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(block);
    f.render_widget(widget, area);
}

fn render_buckets(
    f: &mut Frame,
    area: Rect,
    is_narrow: bool,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let thirds = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let borders = if is_narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };
    let mut cs = click_state.borrow_mut();
    for (i, kind) in ALL_KINDS.iter().enumerate() {
        let label = format!("{} {}", i + 1, kind.label());
        let block = Block::default()
            .borders(borders)
            .border_style(Style::default().fg(Color::DarkGray));
        let widget = Paragraph::new(Line::from(Span::styled(
            label,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(widget, thirds[i]);
        cs.add_click_target(thirds[i], SORT_BASE + i as u16);
    }
}
