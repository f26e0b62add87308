//! Reflection-choice rendering (read-only from state).

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
use super::state::{AcceptanceState, PROMPTS, STRESS_THRESHOLD};

pub fn render(
    state: &AcceptanceState,
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
            Constraint::Min(6),    // mirror
            Constraint::Length(3), // choice buttons
            Constraint::Length(2), // footer hint
        ])
        .split(area);

    render_hud(run, f, chunks[0]);
    render_mirror(state, run, f, chunks[1], is_narrow);
    render_choices(f, chunks[2], is_narrow, click_state);

    let footer = Paragraph::new(Line::from(Span::styled(
        " Принять снижает стресс. Исправить даёт больше очков, но поднимает стресс.",
        Style::default().fg(Color::DarkGray),
    )))
    .wrap(Wrap { trim: false });
    f.render_widget(footer, chunks[3]);
}

fn render_mirror(
    state: &AcceptanceState,
    run: &LevelRun,
    f: &mut Frame,
    area: Rect,
    is_narrow: bool,
) {
    let title = if is_narrow {
        " Самопринятие "
    } else {
        " Уровень 4: Самопринятие "
    };
    let borders = if is_narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            PROMPTS[state.prompt_idx],
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Удерживай стресс ниже {} (сейчас {})",
                STRESS_THRESHOLD as u32,
                run.stress().floor() as u32
            ),
            Style::default().fg(Color::Gray),
        )),
    ];

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Blue))
        .title(Span::styled(
            title,
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ));
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(block);
    f.render_widget(widget, area);
}

fn render_choices(
    f: &mut Frame,
    area: Rect,
    is_narrow: bool,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    let borders = if is_narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };
    let buttons = [
        ("1 Принять", Color::Green, ACCEPT),
        ("2 Исправить", Color::Red, FIX),
    ];

    let mut cs = click_state.borrow_mut();
    for (i, (label, color, action)) in buttons.iter().enumerate() {
        let block = Block::default()
            .borders(borders)
            .border_style(Style::default().fg(*color));
        let widget = Paragraph::new(Line::from(Span::styled(
            *label,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(widget, halves[i]);
        cs.add_click_target(halves[i], *action);
    }
}
