//! Resource-path rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::levels::render_hud;
use crate::levels::run::LevelRun;
use crate::time::TICKS_PER_SEC;
use crate::widgets::ClickableList;

use super::actions::*;
use super::state::{Phase, RecoveryState, MAX_NODES, SLOTS};

pub fn render(
    state: &RecoveryState,
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
            Constraint::Min(10),   // node field
            Constraint::Length(1), // hint
        ])
        .split(area);

    render_hud(run, f, chunks[0]);

    match state.phase {
        Phase::Choice => render_choice(state, f, chunks[1], is_narrow, click_state),
        Phase::Collect => render_collect(state, f, chunks[1], is_narrow, click_state),
    }

    let hint = Paragraph::new(Line::from(Span::styled(
        " Выбор узла: 1-3. Сбор: тап по объекту или 1-9. Красные ▲ опасны.",
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(hint, chunks[2]);
}

fn field_block(is_narrow: bool) -> Block<'static> {
    let title = if is_narrow {
        " Восстановление "
    } else {
        " Уровень 5: Восстановление "
    };
    let borders = if is_narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };
    Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Green))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
}

fn render_choice(
    state: &RecoveryState,
    f: &mut Frame,
    area: Rect,
    is_narrow: bool,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let secs = state.choice_ticks_left.div_ceil(TICKS_PER_SEC);

    let mut list = ClickableList::new();
    list.push(Line::from(Span::styled(
        format!("Узел {}/{}: выбери направление", state.node_index + 1, MAX_NODES),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    list.push(Line::from(Span::styled(
        format!("Время на выбор: {}с", secs),
        Style::default().fg(Color::Gray),
    )));
    list.push(Line::from(""));
    for (i, option) in state.options().iter().enumerate() {
        list.push_clickable(
            Line::from(vec![
                Span::styled(
                    format!(" [{}] ", i + 1),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*option, Style::default().fg(Color::White)),
            ]),
            CHOICE_BASE + i as u16,
        );
    }
    if !state.picked.is_empty() {
        list.push(Line::from(""));
        list.push(Line::from(Span::styled(
            format!("Пройдено: {}", state.picked.join(", ")),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let mut cs = click_state.borrow_mut();
    list.register_targets(area, &mut cs, 1, 1, 0, 0);
    let widget = Paragraph::new(list.into_lines()).block(field_block(is_narrow));
    f.render_widget(widget, area);
}

fn render_collect(
    state: &RecoveryState,
    f: &mut Frame,
    area: Rect,
    is_narrow: bool,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let block = field_block(is_narrow);
    let inner = block.inner(area);
    let cell_w = (inner.width / 3).max(1);

    let secs = state.collect_ticks_left.div_ceil(TICKS_PER_SEC);
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Событие: {}", state.current_option.unwrap_or_default()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Сбор ресурсов: {}с", secs),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    for row in 0..3 {
        let mut spans = Vec::new();
        for col in 0..3 {
            let slot = row * 3 + col;
            let (text, style) = match state.item_in_slot(slot) {
                Some(item) if item.harmful => (
                    format!("{} ▲", slot + 1),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Some(_) => (
                    format!("{} ✦", slot + 1),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                None => ("·".to_string(), Style::default().fg(Color::DarkGray)),
            };
            spans.push(Span::styled(
                format!("{:^width$}", text, width = cell_w as usize),
                style,
            ));
        }
        lines.push(Line::from(spans));
        if row < 2 {
            lines.push(Line::from(""));
        }
    }

    // Slot rects line up with the grid rows drawn above.
    let mut cs = click_state.borrow_mut();
    for slot in 0..SLOTS {
        if state.item_in_slot(slot).is_none() {
            continue;
        }
        let y = inner.y + 3 + (slot / 3) as u16 * 2;
        if y >= inner.bottom() {
            continue;
        }
        let rect = Rect {
            x: inner.x + (slot % 3) as u16 * cell_w,
            y,
            width: cell_w,
            height: 1,
        };
        cs.add_click_target(rect, ITEM_BASE + slot as u16);
    }

    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, area);
}
