//! Lane-runner rendering (read-only from state).

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

use super::actions::*;
use super::state::{IrritationState, FIELD_PX, LANES};

pub fn render(
    state: &IrritationState,
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
            Constraint::Min(8),    // track
            Constraint::Length(1), // hint
        ])
        .split(area);

    render_hud(run, f, chunks[0]);
    render_track(state, f, chunks[1], is_narrow, click_state);

    let hint = Paragraph::new(Line::from(Span::styled(
        " Тап по полосе или 1/2/3: нейтрализовать. A/D: сменить полосу.",
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(hint, chunks[2]);
}

fn render_track(
    state: &IrritationState,
    f: &mut Frame,
    area: Rect,
    is_narrow: bool,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let title = if is_narrow {
        " Раздражение "
    } else {
        " Уровень 2: Раздражение "
    };
    let borders = if is_narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Red))
        .title(Span::styled(
            title,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height < 2 || (inner.width as usize) < LANES * 3 {
        return;
    }

    let rows = inner.height as usize;
    let lane_w = inner.width / LANES as u16;

    // Mark which cells hold an irritant. The last row doubles as the
    // avatar row.
    let mut cells = vec![[false; LANES]; rows];
    for item in &state.irritants {
        let r = ((item.y / FIELD_PX) * rows as f64) as usize;
        cells[r.min(rows - 1)][item.lane] = true;
    }

    let irritant_style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
    let player_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let rail_style = Style::default().fg(Color::DarkGray);

    let mut lines: Vec<Line> = Vec::with_capacity(rows);
    for (ri, row) in cells.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        for (lane, has_item) in row.iter().enumerate() {
            if lane > 0 {
                spans.push(Span::styled("│", rail_style));
            }
            let w = lane_w as usize - usize::from(lane > 0);
            let mid = w / 2;
            if *has_item {
                spans.push(Span::raw(" ".repeat(mid)));
                spans.push(Span::styled("●", irritant_style));
                spans.push(Span::raw(" ".repeat(w - mid - 1)));
            } else if ri == rows - 1 && lane == state.player_lane {
                spans.push(Span::raw(" ".repeat(mid)));
                spans.push(Span::styled("@", player_style));
                spans.push(Span::raw(" ".repeat(w - mid - 1)));
            } else {
                spans.push(Span::raw(" ".repeat(w)));
            }
        }
        lines.push(Line::from(spans));
    }
    f.render_widget(Paragraph::new(lines), inner);

    let mut cs = click_state.borrow_mut();
    for lane in 0..LANES as u16 {
        cs.add_click_target(
            Rect::new(inner.x + lane * lane_w, inner.y, lane_w, inner.height),
            LANE_BASE + lane,
        );
    }
}
