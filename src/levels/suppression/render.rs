//! Breathing-maze rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::levels::render_hud;
use crate::levels::run::LevelRun;

use super::actions::*;
use super::state::{Dir, SuppressionState, COLS, ROWS};

pub fn render(
    state: &SuppressionState,
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
            Constraint::Min(10),   // maze
            Constraint::Length(1), // control pad
            Constraint::Length(1), // hint
        ])
        .split(area);

    render_hud(run, f, chunks[0]);
    render_maze(state, f, chunks[1], is_narrow);
    render_pad(state, f, chunks[2], click_state);

    let hint = Paragraph::new(Line::from(Span::styled(
        " Движение: стрелки или WASD. Дыхание (B) раскрывает путь.",
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(hint, chunks[3]);
}

fn render_maze(state: &SuppressionState, f: &mut Frame, area: Rect, is_narrow: bool) {
    let wall_style = if state.reveal_ticks > 0 {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let player_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let goal_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::with_capacity(ROWS * 2 + 1);
    for y in 0..ROWS {
        let mut top = String::new();
        for x in 0..COLS {
            top.push('+');
            top.push_str(if state.maze.cell(x, y).wall(Dir::Up) {
                "---"
            } else {
                "   "
            });
        }
        top.push('+');
        lines.push(Line::from(Span::styled(top, wall_style)));

        let mut spans: Vec<Span> = Vec::new();
        for x in 0..COLS {
            let cell = state.maze.cell(x, y);
            spans.push(Span::styled(
                if cell.wall(Dir::Left) { "|" } else { " " },
                wall_style,
            ));
            if (x, y) == state.player {
                spans.push(Span::styled(" @ ", player_style));
            } else if (x, y) == state.goal {
                spans.push(Span::styled(" ◆ ", goal_style));
            } else {
                spans.push(Span::raw("   "));
            }
        }
        spans.push(Span::styled("|", wall_style));
        lines.push(Line::from(spans));
    }

    let mut bottom = String::new();
    for x in 0..COLS {
        bottom.push('+');
        bottom.push_str(if state.maze.cell(x, ROWS - 1).wall(Dir::Down) {
            "---"
        } else {
            "   "
        });
    }
    bottom.push('+');
    lines.push(Line::from(Span::styled(bottom, wall_style)));

    let title = if is_narrow {
        " Подавление "
    } else {
        " Уровень 1: Подавление "
    };
    let borders = if is_narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(widget, area);
}

fn render_pad(
    state: &SuppressionState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let button = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let breath = if state.reveal_ticks > 0 {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        button
    };

    // Click rects below follow the span widths exactly.
    let spans = vec![
        Span::raw(" "),
        Span::styled("[◀]", button),
        Span::raw(" "),
        Span::styled("[▼]", button),
        Span::raw(" "),
        Span::styled("[▲]", button),
        Span::raw(" "),
        Span::styled("[▶]", button),
        Span::raw("  "),
        Span::styled("[ Дыхание ]", breath),
    ];
    f.render_widget(Paragraph::new(Line::from(spans)), area);

    let mut cs = click_state.borrow_mut();
    cs.add_click_target(Rect::new(area.x + 1, area.y, 3, 1), MOVE_LEFT);
    cs.add_click_target(Rect::new(area.x + 5, area.y, 3, 1), MOVE_DOWN);
    cs.add_click_target(Rect::new(area.x + 9, area.y, 3, 1), MOVE_UP);
    cs.add_click_target(Rect::new(area.x + 13, area.y, 3, 1), MOVE_RIGHT);
    cs.add_click_target(Rect::new(area.x + 18, area.y, 11, 1), BREATHE);
}
