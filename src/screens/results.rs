//! Итоговый экран: общий счёт, черты, цитата и шеринг результата.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::character;
use crate::content::STAGE_MAX;
use crate::input::{is_narrow_layout, ClickState};
use crate::progress::ProgressRecord;
use crate::widgets::ClickableList;

use super::{render_footer, render_title_bar, stage_color};

// ── Actions ────────────────────────────────────────────────────────────
pub const SHARE: u16 = 10;
pub const BACK_TO_HUB: u16 = 11;
pub const RESTART: u16 = 12;

/// What the results screen asks the shell to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultsEvent {
    Share,
    BackToHub,
    Restart,
}

pub fn handle_key(key: char) -> Option<ResultsEvent> {
    match key {
        's' => Some(ResultsEvent::Share),
        'h' => Some(ResultsEvent::BackToHub),
        'n' => Some(ResultsEvent::Restart),
        _ => None,
    }
}

pub fn handle_click(action_id: u16) -> Option<ResultsEvent> {
    match action_id {
        SHARE => Some(ResultsEvent::Share),
        BACK_TO_HUB => Some(ResultsEvent::BackToHub),
        RESTART => Some(ResultsEvent::Restart),
        _ => None,
    }
}

pub fn render(
    record: &ProgressRecord,
    quote: &str,
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
            Constraint::Min(10),   // summary
            Constraint::Length(3), // footer or toast
        ])
        .split(area);

    render_title_bar(f, chunks[0], "Итог: Внутренний путь", Color::Yellow);

    if is_narrow {
        render_summary(record, quote, f, chunks[1], true, click_state);
    } else {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);
        render_summary(record, quote, f, cols[0], false, click_state);
        render_final_portrait(record, f, cols[1]);
    }

    render_footer(f, chunks[2], toast, " S: поделиться. H: в хаб. N: заново.");
}

fn render_summary(
    record: &ProgressRecord,
    quote: &str,
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
        format!("Общий счёт: {}", record.total_score),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    list.push(Line::from(Span::styled(
        format!("Снято черт тени: {}/{}", record.devil_removed, STAGE_MAX),
        Style::default().fg(Color::Red),
    )));
    list.push(Line::from(Span::styled(
        format!(
            "Проявлено человеческих черт: {}/{}",
            record.human_gained, STAGE_MAX
        ),
        Style::default().fg(Color::Green),
    )));
    list.push(Line::from(""));
    list.push(Line::from(Span::styled(
        format!("«{}»", quote),
        Style::default().fg(Color::Cyan),
    )));
    list.push(Line::from(""));

    let buttons = [
        (" [S] ", "Поделиться результатом", Color::Cyan, SHARE),
        (" [H] ", "Вернуться в хаб", Color::White, BACK_TO_HUB),
        (" [N] ", "Начать заново", Color::Red, RESTART),
    ];
    for (key, label, color, action) in buttons {
        list.push_clickable(
            Line::from(vec![
                Span::styled(
                    key,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(label, Style::default().fg(color)),
            ]),
            action,
        );
    }

    let borders = if is_narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Результат ");

    let mut cs = click_state.borrow_mut();
    list.register_targets(area, &mut cs, 1, 1, 0, inner_width);
    let widget = Paragraph::new(list.into_lines())
        .wrap(Wrap { trim: false })
        .block(block);
    f.render_widget(widget, area);
}

fn render_final_portrait(record: &ProgressRecord, f: &mut Frame, area: Rect) {
    let stage = character::stage(record);
    let tint = Style::default().fg(stage_color(stage));

    let mut lines: Vec<Line> = character::portrait(stage)
        .iter()
        .map(|row| Line::from(Span::styled(*row, tint)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Путь пройден",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(" Персонаж "),
        );
    f.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_their_buttons() {
        assert_eq!(handle_key('s'), Some(ResultsEvent::Share));
        assert_eq!(handle_key('h'), Some(ResultsEvent::BackToHub));
        assert_eq!(handle_key('n'), Some(ResultsEvent::Restart));
        assert_eq!(handle_key('q'), None);
    }

    #[test]
    fn clicks_map_to_their_buttons() {
        assert_eq!(handle_click(SHARE), Some(ResultsEvent::Share));
        assert_eq!(handle_click(BACK_TO_HUB), Some(ResultsEvent::BackToHub));
        assert_eq!(handle_click(RESTART), Some(ResultsEvent::Restart));
        assert_eq!(handle_click(0), None);
    }
}
