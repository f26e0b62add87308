//! Full-screen views around the levels: hub, transformation, results.

pub mod hub;
pub mod results;
pub mod transform;

use ratzilla::ratatui::layout::{Alignment, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

/// Bordered one-line title bar.
pub(crate) fn render_title_bar(f: &mut Frame, area: Rect, title: &str, color: Color) {
    let widget = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

/// Footer bar: the toast when one is up, otherwise the screen's hint.
pub(crate) fn render_footer(f: &mut Frame, area: Rect, toast: Option<&str>, hint: &str) {
    let (text, color) = match toast {
        Some(toast) => (toast, Color::Yellow),
        None => (hint, Color::DarkGray),
    };
    let widget = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(color),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

/// Portrait tint per character stage: shadow red warming into human green.
pub(crate) fn stage_color(stage: u8) -> Color {
    match stage {
        0 | 1 => Color::Red,
        2 | 3 => Color::Yellow,
        _ => Color::Green,
    }
}
