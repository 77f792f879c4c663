//! Sheet deletion confirmation
//!
//! Yes/no prompt shown before a sheet and all its rows are removed.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

/// Render the delete-sheet confirmation dialog
pub fn render(frame: &mut Frame, sheet_name: &str) {
    let message = format!("Delete \"{}\" and all its rows?", sheet_name);
    let width = (message.chars().count() as u16 + 6).clamp(40, 60);
    let area = centered_rect_fixed(width, 7, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete Sheet ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Red)),
            Span::raw(" Delete  "),
            Span::styled("[N / Esc]", Style::default().fg(Color::Green)),
            Span::raw(" Keep it"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
