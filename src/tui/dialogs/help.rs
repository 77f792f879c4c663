//! Help overlay
//!
//! Lists the key bindings. Any key closes it.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

const BINDINGS: &[(&str, &str)] = &[
    ("j / Down", "Select next row"),
    ("k / Up", "Select previous row"),
    ("h / Left", "Previous sheet"),
    ("l / Right", "Next sheet"),
    ("a", "Add row"),
    ("e / Enter", "Edit selected row"),
    ("d", "Delete selected row"),
    ("n", "New sheet"),
    ("r", "Rename sheet"),
    ("x", "Delete sheet"),
    ("f", "Cycle filter period"),
    ("c", "Custom filter range"),
    ("s", "Export all sheets"),
    ("?", "This help"),
    ("q", "Quit"),
];

/// Render the help overlay
pub fn render(frame: &mut Frame) {
    let height = BINDINGS.len() as u16 + 4;
    let area = centered_rect_fixed(44, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![Line::from("")];
    for (keys, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:11}", keys), Style::default().fg(Color::Yellow)),
            Span::raw(*action),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
