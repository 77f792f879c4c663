//! Sheet tab bar
//!
//! One tab per sheet, the active sheet highlighted.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::tui::app::App;

/// Render the sheet tab bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = app
        .workbook
        .sheets()
        .iter()
        .map(|sheet| Line::from(format!(" {} ", sheet.name)))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.workbook.active_index())
        .block(
            Block::default()
                .title(" Expense Sheets ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}
