//! Status bar view
//!
//! Shows the active filter, sheet position, transient messages, and key
//! hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(" Filter: ", Style::default().fg(Color::White)),
        Span::styled(
            app.period.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!(
                "Sheet {}/{}",
                app.workbook.active_index() + 1,
                app.workbook.sheets().len()
            ),
            Style::default().fg(Color::White),
        ),
    ];

    if let Some(message) = &app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            "a:Add  e:Edit  d:Delete  f:Filter  s:Export  ?:Help",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
