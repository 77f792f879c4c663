//! Modal dialogs
//!
//! Each dialog owns its state struct; the state travels inside the
//! `ActiveDialog` variant so a dialog's fields can never outlive or
//! contradict the dialog being open.

pub mod confirm;
pub mod custom_range;
pub mod help;
pub mod rename;
pub mod row_form;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::widgets::TextInput;

/// What a dialog wants the app to do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    /// Keep the dialog open
    Open,
    /// Close without applying
    Cancel,
    /// Commit the dialog's content
    Submit,
}

/// Render a labeled text field with a cursor
pub(crate) fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &TextInput,
    focused: bool,
) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let value_style = Style::default().fg(Color::White);

    let mut spans = vec![Span::styled(format!("{}: ", label), label_style)];

    let value = input.value();
    if focused {
        let chars: Vec<char> = value.chars().collect();
        let cursor = input.cursor().min(chars.len());
        let before: String = chars[..cursor].iter().collect();
        let cursor_char = chars.get(cursor).copied().unwrap_or(' ');
        let after: String = chars.iter().skip(cursor + 1).collect();

        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::styled(after, value_style));
    } else if value.is_empty() {
        spans.push(Span::styled(
            input.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(value.to_string(), value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render an error line, if there is one
pub(crate) fn render_error(frame: &mut Frame, area: Rect, error: &Option<String>) {
    if let Some(error) = error {
        let line = Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Render the standard Enter/Esc hint line
pub(crate) fn render_hints(frame: &mut Frame, area: Rect, with_tab: bool) {
    let mut spans = Vec::new();
    if with_tab {
        spans.push(Span::styled("[Tab]", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" Next  "));
    }
    spans.push(Span::styled("[Enter]", Style::default().fg(Color::Green)));
    spans.push(Span::raw(" Save  "));
    spans.push(Span::styled("[Esc]", Style::default().fg(Color::Red)));
    spans.push(Span::raw(" Cancel"));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Route an editing key to a text input; returns false for unhandled keys
pub(crate) fn edit_input(input: &mut TextInput, key: crossterm::event::KeyCode) -> bool {
    use crossterm::event::KeyCode;
    match key {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}
