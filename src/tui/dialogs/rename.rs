//! Sheet rename dialog
//!
//! A single name input. Enter commits; a whitespace-only name keeps the
//! dialog open with an inline error; Esc cancels.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::models::SheetId;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::{edit_input, render_error, render_hints, render_text_field, DialogResult};

/// State for the rename dialog
#[derive(Debug, Clone)]
pub struct RenameSheetState {
    /// Sheet being renamed
    pub target: SheetId,

    /// Name input, prefilled with the current name
    pub input: TextInput,

    /// Error message to display
    pub error: Option<String>,
}

impl RenameSheetState {
    /// Create a rename state for the given sheet
    pub fn new(target: SheetId, current_name: &str) -> Self {
        Self {
            target,
            input: TextInput::new()
                .placeholder("Sheet name")
                .content(current_name),
            error: None,
        }
    }

    /// Validate the entered name, returning it trimmed
    pub fn validate(&self) -> Result<String, String> {
        let name = self.input.value().trim();
        if name.is_empty() {
            return Err("Sheet name is required".to_string());
        }
        Ok(name.to_string())
    }
}

/// Handle a key press inside the dialog
pub fn handle_key(state: &mut RenameSheetState, key: KeyEvent) -> DialogResult {
    match key.code {
        KeyCode::Enter => DialogResult::Submit,
        KeyCode::Esc => DialogResult::Cancel,
        code => {
            if edit_input(&mut state.input, code) {
                state.error = None;
            }
            DialogResult::Open
        }
    }
}

/// Render the rename dialog
pub fn render(frame: &mut Frame, state: &RenameSheetState) {
    let area = centered_rect_fixed(44, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Rename Sheet ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name field
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    render_text_field(frame, chunks[0], "Name", &state.input, true);
    render_error(frame, chunks[2], &state.error);
    render_hints(frame, chunks[3], false);
}
