//! Row edit dialog
//!
//! Modal form for a single expense row: date, amount, reason. Tab cycles
//! fields, Enter saves, Esc cancels. An unparsable amount coerces to zero;
//! a malformed date keeps the dialog open with an inline error.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::models::{ExpenseRow, Money, RowId, RowPatch};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::{edit_input, render_error, render_hints, render_text_field, DialogResult};

/// Which field is currently focused in the row form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowField {
    #[default]
    Date,
    Amount,
    Reason,
}

impl RowField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Amount => Self::Reason,
            Self::Reason => Self::Date,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Reason,
            Self::Amount => Self::Date,
            Self::Reason => Self::Amount,
        }
    }
}

/// State for the row edit dialog
#[derive(Debug, Clone)]
pub struct RowFormState {
    /// Row being edited
    pub row_id: RowId,

    /// Currently focused field
    pub focused: RowField,

    /// Date input (YYYY-MM-DD)
    pub date_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,

    /// Reason input
    pub reason_input: TextInput,

    /// Error message to display
    pub error: Option<String>,
}

impl RowFormState {
    /// Create a form prefilled from an existing row
    pub fn for_row(row: &ExpenseRow) -> Self {
        Self {
            row_id: row.id,
            focused: RowField::Date,
            date_input: TextInput::new()
                .placeholder("YYYY-MM-DD")
                .content(row.date.format("%Y-%m-%d").to_string()),
            amount_input: TextInput::new()
                .placeholder("0")
                .content(row.amount.to_string()),
            reason_input: TextInput::new()
                .placeholder("What was this for?")
                .content(row.reason.clone()),
            error: None,
        }
    }

    /// The input belonging to the focused field
    fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused {
            RowField::Date => &mut self.date_input,
            RowField::Amount => &mut self.amount_input,
            RowField::Reason => &mut self.reason_input,
        }
    }

    /// Build the field patches from the form
    ///
    /// The amount field coerces to zero rather than failing; only a
    /// malformed non-empty date is an error.
    pub fn patches(&self) -> Result<Vec<RowPatch>, String> {
        let date = NaiveDate::parse_from_str(self.date_input.value().trim(), "%Y-%m-%d")
            .map_err(|_| "Date must be YYYY-MM-DD".to_string())?;
        let amount = Money::parse_or_zero(self.amount_input.value());
        let reason = self.reason_input.value().to_string();
        Ok(vec![
            RowPatch::Date(date),
            RowPatch::Amount(amount),
            RowPatch::Reason(reason),
        ])
    }
}

/// Handle a key press inside the dialog
pub fn handle_key(state: &mut RowFormState, key: KeyEvent) -> DialogResult {
    match key.code {
        KeyCode::Enter => DialogResult::Submit,
        KeyCode::Esc => DialogResult::Cancel,
        KeyCode::Tab | KeyCode::Down => {
            state.focused = state.focused.next();
            DialogResult::Open
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focused = state.focused.prev();
            DialogResult::Open
        }
        code => {
            if edit_input(state.focused_input_mut(), code) {
                state.error = None;
            }
            DialogResult::Open
        }
    }
}

/// Render the row edit dialog
pub fn render(frame: &mut Frame, state: &RowFormState) {
    let area = centered_rect_fixed(50, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Edit Row ")
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
            Constraint::Length(1), // Date
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Reason
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    render_text_field(
        frame,
        chunks[0],
        "Date",
        &state.date_input,
        state.focused == RowField::Date,
    );
    render_text_field(
        frame,
        chunks[1],
        "Amount",
        &state.amount_input,
        state.focused == RowField::Amount,
    );
    render_text_field(
        frame,
        chunks[2],
        "Reason",
        &state.reason_input,
        state.focused == RowField::Reason,
    );
    render_error(frame, chunks[4], &state.error);
    render_hints(frame, chunks[5], true);
}
