//! Custom date range dialog
//!
//! Two date inputs for the custom filter period. Either bound may be left
//! empty - an empty bound means the filter applies no restriction at all.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::models::FilterPeriod;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::{edit_input, render_error, render_hints, render_text_field, DialogResult};

/// Which bound is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeField {
    #[default]
    From,
    To,
}

impl RangeField {
    pub fn other(self) -> Self {
        match self {
            Self::From => Self::To,
            Self::To => Self::From,
        }
    }
}

/// State for the custom range dialog
#[derive(Debug, Clone)]
pub struct CustomRangeState {
    /// From-date input (may stay empty)
    pub from_input: TextInput,

    /// To-date input (may stay empty)
    pub to_input: TextInput,

    /// Currently focused field
    pub focused: RangeField,

    /// Error message to display
    pub error: Option<String>,
}

impl CustomRangeState {
    /// Create a range state, prefilled when the current period is custom
    pub fn from_period(period: &FilterPeriod) -> Self {
        let (from, to) = match period {
            FilterPeriod::Custom { from, to } => (*from, *to),
            _ => (None, None),
        };
        let fmt = |d: Option<NaiveDate>| {
            d.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };
        Self {
            from_input: TextInput::new()
                .placeholder("YYYY-MM-DD (empty = open)")
                .content(fmt(from)),
            to_input: TextInput::new()
                .placeholder("YYYY-MM-DD (empty = open)")
                .content(fmt(to)),
            focused: RangeField::From,
            error: None,
        }
    }

    /// Parse the two bounds; empty inputs become `None`
    pub fn bounds(&self) -> Result<(Option<NaiveDate>, Option<NaiveDate>), String> {
        let parse = |input: &TextInput, label: &str| {
            let value = input.value().trim();
            if value.is_empty() {
                return Ok(None);
            }
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| format!("{} must be YYYY-MM-DD", label))
        };
        Ok((parse(&self.from_input, "From")?, parse(&self.to_input, "To")?))
    }

    fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused {
            RangeField::From => &mut self.from_input,
            RangeField::To => &mut self.to_input,
        }
    }
}

/// Handle a key press inside the dialog
pub fn handle_key(state: &mut CustomRangeState, key: KeyEvent) -> DialogResult {
    match key.code {
        KeyCode::Enter => DialogResult::Submit,
        KeyCode::Esc => DialogResult::Cancel,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            state.focused = state.focused.other();
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

/// Render the custom range dialog
pub fn render(frame: &mut Frame, state: &CustomRangeState) {
    let area = centered_rect_fixed(52, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Custom Filter Range ")
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
            Constraint::Length(1), // From
            Constraint::Length(1), // To
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    render_text_field(
        frame,
        chunks[0],
        "From",
        &state.from_input,
        state.focused == RangeField::From,
    );
    render_text_field(
        frame,
        chunks[1],
        "To",
        &state.to_input,
        state.focused == RangeField::To,
    );
    render_error(frame, chunks[3], &state.error);
    render_hints(frame, chunks[4], true);
}
