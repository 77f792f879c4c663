//! Expense table for the active sheet
//!
//! Shows the visible (filtered) rows with a totals footer, like the
//! original form's table with its trailing totals line.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::App;

/// Render the expense table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let sheet_name = app.workbook.active_sheet().name.clone();
    let block = Block::default()
        .title(format!(" {} ", sheet_name))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let rows = app.visible_rows();
    if rows.is_empty() {
        let text = Paragraph::new("No rows match the current filter. Press 'f' to change it.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Length(14), // Amount
        Constraint::Min(20),    // Reason
    ];

    let header = Row::new(vec![
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Reason").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let data_rows: Vec<Row> = rows
        .iter()
        .map(|row| {
            let amount_style = if row.amount.is_negative() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(vec![
                Cell::from(row.date.format("%Y-%m-%d").to_string()),
                Cell::from(row.amount.to_string()).style(amount_style),
                Cell::from(truncate(&row.reason, area.width.saturating_sub(30) as usize)),
            ])
        })
        .collect();

    let totals = app.visible_totals();
    let footer = Row::new(vec![
        Cell::from("TOTAL").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from(totals.total.to_string()).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::from(format!("{} rows, avg {}", totals.count, totals.average))
            .style(Style::default().fg(Color::DarkGray)),
    ])
    .style(Style::default().fg(Color::Cyan));

    let table = Table::new(data_rows, widths)
        .header(header)
        .footer(footer)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(app.selected_row));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Truncate a string to a maximum character count
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
