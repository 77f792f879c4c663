//! TUI views
//!
//! The sheet tab bar, the expense table for the active sheet, and the
//! status bar, plus dialog dispatch.

pub mod status_bar;
pub mod table;
pub mod tabs;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    tabs::render(frame, app, layout.tabs);
    table::render(frame, app, layout.table);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render the active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match &app.active_dialog {
        ActiveDialog::Help => {
            dialogs::help::render(frame);
        }
        ActiveDialog::RenameSheet(state) => {
            dialogs::rename::render(frame, state);
        }
        ActiveDialog::EditRow(state) => {
            dialogs::row_form::render(frame, state);
        }
        ActiveDialog::CustomRange(state) => {
            dialogs::custom_range::render(frame, state);
        }
        ActiveDialog::ConfirmDeleteSheet(id) => {
            let name = app
                .workbook
                .sheet(*id)
                .map(|s| s.name.as_str())
                .unwrap_or("sheet");
            dialogs::confirm::render(frame, name);
        }
        ActiveDialog::None => {}
    }
}
