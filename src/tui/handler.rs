//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state: dialog keys first, normal-mode keys otherwise.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::export;
use crate::models::FilterPeriod;

use super::app::{ActiveDialog, App};
use super::dialogs::rename::RenameSheetState;
use super::dialogs::row_form::RowFormState;
use super::dialogs::{custom_range, rename, row_form, DialogResult};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            // The date can roll over mid-session; services still get it
            // passed in explicitly.
            app.today = chrono::Local::now().date_naive();
            app.clamp_selection();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        handle_dialog_key(app, key)
    } else {
        handle_normal_key(app, key)
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        // Help
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Row navigation
        KeyCode::Char('j') | KeyCode::Down => app.select_next_row(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev_row(),

        // Sheet navigation
        KeyCode::Char('h') | KeyCode::Left => app.prev_sheet(),
        KeyCode::Char('l') | KeyCode::Right => app.next_sheet(),

        // Row operations
        KeyCode::Char('a') => {
            app.workbook = app.workbook.add_row(app.workbook.active_id(), app.today);
            app.set_status("Row added");
        }
        KeyCode::Char('d') => delete_selected_row(app),
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(row) = app.selected_visible_row() {
                app.open_dialog(ActiveDialog::EditRow(RowFormState::for_row(&row)));
            } else {
                app.set_status("No row selected");
            }
        }

        // Sheet operations
        KeyCode::Char('n') => {
            app.workbook = app.workbook.add_sheet(app.today);
            app.selected_row = 0;
            app.set_status(format!("Added \"{}\"", app.workbook.active_sheet().name));
        }
        KeyCode::Char('r') => {
            let sheet = app.workbook.active_sheet();
            let state = RenameSheetState::new(sheet.id, &sheet.name);
            app.open_dialog(ActiveDialog::RenameSheet(state));
        }
        KeyCode::Char('x') => {
            if app.workbook.sheets().len() == 1 {
                app.set_status("The last sheet cannot be deleted");
            } else {
                app.open_dialog(ActiveDialog::ConfirmDeleteSheet(app.workbook.active_id()));
            }
        }

        // Filtering
        KeyCode::Char('f') => {
            app.period = app.period.next();
            app.clamp_selection();
        }
        KeyCode::Char('c') => {
            app.open_dialog(ActiveDialog::CustomRange(
                custom_range::CustomRangeState::from_period(&app.period),
            ));
        }

        // Export
        KeyCode::Char('s') => export_workbook(app),

        _ => {}
    }
    Ok(())
}

/// Delete the selected visible row, surfacing the last-row refusal
fn delete_selected_row(app: &mut App) {
    let Some(row) = app.selected_visible_row() else {
        app.set_status("No row selected");
        return;
    };
    let next = app.workbook.delete_row(app.workbook.active_id(), row.id);
    if app.commit(next, "A sheet keeps at least one row") {
        app.set_status("Row deleted");
    }
}

/// Export every sheet and report the outcome in the status bar
fn export_workbook(app: &mut App) {
    match export::export_all(&app.workbook, &app.export_dir, app.today) {
        Ok(paths) => app.set_status(format!(
            "Exported {} files to {}",
            paths.len(),
            app.export_dir.display()
        )),
        Err(err) => app.set_status(format!("Export failed: {}", err)),
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let dialog = std::mem::take(&mut app.active_dialog);
    match dialog {
        ActiveDialog::None => {}

        // Close help on any key
        ActiveDialog::Help => {}

        ActiveDialog::ConfirmDeleteSheet(id) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                let name = app
                    .workbook
                    .sheet(id)
                    .map(|s| s.name.clone())
                    .unwrap_or_default();
                let next = app.workbook.delete_sheet(id);
                if app.commit(next, "The last sheet cannot be deleted") {
                    app.set_status(format!("Deleted \"{}\"", name));
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {}
            _ => app.active_dialog = ActiveDialog::ConfirmDeleteSheet(id),
        },

        ActiveDialog::RenameSheet(mut state) => match rename::handle_key(&mut state, key) {
            DialogResult::Open => app.active_dialog = ActiveDialog::RenameSheet(state),
            DialogResult::Cancel => {}
            DialogResult::Submit => match state.validate() {
                Ok(name) => {
                    app.workbook = app.workbook.rename_sheet(state.target, &name);
                    app.set_status(format!("Renamed to \"{}\"", name));
                }
                Err(error) => {
                    // Refused: the dialog stays open.
                    state.error = Some(error);
                    app.active_dialog = ActiveDialog::RenameSheet(state);
                }
            },
        },

        ActiveDialog::EditRow(mut state) => match row_form::handle_key(&mut state, key) {
            DialogResult::Open => app.active_dialog = ActiveDialog::EditRow(state),
            DialogResult::Cancel => {}
            DialogResult::Submit => match state.patches() {
                Ok(patches) => {
                    let sheet_id = app.workbook.active_id();
                    for patch in patches {
                        app.workbook = app.workbook.update_row(sheet_id, state.row_id, patch);
                    }
                    app.clamp_selection();
                    app.set_status("Row updated");
                }
                Err(error) => {
                    state.error = Some(error);
                    app.active_dialog = ActiveDialog::EditRow(state);
                }
            },
        },

        ActiveDialog::CustomRange(mut state) => match custom_range::handle_key(&mut state, key) {
            DialogResult::Open => app.active_dialog = ActiveDialog::CustomRange(state),
            DialogResult::Cancel => {}
            DialogResult::Submit => match state.bounds() {
                Ok((from, to)) => {
                    app.period = FilterPeriod::custom(from, to);
                    app.clamp_selection();
                }
                Err(error) => {
                    state.error = Some(error);
                    app.active_dialog = ActiveDialog::CustomRange(state);
                }
            },
        },
    }
    Ok(())
}
