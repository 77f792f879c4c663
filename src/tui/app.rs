//! Application state for the TUI
//!
//! The App struct holds the workbook snapshot and everything needed for
//! rendering and handling events. Store mutations go through `commit`,
//! which swaps in the new snapshot and detects policy refusals by
//! comparing it with the old one.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::models::{ExpenseRow, FilterPeriod};
use crate::services::{aggregate, filter_rows, SheetTotals};
use crate::store::Workbook;

use super::dialogs::custom_range::CustomRangeState;
use super::dialogs::rename::RenameSheetState;
use super::dialogs::row_form::RowFormState;

/// Currently active dialog (if any)
///
/// Dialog state lives inside the variant, so "rename is open" and "which
/// sheet, which draft name" cannot disagree.
#[derive(Debug, Clone, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    RenameSheet(RenameSheetState),
    EditRow(RowFormState),
    CustomRange(CustomRangeState),
    ConfirmDeleteSheet(crate::models::SheetId),
}

/// Main application state
pub struct App {
    /// Current workbook snapshot
    pub workbook: Workbook,

    /// Selected filter period for the visible rows
    pub period: FilterPeriod,

    /// Selected row index within the visible (filtered) rows
    pub selected_row: usize,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status_message: Option<String>,

    /// Current calendar date; refreshed on tick, passed explicitly into
    /// filtering and store calls
    pub today: NaiveDate,

    /// Directory export files are written to
    pub export_dir: PathBuf,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create the app with a fresh one-sheet workbook
    pub fn new(today: NaiveDate, export_dir: PathBuf) -> Self {
        Self {
            workbook: Workbook::new(today),
            period: FilterPeriod::All,
            selected_row: 0,
            active_dialog: ActiveDialog::None,
            status_message: None,
            today,
            export_dir,
            should_quit: false,
        }
    }

    /// The active sheet's rows after filtering
    pub fn visible_rows(&self) -> Vec<ExpenseRow> {
        filter_rows(&self.workbook.active_sheet().rows, &self.period, self.today)
    }

    /// Totals over the visible rows
    pub fn visible_totals(&self) -> SheetTotals {
        aggregate(&self.visible_rows())
    }

    /// The currently selected visible row
    pub fn selected_visible_row(&self) -> Option<ExpenseRow> {
        self.visible_rows().get(self.selected_row).cloned()
    }

    /// Swap in a new snapshot
    ///
    /// Returns false (and shows `refusal`) when the operation was a policy
    /// no-op, which shows up as an unchanged snapshot.
    pub fn commit(&mut self, next: Workbook, refusal: &str) -> bool {
        if next == self.workbook {
            self.set_status(refusal);
            return false;
        }
        self.workbook = next;
        self.clamp_selection();
        true
    }

    /// Keep the selected row inside the visible range
    pub fn clamp_selection(&mut self) {
        let len = self.visible_rows().len();
        if len == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= len {
            self.selected_row = len - 1;
        }
    }

    /// Select the next visible row
    pub fn select_next_row(&mut self) {
        let len = self.visible_rows().len();
        if len > 0 && self.selected_row + 1 < len {
            self.selected_row += 1;
        }
    }

    /// Select the previous visible row
    pub fn select_prev_row(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Activate the next sheet in store order, wrapping around
    pub fn next_sheet(&mut self) {
        let index = (self.workbook.active_index() + 1) % self.workbook.sheets().len();
        let id = self.workbook.sheets()[index].id;
        self.workbook = self.workbook.set_active(id);
        self.clamp_selection();
    }

    /// Activate the previous sheet in store order, wrapping around
    pub fn prev_sheet(&mut self) {
        let count = self.workbook.sheets().len();
        let index = (self.workbook.active_index() + count - 1) % count;
        let id = self.workbook.sheets()[index].id;
        self.workbook = self.workbook.set_active(id);
        self.clamp_selection();
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the active dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is open
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Show a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Signal the main loop to exit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
