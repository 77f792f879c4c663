//! The workbook: an ordered collection of sheets with one active sheet
//!
//! Mutations are whole-value: each operation clones the workbook, applies
//! the change, and returns the result. Callers replace their copy with the
//! returned snapshot; comparing the two with `==` tells whether the
//! operation was refused.
//!
//! Invariants, upheld by every operation:
//! - at least one sheet exists
//! - every sheet has at least one row
//! - the active ID always references an existing sheet

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ExpenseRow, RowId, RowPatch, Sheet, SheetId};

/// The sheet store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    sheets: Vec<Sheet>,
    active: SheetId,
}

impl Workbook {
    /// Create a workbook with a single sheet holding one default row
    pub fn new(today: NaiveDate) -> Self {
        let sheet = Sheet::new("Sheet 1", today);
        let active = sheet.id;
        Self {
            sheets: vec![sheet],
            active,
        }
    }

    /// All sheets in store order
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// The active sheet's ID
    pub fn active_id(&self) -> SheetId {
        self.active
    }

    /// Index of the active sheet in store order
    pub fn active_index(&self) -> usize {
        self.sheets
            .iter()
            .position(|s| s.id == self.active)
            .unwrap_or(0)
    }

    /// The active sheet
    pub fn active_sheet(&self) -> &Sheet {
        &self.sheets[self.active_index()]
    }

    /// Look up a sheet by ID
    pub fn sheet(&self, id: SheetId) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.id == id)
    }

    /// Append a new sheet with one default row and make it active
    pub fn add_sheet(&self, today: NaiveDate) -> Self {
        let mut next = self.clone();
        let sheet = Sheet::new(format!("Sheet {}", self.sheets.len() + 1), today);
        next.active = sheet.id;
        next.sheets.push(sheet);
        next
    }

    /// Remove a sheet
    ///
    /// Refused (unchanged snapshot) when it is the only sheet. When the
    /// active sheet is removed, the first remaining sheet becomes active.
    pub fn delete_sheet(&self, id: SheetId) -> Self {
        if self.sheets.len() == 1 {
            return self.clone();
        }
        let mut next = self.clone();
        next.sheets.retain(|s| s.id != id);
        if next.active == id {
            next.active = next.sheets[0].id;
        }
        next
    }

    /// Replace a sheet's display name with the trimmed input
    ///
    /// Refused when the trimmed name is empty or the ID is unknown.
    pub fn rename_sheet(&self, id: SheetId, name: &str) -> Self {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return self.clone();
        }
        let mut next = self.clone();
        if let Some(sheet) = next.sheets.iter_mut().find(|s| s.id == id) {
            sheet.name = trimmed.to_string();
        }
        next
    }

    /// Make the given sheet active; unknown IDs are a no-op
    pub fn set_active(&self, id: SheetId) -> Self {
        let mut next = self.clone();
        if next.sheets.iter().any(|s| s.id == id) {
            next.active = id;
        }
        next
    }

    /// Append a default row (today's date, zero amount, empty reason)
    pub fn add_row(&self, sheet_id: SheetId, today: NaiveDate) -> Self {
        let mut next = self.clone();
        if let Some(sheet) = next.sheets.iter_mut().find(|s| s.id == sheet_id) {
            sheet.rows.push(ExpenseRow::new(today));
        }
        next
    }

    /// Remove a row by ID
    ///
    /// Refused (unchanged snapshot) when it is the sheet's last row.
    pub fn delete_row(&self, sheet_id: SheetId, row_id: RowId) -> Self {
        let mut next = self.clone();
        if let Some(sheet) = next.sheets.iter_mut().find(|s| s.id == sheet_id) {
            if sheet.rows.len() > 1 {
                sheet.rows.retain(|r| r.id != row_id);
            }
        }
        next
    }

    /// Replace a single field on the matching row; unmatched IDs are a no-op
    pub fn update_row(&self, sheet_id: SheetId, row_id: RowId, patch: RowPatch) -> Self {
        let mut next = self.clone();
        if let Some(sheet) = next.sheets.iter_mut().find(|s| s.id == sheet_id) {
            if let Some(row) = sheet.rows.iter_mut().find(|r| r.id == row_id) {
                row.apply(patch);
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 6, 15)
    }

    #[test]
    fn test_new_workbook_invariants() {
        let wb = Workbook::new(today());
        assert_eq!(wb.sheets().len(), 1);
        assert_eq!(wb.sheets()[0].rows.len(), 1);
        assert_eq!(wb.active_id(), wb.sheets()[0].id);
        assert_eq!(wb.active_sheet().name, "Sheet 1");
    }

    #[test]
    fn test_add_sheet_activates_it() {
        let wb = Workbook::new(today());
        let wb2 = wb.add_sheet(today());
        assert_eq!(wb2.sheets().len(), 2);
        assert_eq!(wb2.active_sheet().name, "Sheet 2");
        assert_eq!(wb2.active_sheet().rows.len(), 1);
        // The original snapshot is untouched.
        assert_eq!(wb.sheets().len(), 1);
    }

    #[test]
    fn test_delete_last_sheet_refused() {
        let wb = Workbook::new(today());
        let id = wb.active_id();
        let wb2 = wb.delete_sheet(id);
        assert_eq!(wb, wb2);
    }

    #[test]
    fn test_delete_active_sheet_reactivates_first() {
        let wb = Workbook::new(today()).add_sheet(today()).add_sheet(today());
        let active = wb.active_id();
        let first = wb.sheets()[0].id;
        let wb2 = wb.delete_sheet(active);
        assert_eq!(wb2.sheets().len(), 2);
        assert_eq!(wb2.active_id(), first);
    }

    #[test]
    fn test_delete_inactive_sheet_keeps_active() {
        let wb = Workbook::new(today()).add_sheet(today());
        let first = wb.sheets()[0].id;
        let active = wb.active_id();
        let wb2 = wb.delete_sheet(first);
        assert_eq!(wb2.sheets().len(), 1);
        assert_eq!(wb2.active_id(), active);
    }

    #[test]
    fn test_rename_sheet() {
        let wb = Workbook::new(today());
        let id = wb.active_id();
        let wb2 = wb.rename_sheet(id, "  Groceries  ");
        assert_eq!(wb2.active_sheet().name, "Groceries");
    }

    #[test]
    fn test_rename_to_whitespace_refused() {
        let wb = Workbook::new(today());
        let id = wb.active_id();
        let wb2 = wb.rename_sheet(id, "   ");
        assert_eq!(wb, wb2);
    }

    #[test]
    fn test_add_row_appends_default() {
        let wb = Workbook::new(today());
        let id = wb.active_id();
        let wb2 = wb.add_row(id, date(2024, 6, 16));
        assert_eq!(wb2.active_sheet().rows.len(), 2);
        let new_row = &wb2.active_sheet().rows[1];
        assert_eq!(new_row.date, date(2024, 6, 16));
        assert!(new_row.amount.is_zero());
        assert!(new_row.reason.is_empty());
    }

    #[test]
    fn test_delete_last_row_refused() {
        let wb = Workbook::new(today());
        let sheet_id = wb.active_id();
        let row_id = wb.active_sheet().rows[0].id;
        let wb2 = wb.delete_row(sheet_id, row_id);
        assert_eq!(wb, wb2);
        assert_eq!(wb2.active_sheet().rows[0].id, row_id);
    }

    #[test]
    fn test_delete_row() {
        let wb = Workbook::new(today());
        let sheet_id = wb.active_id();
        let wb2 = wb.add_row(sheet_id, today());
        let first_row = wb2.active_sheet().rows[0].id;
        let wb3 = wb2.delete_row(sheet_id, first_row);
        assert_eq!(wb3.active_sheet().rows.len(), 1);
        assert!(wb3.active_sheet().row(first_row).is_none());
    }

    #[test]
    fn test_update_row_single_field() {
        let wb = Workbook::new(today());
        let sheet_id = wb.active_id();
        let row_id = wb.active_sheet().rows[0].id;
        let wb2 = wb.update_row(sheet_id, row_id, RowPatch::Amount(Money::from_units(100)));
        assert_eq!(wb2.active_sheet().rows[0].amount, Money::from_units(100));
        // Other fields untouched.
        assert_eq!(wb2.active_sheet().rows[0].date, today());
        // Original snapshot untouched.
        assert!(wb.active_sheet().rows[0].amount.is_zero());
    }

    #[test]
    fn test_update_unknown_row_is_noop() {
        let wb = Workbook::new(today());
        let sheet_id = wb.active_id();
        let wb2 = wb.update_row(sheet_id, RowId::new(), RowPatch::Reason("x".into()));
        assert_eq!(wb, wb2);
    }

    #[test]
    fn test_set_active() {
        let wb = Workbook::new(today()).add_sheet(today());
        let first = wb.sheets()[0].id;
        let wb2 = wb.set_active(first);
        assert_eq!(wb2.active_id(), first);
        // Unknown IDs leave the active sheet alone.
        let wb3 = wb2.set_active(SheetId::new());
        assert_eq!(wb3.active_id(), first);
    }

    #[test]
    fn test_invariants_hold_after_operation_sequence() {
        let today = today();
        let mut wb = Workbook::new(today);
        let ops: &[fn(&Workbook, NaiveDate) -> Workbook] = &[
            |w, t| w.add_sheet(t),
            |w, t| w.add_row(w.active_id(), t),
            |w, _| w.delete_row(w.active_id(), w.active_sheet().rows[0].id),
            |w, _| w.delete_sheet(w.active_id()),
            |w, _| w.rename_sheet(w.active_id(), ""),
            |w, _| w.delete_sheet(w.active_id()),
            |w, _| w.delete_row(w.active_id(), w.active_sheet().rows[0].id),
        ];
        for op in ops {
            wb = op(&wb, today);
            assert!(!wb.sheets().is_empty());
            assert!(wb.sheets().iter().all(|s| !s.rows.is_empty()));
            assert!(wb.sheet(wb.active_id()).is_some());
        }
    }
}
