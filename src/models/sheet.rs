//! Sheet model
//!
//! A sheet is a named, ordered collection of expense rows. Every sheet keeps
//! at least one row; the store enforces that by refusing the last deletion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{RowId, SheetId};
use super::money::Money;
use super::row::ExpenseRow;

/// A named collection of expense rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    /// Unique sheet ID
    pub id: SheetId,

    /// Display name
    pub name: String,

    /// Rows in insertion order
    pub rows: Vec<ExpenseRow>,
}

impl Sheet {
    /// Create a sheet with one default row
    pub fn new(name: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            id: SheetId::new(),
            name: name.into(),
            rows: vec![ExpenseRow::new(today)],
        }
    }

    /// Sum of all row amounts, ignoring any filter
    pub fn total(&self) -> Money {
        self.rows.iter().map(|r| r.amount).sum()
    }

    /// Look up a row by ID
    pub fn row(&self, id: RowId) -> Option<&ExpenseRow> {
        self.rows.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RowPatch;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_sheet_has_one_row() {
        let sheet = Sheet::new("Sheet 1", date(2024, 6, 15));
        assert_eq!(sheet.name, "Sheet 1");
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.rows[0].date, date(2024, 6, 15));
    }

    #[test]
    fn test_total_ignores_nothing() {
        let mut sheet = Sheet::new("Sheet 1", date(2024, 6, 15));
        sheet.rows[0].apply(RowPatch::Amount(Money::from_units(100)));
        let mut second = ExpenseRow::new(date(2024, 6, 16));
        second.apply(RowPatch::Amount(Money::from_units(-25)));
        sheet.rows.push(second);
        assert_eq!(sheet.total(), Money::from_units(75));
    }

    #[test]
    fn test_row_lookup() {
        let sheet = Sheet::new("Sheet 1", date(2024, 6, 15));
        let id = sheet.rows[0].id;
        assert!(sheet.row(id).is_some());
        assert!(sheet.row(RowId::new()).is_none());
    }
}
