//! Expense row model
//!
//! A row is a single dated expense entry: date, amount, free-text reason.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::RowId;
use super::money::Money;

/// A single expense entry within a sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRow {
    /// Unique row ID
    pub id: RowId,

    /// Calendar date of the expense (no time component)
    pub date: NaiveDate,

    /// Amount spent; may be zero or negative
    pub amount: Money,

    /// Free-text reason for the expense
    pub reason: String,
}

impl ExpenseRow {
    /// Create a default row: the given date, zero amount, empty reason
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: RowId::new(),
            date,
            amount: Money::zero(),
            reason: String::new(),
        }
    }

    /// Replace a single field's value
    pub fn apply(&mut self, patch: RowPatch) {
        match patch {
            RowPatch::Date(date) => self.date = date,
            RowPatch::Amount(amount) => self.amount = amount,
            RowPatch::Reason(reason) => self.reason = reason,
        }
    }
}

/// A single-field update to an expense row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowPatch {
    Date(NaiveDate),
    Amount(Money),
    Reason(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_row_defaults() {
        let row = ExpenseRow::new(date(2024, 6, 15));
        assert_eq!(row.date, date(2024, 6, 15));
        assert!(row.amount.is_zero());
        assert!(row.reason.is_empty());
    }

    #[test]
    fn test_apply_patches() {
        let mut row = ExpenseRow::new(date(2024, 6, 15));
        row.apply(RowPatch::Amount(Money::from_units(42)));
        row.apply(RowPatch::Reason("groceries".into()));
        row.apply(RowPatch::Date(date(2024, 6, 14)));
        assert_eq!(row.amount, Money::from_units(42));
        assert_eq!(row.reason, "groceries");
        assert_eq!(row.date, date(2024, 6, 14));
    }

    #[test]
    fn test_row_date_serializes_as_iso() {
        let row = ExpenseRow::new(date(2024, 1, 5));
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["date"], "2024-01-05");
    }
}
