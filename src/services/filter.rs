//! Row filtering
//!
//! Derives the visible subset of a sheet's rows from the selected filter
//! period. Order is preserved; `today` is injected by the caller.

use chrono::NaiveDate;

use crate::models::{ExpenseRow, FilterPeriod};

/// Filter rows by period, preserving store order
pub fn filter_rows(rows: &[ExpenseRow], period: &FilterPeriod, today: NaiveDate) -> Vec<ExpenseRow> {
    rows.iter()
        .filter(|row| period.contains(row.date, today))
        .cloned()
        .collect()
}
