//! Totals over a row subset
//!
//! Computes sum, count, and average for whatever rows the caller hands in -
//! filtered rows for the on-screen totals, a whole sheet for export.

use crate::models::{ExpenseRow, Money};

/// Derived totals for a set of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetTotals {
    /// Sum of all amounts
    pub total: Money,

    /// Number of rows
    pub count: usize,

    /// `total / count` in integer cents; zero when there are no rows
    pub average: Money,
}

/// Compute totals over the given rows
pub fn aggregate(rows: &[ExpenseRow]) -> SheetTotals {
    let total: Money = rows.iter().map(|r| r.amount).sum();
    let count = rows.len();
    let average = if count > 0 {
        total / count as i64
    } else {
        Money::zero()
    };
    SheetTotals {
        total,
        count,
        average,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RowPatch;
    use chrono::NaiveDate;

    fn row(amount: i64) -> ExpenseRow {
        let mut row = ExpenseRow::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        row.apply(RowPatch::Amount(Money::from_units(amount)));
        row
    }

    #[test]
    fn test_aggregate() {
        let rows = vec![row(100), row(50)];
        let totals = aggregate(&rows);
        assert_eq!(totals.total, Money::from_units(150));
        assert_eq!(totals.count, 2);
        assert_eq!(totals.average, Money::from_units(75));
    }

    #[test]
    fn test_single_row() {
        let rows = vec![row(50)];
        let totals = aggregate(&rows);
        assert_eq!(totals.total, Money::from_units(50));
        assert_eq!(totals.count, 1);
        assert_eq!(totals.average, Money::from_units(50));
    }

    #[test]
    fn test_empty_rows_average_zero() {
        let totals = aggregate(&[]);
        assert_eq!(totals.total, Money::zero());
        assert_eq!(totals.count, 0);
        assert_eq!(totals.average, Money::zero());
    }

    #[test]
    fn test_average_is_total_over_count() {
        let rows = vec![row(10), row(20), row(33)];
        let totals = aggregate(&rows);
        assert_eq!(totals.average, totals.total / totals.count as i64);
    }

    #[test]
    fn test_negative_amounts() {
        let rows = vec![row(100), row(-25)];
        let totals = aggregate(&rows);
        assert_eq!(totals.total, Money::from_units(75));
    }
}
