//! Core data models for Expense Sheets
//!
//! This module contains the data structures that represent the expense
//! domain: sheets, rows, amounts, and filter periods.

pub mod ids;
pub mod money;
pub mod period;
pub mod row;
pub mod sheet;

pub use ids::{RowId, SheetId};
pub use money::Money;
pub use period::FilterPeriod;
pub use row::{ExpenseRow, RowPatch};
pub use sheet::Sheet;
