//! Business logic layer
//!
//! Pure functions over store snapshots: date filtering and totals. Both take
//! their inputs explicitly (including "today") and never read ambient state.

pub mod filter;
pub mod totals;

pub use filter::filter_rows;
pub use totals::{aggregate, SheetTotals};
