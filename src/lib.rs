//! Expense Sheets - terminal expense tracking
//!
//! This library backs the `expenses` binary: a terminal application for
//! keeping one or more named sheets of dated expense rows, with running
//! totals, date-range filtering of the visible rows, and export of every
//! sheet to spreadsheet-compatible files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (sheets, rows, amounts, filter periods)
//! - `store`: The in-memory workbook store (snapshot-per-mutation)
//! - `services`: Row filtering and totals
//! - `export`: CSV/JSON/YAML export of the whole workbook
//! - `tui`: The ratatui-based terminal interface
//!
//! All state lives in memory for the lifetime of the process. Store
//! mutations never fail; invariant violations (deleting the last sheet or a
//! sheet's last row, renaming to an empty name) come back as unchanged
//! snapshots rather than errors.

pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod store;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
