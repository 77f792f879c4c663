//! In-memory workbook store
//!
//! The store owns all sheets and their rows. Every mutation returns a new
//! `Workbook` snapshot; previously returned snapshots are never touched.

pub mod workbook;

pub use workbook::Workbook;
