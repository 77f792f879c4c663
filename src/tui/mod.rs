//! Terminal User Interface module
//!
//! A full-screen TUI built with ratatui: a tab bar of sheets, the expense
//! table for the active sheet with a totals footer, a status bar, and
//! modal dialogs for editing.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
