use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_sheets::export;
use expense_sheets::tui;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal expense tracker with named sheets and spreadsheet export",
    long_about = "Expense Sheets is a terminal expense tracker. Keep one or \
                  more named sheets of dated expense rows, filter them by \
                  date range, watch the running totals, and export every \
                  sheet to spreadsheet-compatible files."
)]
struct Cli {
    /// Directory export files are written to (defaults to the download folder)
    #[arg(long, global = true, env = "EXPENSES_EXPORT_DIR")]
    export_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let export_dir = cli
        .export_dir
        .unwrap_or_else(export::default_export_dir);

    match cli.command {
        None | Some(Commands::Tui) => tui::run_tui(export_dir),
    }
}
