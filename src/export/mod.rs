//! Export module for Expense Sheets
//!
//! Provides complete workbook export in multiple formats:
//! - CSV: one spreadsheet-compatible file per sheet, with a trailing TOTAL row
//! - JSON: machine-readable full workbook export
//! - YAML: human-readable full workbook export
//!
//! File names embed the export date (`<label>_<YYYY-MM-DD>.<ext>`); a second
//! export on the same day overwrites the first.

pub mod csv;
pub mod json;
pub mod table;
pub mod yaml;

pub use csv::{export_workbook_csv, write_sheet_csv};
pub use json::{export_full_json, FullExport, SheetExport, EXPORT_SCHEMA_VERSION};
pub use table::{sheet_records, EXPORT_HEADER, TOTAL_LABEL};
pub use yaml::export_full_yaml;

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use directories::UserDirs;

use crate::error::ExpenseResult;
use crate::store::Workbook;

/// Label used for the workbook-level export files
const WORKBOOK_LABEL: &str = "expenses";

/// Build an export file name: `<label>_<YYYY-MM-DD>.<ext>`
///
/// The label is sanitized for the file system; path separators and
/// whitespace become underscores.
pub fn file_name(label: &str, date: NaiveDate, ext: &str) -> String {
    let sanitized: String = label
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect();
    format!("{}_{}.{}", sanitized, date.format("%Y-%m-%d"), ext)
}

/// The default directory for export files
///
/// The platform download folder when one exists, otherwise the current
/// directory.
pub fn default_export_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Export the whole workbook into `dir` in every supported format
///
/// Writes one CSV per sheet plus a JSON and a YAML dump of the full
/// workbook. Returns the paths written.
pub fn export_all(workbook: &Workbook, dir: &Path, today: NaiveDate) -> ExpenseResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = export_workbook_csv(workbook, dir, today)?;

    let json_path = dir.join(file_name(WORKBOOK_LABEL, today, "json"));
    export_full_json(workbook, today, &mut File::create(&json_path)?)?;
    written.push(json_path);

    let yaml_path = dir.join(file_name(WORKBOOK_LABEL, today, "yaml"));
    export_full_yaml(workbook, today, &mut File::create(&yaml_path)?)?;
    written.push(yaml_path);

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_file_name_embeds_date() {
        assert_eq!(
            file_name("Sheet 1", date(2024, 6, 15), "csv"),
            "Sheet_1_2024-06-15.csv"
        );
    }

    #[test]
    fn test_file_name_sanitizes_separators() {
        assert_eq!(
            file_name("a/b\\c:d", date(2024, 1, 2), "json"),
            "a_b_c_d_2024-01-02.json"
        );
    }

    #[test]
    fn test_export_all_writes_every_format() {
        let dir = tempfile::tempdir().unwrap();
        let today = date(2024, 6, 15);
        let workbook = Workbook::new(today).add_sheet(today);

        let written = export_all(&workbook, dir.path(), today).unwrap();

        // Two sheets, one CSV each, plus JSON and YAML dumps.
        assert_eq!(written.len(), 4);
        for path in &written {
            assert!(path.exists(), "missing export file {}", path.display());
        }
        assert!(dir.path().join("Sheet_1_2024-06-15.csv").exists());
        assert!(dir.path().join("Sheet_2_2024-06-15.csv").exists());
        assert!(dir.path().join("expenses_2024-06-15.json").exists());
        assert!(dir.path().join("expenses_2024-06-15.yaml").exists());
    }

    #[test]
    fn test_same_day_export_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let today = date(2024, 6, 15);
        let workbook = Workbook::new(today);

        let first = export_all(&workbook, dir.path(), today).unwrap();
        let second = export_all(&workbook, dir.path(), today).unwrap();
        assert_eq!(first, second);
    }
}
