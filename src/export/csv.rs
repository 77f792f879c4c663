//! CSV export
//!
//! Writes one spreadsheet-compatible CSV file per sheet: the Date/Amount/
//! Reason header, every row in store order, and the trailing TOTAL record.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::ExpenseResult;
use crate::models::Sheet;
use crate::store::Workbook;

use super::table::{sheet_records, EXPORT_HEADER};

/// Write a single sheet as CSV
pub fn write_sheet_csv<W: Write>(sheet: &Sheet, writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(EXPORT_HEADER)?;
    for record in sheet_records(sheet) {
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Export every sheet of the workbook as `<sheet-name>_<date>.csv` in `dir`
///
/// Returns the paths written, in sheet order.
pub fn export_workbook_csv(
    workbook: &Workbook,
    dir: &Path,
    today: NaiveDate,
) -> ExpenseResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(workbook.sheets().len());
    for sheet in workbook.sheets() {
        let path = dir.join(super::file_name(&sheet.name, today, "csv"));
        write_sheet_csv(sheet, File::create(&path)?)?;
        written.push(path);
    }
    Ok(written)
}
