//! Tabular records for a sheet export
//!
//! Turns a sheet into the records a spreadsheet writer consumes: the
//! Date/Amount/Reason header, one record per row in store order, and a
//! trailing TOTAL record.

use crate::models::Sheet;

/// Column header shared by every exported sheet
pub const EXPORT_HEADER: [&str; 3] = ["Date", "Amount", "Reason"];

/// Literal label in the date column of the trailing totals record
pub const TOTAL_LABEL: &str = "TOTAL";

/// Build the data records for a sheet, ending with the TOTAL record
///
/// The total always covers every row of the sheet; any on-screen filter is
/// irrelevant here.
pub fn sheet_records(sheet: &Sheet) -> Vec<[String; 3]> {
    let mut records: Vec<[String; 3]> = sheet
        .rows
        .iter()
        .map(|row| {
            [
                row.date.format("%Y-%m-%d").to_string(),
                row.amount.to_string(),
                row.reason.clone(),
            ]
        })
        .collect();

    records.push([
        TOTAL_LABEL.to_string(),
        sheet.total().to_string(),
        String::new(),
    ]);
    records
}
