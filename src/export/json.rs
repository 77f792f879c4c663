//! JSON export
//!
//! Machine-readable dump of the whole workbook, including per-sheet totals.
//! The schema version guards readers against future layout changes.

use std::io::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ExpenseResult;
use crate::models::{ExpenseRow, Money, SheetId};
use crate::store::Workbook;

/// Version of the export file layout
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// Complete workbook export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for forward compatibility
    pub schema_version: u32,

    /// Date the export was produced
    pub exported_on: NaiveDate,

    /// Every sheet, in store order
    pub sheets: Vec<SheetExport>,
}

/// One sheet within a full export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetExport {
    pub id: SheetId,
    pub name: String,
    pub rows: Vec<ExpenseRow>,

    /// Unfiltered sum over every row of the sheet
    pub total: Money,
}

/// Build the export value for a workbook
pub fn full_export(workbook: &Workbook, today: NaiveDate) -> FullExport {
    FullExport {
        schema_version: EXPORT_SCHEMA_VERSION,
        exported_on: today,
        sheets: workbook
            .sheets()
            .iter()
            .map(|sheet| SheetExport {
                id: sheet.id,
                name: sheet.name.clone(),
                rows: sheet.rows.clone(),
                total: sheet.total(),
            })
            .collect(),
    }
}

/// Write the full workbook as pretty-printed JSON
pub fn export_full_json<W: Write>(
    workbook: &Workbook,
    today: NaiveDate,
    writer: &mut W,
) -> ExpenseResult<()> {
    serde_json::to_writer_pretty(writer, &full_export(workbook, today))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RowPatch;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_export_includes_totals() {
        let today = date(2024, 6, 15);
        let workbook = Workbook::new(today);
        let sheet_id = workbook.active_id();
        let row_id = workbook.active_sheet().rows[0].id;
        let workbook =
            workbook.update_row(sheet_id, row_id, RowPatch::Amount(Money::from_units(150)));

        let export = full_export(&workbook, today);
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.exported_on, today);
        assert_eq!(export.sheets.len(), 1);
        assert_eq!(export.sheets[0].total, Money::from_units(150));
    }

    #[test]
    fn test_json_roundtrip() {
        let today = date(2024, 6, 15);
        let workbook = Workbook::new(today).add_sheet(today);

        let mut buf = Vec::new();
        export_full_json(&workbook, today, &mut buf).unwrap();

        let parsed: FullExport = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, full_export(&workbook, today));
    }
}
