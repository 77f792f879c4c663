//! YAML export
//!
//! The same full-workbook dump as the JSON export, in a format meant for
//! human eyes.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::ExpenseResult;
use crate::store::Workbook;

use super::json::full_export;

/// Write the full workbook as YAML
pub fn export_full_yaml<W: Write>(
    workbook: &Workbook,
    today: NaiveDate,
    writer: &mut W,
) -> ExpenseResult<()> {
    serde_yaml::to_writer(writer, &full_export(workbook, today))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::json::FullExport;

    #[test]
    fn test_yaml_roundtrip() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let workbook = Workbook::new(today);

        let mut buf = Vec::new();
        export_full_yaml(&workbook, today, &mut buf).unwrap();

        let parsed: FullExport = serde_yaml::from_slice(&buf).unwrap();
        assert_eq!(parsed, full_export(&workbook, today));
        assert!(String::from_utf8(buf).unwrap().contains("Sheet 1"));
    }
}
