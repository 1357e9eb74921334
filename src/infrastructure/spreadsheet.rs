use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::errors::AppError;
use crate::ingest::cell::{CellValue, ImportRow};

/// Read the first worksheet of an `.xlsx`/`.xls` file into import rows.
///
/// The first row is the header; every later row becomes an [`ImportRow`]
/// keyed by header text. Truly empty cells are omitted from the row (the
/// column is then absent, which is what required-presence checks test),
/// numeric cells stay numeric, and date-formatted cells surface as their
/// raw serial number so the date validators can decode them.
pub fn read_rows(path: &Path) -> Result<Vec<ImportRow>, AppError> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| AppError::Spreadsheet(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::Spreadsheet("Workbook contains no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| AppError::Spreadsheet(e.to_string()))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect(),
        None => return Ok(Vec::new()),
    };

    let mut parsed = Vec::new();
    for row in rows {
        let mut import_row = ImportRow::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            if header.is_empty() {
                continue;
            }
            if let Some(value) = convert_cell(cell) {
                import_row.insert(header.clone(), value);
            }
        }
        // Blank spreadsheet lines are not records.
        if headers.iter().any(|h| import_row.has_column(h)) {
            parsed.push(import_row);
        }
    }

    Ok(parsed)
}

fn convert_cell(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::Bool(b) => Some(CellValue::Text(b.to_string())),
        // Date-formatted cells keep their serial value; the row validators
        // decide how (and whether) to decode it.
        Data::DateTime(dt) => Some(CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) => Some(CellValue::Text(s.clone())),
        Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        Data::Error(e) => Some(CellValue::Text(format!("{:?}", e))),
    }
}

/// Extension gate applied before the workbook is opened.
pub fn is_excel_file(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            ext == "xlsx" || ext == "xls"
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_gate_accepts_excel_only() {
        assert!(is_excel_file("alumni.xlsx"));
        assert!(is_excel_file("Alumni.XLS"));
        assert!(!is_excel_file("alumni.csv"));
        assert!(!is_excel_file("alumni"));
    }
}
