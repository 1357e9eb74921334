use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// A raw cell value, exactly as parsed from a spreadsheet or a JSON body.
/// Numeric cells stay numeric so serial dates can be told apart from date
/// strings downstream. Deserializes untagged: strings become `Text`,
/// numbers `Number`, null `Empty`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Stringified form used by normalization and error messages.
    pub fn to_display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            // Integral numbers print without a trailing ".0" so messages
            // read like the source spreadsheet.
            CellValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            CellValue::Number(n) => format!("{}", n),
            CellValue::Empty => String::new(),
        }
    }

    /// False for an empty cell, a blank string, or zero, mirroring how
    /// free-form spreadsheet data treats "nothing here".
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Text(s) => !s.trim().is_empty(),
            CellValue::Number(n) => *n != 0.0,
            CellValue::Empty => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display())
    }
}

/// One record keyed by column header, either a spreadsheet line or a JSON
/// create/update body. Transient: built by the workbook reader or the JSON
/// extractor, consumed once by a row validator, then dropped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ImportRow {
    cells: BTreeMap<String, CellValue>,
}

impl ImportRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// The column exists at all, even if blank. Distinct from
    /// [`ImportRow::is_truthy`]: alumni uploads require mere presence while
    /// job uploads require a usable value.
    pub fn has_column(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    pub fn is_truthy(&self, column: &str) -> bool {
        self.cells.get(column).is_some_and(CellValue::is_truthy)
    }

    /// Trimmed text content of a column, empty string when absent.
    pub fn text_or_empty(&self, column: &str) -> String {
        self.cells
            .get(column)
            .map(|c| c.to_display().trim().to_string())
            .unwrap_or_default()
    }

    /// Raw-row dump for "missing required fields" diagnostics.
    pub fn dump(&self) -> String {
        let fields: Vec<String> = self
            .cells
            .iter()
            .map(|(k, v)| format!("\"{}\": \"{}\"", k, v))
            .collect();
        format!("{{{}}}", fields.join(", "))
    }
}

impl FromIterator<(String, CellValue)> for ImportRow {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        ImportRow {
            cells: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_is_not_truthiness() {
        let mut row = ImportRow::new();
        row.insert("company", CellValue::Text("".into()));

        assert!(row.has_column("company"));
        assert!(!row.is_truthy("company"));
        assert!(!row.has_column("jobLevel"));
    }

    #[test]
    fn integral_numbers_display_without_fraction() {
        assert_eq!(CellValue::Number(2019.0).to_display(), "2019");
        assert_eq!(CellValue::Number(2.5).to_display(), "2.5");
    }

    #[test]
    fn dump_includes_every_cell() {
        let mut row = ImportRow::new();
        row.insert("name", CellValue::Text("Ada".into()));
        row.insert("graduationYear", CellValue::Number(2019.0));

        let dump = row.dump();
        assert!(dump.contains("\"name\": \"Ada\""));
        assert!(dump.contains("\"graduationYear\": \"2019\""));
    }
}
