use super::cell::ImportRow;

/// Outcome of validating every row of one uploaded spreadsheet.
#[derive(Debug)]
pub struct BatchOutcome<T> {
    pub valid: Vec<T>,
    pub errors: Vec<String>,
}

impl<T> BatchOutcome<T> {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Run a row validator over every row, in order. Rows validate
/// independently; a failing row contributes one message and never stops
/// the scan, so the uploader gets the complete list of problems at once.
///
/// Whether the valid side may be persisted is the caller's call; the
/// all-or-nothing policy lives in the import handler, which refuses the
/// whole batch when `errors` is non-empty.
pub fn validate_batch<T, F>(rows: &[ImportRow], validate: F) -> BatchOutcome<T>
where
    F: Fn(&ImportRow) -> Result<T, String>,
{
    let mut valid = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();

    for row in rows {
        match validate(row) {
            Ok(record) => valid.push(record),
            Err(message) => errors.push(message),
        }
    }

    BatchOutcome { valid, errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::cell::CellValue;

    fn row(name: &str) -> ImportRow {
        let mut r = ImportRow::new();
        r.insert("name", CellValue::Text(name.to_string()));
        r
    }

    #[test]
    fn errors_keep_row_order() {
        let rows = vec![row("ok"), row("bad-1"), row("ok"), row("bad-2")];
        let outcome = validate_batch(&rows, |r| {
            let name = r.text_or_empty("name");
            if name.starts_with("bad") {
                Err(format!("rejected {}", name))
            } else {
                Ok(name)
            }
        });

        assert_eq!(outcome.valid, vec!["ok".to_string(), "ok".to_string()]);
        assert_eq!(
            outcome.errors,
            vec!["rejected bad-1".to_string(), "rejected bad-2".to_string()]
        );
        assert!(!outcome.is_clean());
    }

    #[test]
    fn clean_batch_has_every_row() {
        let rows = vec![row("a"), row("b")];
        let outcome = validate_batch(&rows, |r| Ok::<_, String>(r.text_or_empty("name")));
        assert!(outcome.is_clean());
        assert_eq!(outcome.valid.len(), 2);
    }
}
