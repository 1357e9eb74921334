use actix_multipart::form::{tempfile::TempFile, MultipartForm};

/// One uploaded spreadsheet, field name `file`. Extension checking happens
/// in the handlers before the workbook is opened.
#[derive(Debug, MultipartForm)]
pub struct SpreadsheetUpload {
    #[multipart(rename = "file", limit = "10MB")]
    pub file: TempFile,
}
