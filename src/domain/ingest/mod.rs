//! Spreadsheet ingestion pipeline: raw rows in, canonical records or a
//! complete list of per-row rejections out. Validation is pure computation;
//! persistence decisions live in the import use cases.

pub mod batch;
pub mod cell;
pub mod dates;
pub mod fields;
pub mod normalize;
pub mod row;
