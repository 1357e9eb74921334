pub mod entities;
pub mod ingest;
pub mod use_cases;
