use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Canonical vocabularies for categorical fields. Loaded once, never
/// mutated; normalization resolves free-form input against these with
/// first match winning.
pub const VALID_JOB_STATUSES: &[&str] =
    &["employed", "unemployed", "freelancing", "studying", "retired"];

pub const VALID_JOB_LEVELS: &[&str] =
    &["entry", "junior", "mid-level", "senior", "executive", "n/a"];

pub const VALID_EMPLOYMENT_TYPES: &[&str] =
    &["full-time", "part-time", "contract", "freelance", "internship"];

pub const VALID_EXPERIENCE_LEVELS: &[&str] =
    &["entry", "junior", "mid-level", "senior", "executive"];
