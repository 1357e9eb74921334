use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Alumni {
    pub id: Uuid,
    pub name: String,
    pub graduation_year: i32,
    pub degree: String,
    pub email: String,
    pub job_status: String,
    pub company: String,
    pub job_level: String,
    pub phone_no: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One alumni record after every field passed validation: in-range year,
/// lowercased email, canonical job status/level, digit-checked phone in its
/// original formatting. Only ever built by the alumni row validator.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedAlumni {
    pub name: String,
    pub graduation_year: i32,
    pub degree: String,
    pub email: String,
    pub job_status: String,
    pub company: String,
    pub job_level: String,
    pub phone_no: String,
}

#[derive(Debug, Serialize)]
pub struct AlumniCreatedResponse {
    pub message: String,
    #[serde(rename = "alumniId")]
    pub alumni_id: Uuid,
}
