use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_JOB_STATUS: &str = "Active";

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary: Option<f64>,
    pub employment_type: String,
    pub experience_level: String,
    pub application_deadline: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A job posting after validation: canonical employment type and
/// experience level, deadline parsed under the strict date policy.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary: Option<f64>,
    pub employment_type: String,
    pub experience_level: String,
    pub application_deadline: Option<NaiveDate>,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct JobCreatedResponse {
    pub message: String,
    #[serde(rename = "jobId")]
    pub job_id: Uuid,
}
