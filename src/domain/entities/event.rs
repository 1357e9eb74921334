use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub location: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub event_type: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An event after validation; the date went through the lenient policy and
/// is therefore always present.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedEvent {
    pub title: String,
    pub date: NaiveDate,
    pub location: String,
    pub event_type: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct EventCreatedResponse {
    pub message: String,
    #[serde(rename = "eventId")]
    pub event_id: Uuid,
}
