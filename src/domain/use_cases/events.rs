use futures::future::try_join_all;
use uuid::Uuid;

use crate::entities::event::Event;
use crate::errors::AppError;
use crate::ingest::batch::validate_batch;
use crate::ingest::cell::ImportRow;
use crate::ingest::row::{validate_event_row, EVENT_COLUMNS};
use crate::interfaces::repositories::event::EventRepository;

pub struct EventHandler<R: EventRepository> {
    pub repo: R,
}

impl<R: EventRepository> EventHandler<R> {
    pub fn new(repo: R) -> Self {
        EventHandler { repo }
    }

    /// All-or-nothing spreadsheet import. Event sheets additionally fail
    /// fast, before any row is examined, when the header is missing one of
    /// the required columns.
    pub async fn import(&self, rows: Vec<ImportRow>) -> Result<usize, AppError> {
        let missing: Vec<&str> = EVENT_COLUMNS
            .iter()
            .filter(|col| !rows.first().is_some_and(|row| row.has_column(col)))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Invalid Excel file format, missing columns: {}",
                missing.join(", ")
            )));
        }

        let outcome = validate_batch(&rows, validate_event_row);
        if !outcome.is_clean() {
            return Err(AppError::InvalidBatch(outcome.errors));
        }

        let inserted = try_join_all(outcome.valid.iter().map(|record| self.repo.insert(record)))
            .await
            .map_err(|e| AppError::BulkInsert {
                message: "Error inserting events".to_string(),
                error: e.to_string(),
            })?;

        tracing::info!(count = inserted.len(), "event batch imported");
        Ok(inserted.len())
    }

    pub async fn create(&self, body: ImportRow) -> Result<Uuid, AppError> {
        let record = validate_event_row(&body).map_err(AppError::InvalidInput)?;
        self.repo.insert(&record).await
    }

    pub async fn list(&self) -> Result<Vec<Event>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Event, AppError> {
        self.repo
            .get(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    pub async fn update(&self, id: Uuid, body: ImportRow) -> Result<(), AppError> {
        let record = validate_event_row(&body).map_err(AppError::InvalidInput)?;
        self.repo.update(&id, &record).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(&id).await
    }
}
