use futures::future::try_join_all;
use uuid::Uuid;

use crate::entities::alumni::Alumni;
use crate::errors::AppError;
use crate::ingest::batch::validate_batch;
use crate::ingest::cell::ImportRow;
use crate::ingest::row::validate_alumni_row;
use crate::interfaces::repositories::alumni::AlumniRepository;

pub struct AlumniHandler<R: AlumniRepository> {
    pub repo: R,
}

impl<R: AlumniRepository> AlumniHandler<R> {
    pub fn new(repo: R) -> Self {
        AlumniHandler { repo }
    }

    /// Import a whole spreadsheet, all-or-nothing: if any row fails
    /// validation, nothing is persisted and every error is returned at
    /// once. A clean batch is inserted as independent concurrent writes;
    /// a write failure after that point is reported as one aggregate
    /// error, with no rollback of rows already committed.
    pub async fn import(&self, rows: Vec<ImportRow>) -> Result<usize, AppError> {
        let outcome = validate_batch(&rows, validate_alumni_row);
        if !outcome.is_clean() {
            return Err(AppError::InvalidBatch(outcome.errors));
        }

        let inserted = try_join_all(outcome.valid.iter().map(|record| self.repo.insert(record)))
            .await
            .map_err(|e| AppError::BulkInsert {
                message: "Error inserting alumni records".to_string(),
                error: e.to_string(),
            })?;

        tracing::info!(count = inserted.len(), "alumni batch imported");
        Ok(inserted.len())
    }

    /// Create one record from a JSON body, running the same validators the
    /// spreadsheet pipeline uses.
    pub async fn create(&self, body: ImportRow) -> Result<Uuid, AppError> {
        let record = validate_alumni_row(&body).map_err(AppError::InvalidInput)?;
        self.repo.insert(&record).await
    }

    pub async fn list(&self) -> Result<Vec<Alumni>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Alumni, AppError> {
        self.repo
            .get(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("Alumni not found".to_string()))
    }

    pub async fn update(&self, id: Uuid, body: ImportRow) -> Result<(), AppError> {
        let record = validate_alumni_row(&body).map_err(AppError::InvalidInput)?;
        self.repo.update(&id, &record).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(&id).await
    }
}
