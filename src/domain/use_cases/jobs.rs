use futures::future::try_join_all;
use uuid::Uuid;

use crate::entities::job::Job;
use crate::errors::AppError;
use crate::ingest::batch::validate_batch;
use crate::ingest::cell::ImportRow;
use crate::ingest::row::validate_job_row;
use crate::interfaces::repositories::job::JobRepository;

pub struct JobHandler<R: JobRepository> {
    pub repo: R,
}

impl<R: JobRepository> JobHandler<R> {
    pub fn new(repo: R) -> Self {
        JobHandler { repo }
    }

    /// All-or-nothing spreadsheet import; see `AlumniHandler::import` for
    /// the batch policy. Job deadlines go through the strict date policy.
    pub async fn import(&self, rows: Vec<ImportRow>) -> Result<usize, AppError> {
        let outcome = validate_batch(&rows, validate_job_row);
        if !outcome.is_clean() {
            return Err(AppError::InvalidBatch(outcome.errors));
        }

        let inserted = try_join_all(outcome.valid.iter().map(|record| self.repo.insert(record)))
            .await
            .map_err(|e| AppError::BulkInsert {
                message: "Error inserting jobs".to_string(),
                error: e.to_string(),
            })?;

        tracing::info!(count = inserted.len(), "job batch imported");
        Ok(inserted.len())
    }

    pub async fn create(&self, body: ImportRow) -> Result<Uuid, AppError> {
        let record = validate_job_row(&body).map_err(AppError::InvalidInput)?;
        self.repo.insert(&record).await
    }

    pub async fn list(&self) -> Result<Vec<Job>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Job, AppError> {
        self.repo
            .get(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("Job not found".to_string()))
    }

    pub async fn update(&self, id: Uuid, body: ImportRow) -> Result<(), AppError> {
        let record = validate_job_row(&body).map_err(AppError::InvalidInput)?;
        self.repo.update(&id, &record).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(&id).await
    }
}
