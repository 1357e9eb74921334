use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    entities::job::{Job, ValidatedJob},
    errors::AppError,
    repositories::sqlx_repo::SqlxJobRepo,
};

#[automock]
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn insert(&self, record: &ValidatedJob) -> Result<Uuid, AppError>;
    async fn list(&self) -> Result<Vec<Job>, AppError>;
    async fn get(&self, id: &Uuid) -> Result<Option<Job>, AppError>;
    async fn update(&self, id: &Uuid, record: &ValidatedJob) -> Result<(), AppError>;
    async fn delete(&self, id: &Uuid) -> Result<(), AppError>;
}

#[async_trait]
impl JobRepository for SqlxJobRepo {
    async fn insert(&self, record: &ValidatedJob) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"INSERT INTO jobs
                (title, company, location, description, salary,
                 employment_type, experience_level, application_deadline, status)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
               RETURNING id"#,
        )
        .bind(&record.title)
        .bind(&record.company)
        .bind(&record.location)
        .bind(&record.description)
        .bind(record.salary)
        .bind(&record.employment_type)
        .bind(&record.experience_level)
        .bind(record.application_deadline)
        .bind(&record.status)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Job>, AppError> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Job>, AppError> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn update(&self, id: &Uuid, record: &ValidatedJob) -> Result<(), AppError> {
        sqlx::query(
            r#"UPDATE jobs SET
                title = $1, company = $2, location = $3, description = $4,
                salary = $5, employment_type = $6, experience_level = $7,
                application_deadline = $8, status = $9, updated_at = now()
               WHERE id = $10"#,
        )
        .bind(&record.title)
        .bind(&record.company)
        .bind(&record.location)
        .bind(&record.description)
        .bind(record.salary)
        .bind(&record.employment_type)
        .bind(&record.experience_level)
        .bind(record.application_deadline)
        .bind(&record.status)
        .bind(id)
        .execute(&self.pool)
        .await
        .map(|_| ())
        .map_err(AppError::from)
    }

    async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }
}
