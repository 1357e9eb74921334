use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    entities::alumni::{Alumni, ValidatedAlumni},
    errors::AppError,
    repositories::sqlx_repo::SqlxAlumniRepo,
};

#[automock]
#[async_trait]
pub trait AlumniRepository: Send + Sync {
    /// Insert one validated record, returning the generated id. Bulk
    /// imports issue one call per record; there is no transactional
    /// insert-many (documented best-effort gap).
    async fn insert(&self, record: &ValidatedAlumni) -> Result<Uuid, AppError>;
    async fn list(&self) -> Result<Vec<Alumni>, AppError>;
    async fn get(&self, id: &Uuid) -> Result<Option<Alumni>, AppError>;
    async fn update(&self, id: &Uuid, record: &ValidatedAlumni) -> Result<(), AppError>;
    async fn delete(&self, id: &Uuid) -> Result<(), AppError>;
}

#[async_trait]
impl AlumniRepository for SqlxAlumniRepo {
    async fn insert(&self, record: &ValidatedAlumni) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"INSERT INTO alumni
                (name, graduation_year, degree, email, job_status, company, job_level, phone_no)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING id"#,
        )
        .bind(&record.name)
        .bind(record.graduation_year)
        .bind(&record.degree)
        .bind(&record.email)
        .bind(&record.job_status)
        .bind(&record.company)
        .bind(&record.job_level)
        .bind(&record.phone_no)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Alumni>, AppError> {
        sqlx::query_as::<_, Alumni>("SELECT * FROM alumni ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Alumni>, AppError> {
        sqlx::query_as::<_, Alumni>("SELECT * FROM alumni WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn update(&self, id: &Uuid, record: &ValidatedAlumni) -> Result<(), AppError> {
        sqlx::query(
            r#"UPDATE alumni SET
                name = $1, graduation_year = $2, degree = $3, email = $4,
                job_status = $5, company = $6, job_level = $7, phone_no = $8,
                updated_at = now()
               WHERE id = $9"#,
        )
        .bind(&record.name)
        .bind(record.graduation_year)
        .bind(&record.degree)
        .bind(&record.email)
        .bind(&record.job_status)
        .bind(&record.company)
        .bind(&record.job_level)
        .bind(&record.phone_no)
        .bind(id)
        .execute(&self.pool)
        .await
        .map(|_| ())
        .map_err(AppError::from)
    }

    async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM alumni WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }
}
