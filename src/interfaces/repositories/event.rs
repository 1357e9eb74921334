use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    entities::event::{Event, ValidatedEvent},
    errors::AppError,
    repositories::sqlx_repo::SqlxEventRepo,
};

#[automock]
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn insert(&self, record: &ValidatedEvent) -> Result<Uuid, AppError>;
    async fn list(&self) -> Result<Vec<Event>, AppError>;
    async fn get(&self, id: &Uuid) -> Result<Option<Event>, AppError>;
    async fn update(&self, id: &Uuid, record: &ValidatedEvent) -> Result<(), AppError>;
    async fn delete(&self, id: &Uuid) -> Result<(), AppError>;
}

#[async_trait]
impl EventRepository for SqlxEventRepo {
    async fn insert(&self, record: &ValidatedEvent) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"INSERT INTO events (title, date, location, "type", status)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id"#,
        )
        .bind(&record.title)
        .bind(record.date)
        .bind(&record.location)
        .bind(&record.event_type)
        .bind(&record.status)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY date ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn update(&self, id: &Uuid, record: &ValidatedEvent) -> Result<(), AppError> {
        sqlx::query(
            r#"UPDATE events SET
                title = $1, date = $2, location = $3, "type" = $4, status = $5,
                updated_at = now()
               WHERE id = $6"#,
        )
        .bind(&record.title)
        .bind(record.date)
        .bind(&record.location)
        .bind(&record.event_type)
        .bind(&record.status)
        .bind(id)
        .execute(&self.pool)
        .await
        .map(|_| ())
        .map_err(AppError::from)
    }

    async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }
}
