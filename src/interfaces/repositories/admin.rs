use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    entities::admin::{Admin, AdminInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxAdminRepo,
};

#[automock]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AppError>;
    async fn create(&self, admin: &AdminInsert) -> Result<Uuid, AppError>;
}

#[async_trait]
impl AdminRepository for SqlxAdminRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AppError> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn create(&self, admin: &AdminInsert) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO admins (email, password_hash, created_at) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&admin.email)
        .bind(&admin.password_hash)
        .bind(admin.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
                AppError::Conflict("Admin already exists".to_string())
            }
            _ => AppError::from(e),
        })?;

        Ok(id)
    }
}
