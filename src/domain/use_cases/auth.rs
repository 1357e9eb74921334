use chrono::Utc;
use validator::Validate;

use crate::auth::jwt::JwtService;
use crate::auth::password::{hash_password, verify_password};
use crate::entities::admin::{AdminCredentials, AdminInsert, AuthResponse};
use crate::errors::{AppError, AuthError};
use crate::interfaces::repositories::admin::AdminRepository;

pub struct AuthHandler<R: AdminRepository> {
    pub admin_repo: R,
    jwt_service: JwtService,
}

impl<R: AdminRepository> AuthHandler<R> {
    pub fn new(admin_repo: R, jwt_service: JwtService) -> Self {
        AuthHandler {
            admin_repo,
            jwt_service,
        }
    }

    /// Registers a new admin; duplicate emails are a conflict.
    pub async fn signup(&self, request: AdminCredentials) -> Result<AuthResponse, AppError> {
        request
            .validate()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        let password_hash = hash_password(&request.password)?;
        let insert = AdminInsert {
            email: request.email.to_lowercase(),
            password_hash,
            created_at: Utc::now(),
        };

        let id = self.admin_repo.create(&insert).await?;
        let admin = self
            .admin_repo
            .find_by_email(&insert.email)
            .await?
            .ok_or_else(|| AppError::InternalError("Admin vanished after insert".to_string()))?;

        let token = self
            .jwt_service
            .create_jwt(&admin)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        tracing::info!(%id, "admin registered");
        Ok(AuthResponse {
            message: "Admin registered successfully".to_string(),
            token,
        })
    }

    /// Validates credentials and returns a fresh access token. Unknown
    /// email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, request: AdminCredentials) -> Result<AuthResponse, AuthError> {
        request.validate()?;

        let admin = self
            .admin_repo
            .find_by_email(&request.email.to_lowercase())
            .await
            .map_err(|_| AuthError::WrongCredentials)?
            .ok_or(AuthError::WrongCredentials)?;

        let valid = verify_password(&request.password, &admin.password_hash)
            .map_err(|_| AuthError::WrongCredentials)?;
        if !valid {
            return Err(AuthError::WrongCredentials);
        }

        let token = self.jwt_service.create_jwt(&admin).map_err(|e| {
            tracing::warn!("failed to create JWT: {}", e);
            AuthError::TokenCreation
        })?;

        tracing::info!("admin logged in");
        Ok(AuthResponse {
            message: "Login successful".to_string(),
            token,
        })
    }
}
