mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, ingest, use_cases};
pub use infrastructure::{auth, db, spreadsheet};
pub use interfaces::{handlers, middlewares, repositories, routes};

use auth::jwt::JwtService;
use repositories::sqlx_repo::{SqlxAdminRepo, SqlxAlumniRepo, SqlxEventRepo, SqlxJobRepo};
use use_cases::{alumni::AlumniHandler, auth::AuthHandler, events::EventHandler, jobs::JobHandler};

pub type AppAuthHandler = AuthHandler<SqlxAdminRepo>;
pub type AppAlumniHandler = AlumniHandler<SqlxAlumniRepo>;
pub type AppJobHandler = JobHandler<SqlxJobRepo>;
pub type AppEventHandler = EventHandler<SqlxEventRepo>;

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub alumni_handler: AppAlumniHandler,
    pub job_handler: AppJobHandler,
    pub event_handler: AppEventHandler,
    pub jwt_service: JwtService,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let jwt_service = JwtService::new(config);

        AppState {
            auth_handler: AuthHandler::new(SqlxAdminRepo::new(pool.clone()), jwt_service.clone()),
            alumni_handler: AlumniHandler::new(SqlxAlumniRepo::new(pool.clone())),
            job_handler: JobHandler::new(SqlxJobRepo::new(pool.clone())),
            event_handler: EventHandler::new(SqlxEventRepo::new(pool)),
            jwt_service,
        }
    }
}
