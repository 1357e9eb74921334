pub mod admin;
pub mod alumni;
pub mod event;
pub mod job;
pub mod sqlx_repo;
