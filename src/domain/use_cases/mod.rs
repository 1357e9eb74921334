pub mod alumni;
pub mod auth;
pub mod events;
pub mod extractors;
pub mod jobs;
