pub mod alumni;
pub mod auth;
pub mod events;
pub mod home;
pub mod jobs;
pub mod system;
