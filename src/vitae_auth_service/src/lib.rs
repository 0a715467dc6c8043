mod auth_service;
mod helpers;
pub mod tracing;

pub use auth_service::AuthService;
pub use helpers::{get_postgres_pool, run_migrations};
