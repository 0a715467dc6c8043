//! Axum-specific route handlers.
//!
//! These routes use Axum's extractors to pull data out of requests, run the
//! framework-agnostic use cases and convert the results into responses.

pub mod health;
pub mod login;
pub mod me;
pub mod register;

pub use health::health;
pub use login::login;
pub use me::me;
pub use register::register;
