//! Axum integration for the Vitae authentication core.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  vitae_application: use cases, AccessGate    │
//! └──────────────┬───────────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────────┐
//! │  vitae_axum: Axum implementations            │
//! │  - register / login / me routes              │
//! │  - require_auth middleware                   │
//! │  - CurrentSubject extractor                  │
//! │  - AuthApiError -> HTTP status mapping       │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use axum::{Router, middleware, routing::{get, post}};
//! use vitae_axum::{middleware::require_auth, routes};
//!
//! let protected = Router::new()
//!     .route("/user/me", get(routes::me))
//!     .route_layer(middleware::from_fn_with_state(gate, require_auth::<JwtTokenCodec>));
//! ```

pub mod error;
pub mod extractor;
pub mod middleware;
pub mod routes;

pub use error::{AuthApiError, ErrorResponse};
pub use extractor::CurrentSubject;
pub use middleware::require_auth;
