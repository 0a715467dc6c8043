//! # Vitae - Authentication for the CV builder backend
//!
//! Facade crate re-exporting the public APIs of the auth components.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Account`, `AccountId`, etc.
//! - **Ports**: `IdentityStore`, `CredentialCodec`, `TokenIssuer`, `TokenVerifier`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase` and the `AccessGate`
//! - **Adapters**: `Argon2Codec`, `JwtTokenCodec`, `PostgresIdentityStore`, etc.
//! - **Service**: `AuthService` - The main entry point for the auth service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use vitae_core::*;
}

pub use vitae_core::{
    Account, AccountId, AuthError, AuthErrorKind, AuthenticatedSubject, Email, Password,
    ValidationError,
};

// ============================================================================
// Ports
// ============================================================================

pub use vitae_core::{
    CredentialCodec, IdentityStore, StoreError, TokenError, TokenIssuer, TokenVerifier,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use vitae_application::*;
}

pub use vitae_application::{AccessGate, LoginUseCase, RegisterUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers, middleware and extractors
    pub mod http {
        pub use vitae_axum::*;
    }

    /// Identity store implementations
    pub mod persistence {
        pub use vitae_adapters::persistence::*;
    }

    /// Password hashing
    pub mod credentials {
        pub use vitae_adapters::credentials::*;
    }

    /// Bearer tokens
    pub mod token {
        pub use vitae_adapters::token::*;
    }

    /// Configuration
    pub mod config {
        pub use vitae_adapters::config::*;
    }
}

pub use vitae_adapters::{
    Argon2Codec, HashMapIdentityStore, JwtConfig, JwtTokenCodec, PostgresIdentityStore,
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

pub use vitae_auth_service::{AuthService, get_postgres_pool, run_migrations};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
