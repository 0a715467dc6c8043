pub mod config;
pub mod credentials;
pub mod persistence;
pub mod token;

pub use credentials::Argon2Codec;
pub use persistence::{HashMapIdentityStore, PostgresIdentityStore};
pub use token::{JwtConfig, JwtTokenCodec};
