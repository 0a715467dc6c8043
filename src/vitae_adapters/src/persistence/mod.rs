pub mod hashmap_identity_store;
pub mod postgres_identity_store;

pub use hashmap_identity_store::HashMapIdentityStore;
pub use postgres_identity_store::PostgresIdentityStore;
