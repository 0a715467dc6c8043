pub mod env {
    pub const ENVIRONMENT_ENV_VAR: &str = "VITAE_ENV";
    pub const ENV_PREFIX: &str = "VITAE";
    pub const ENV_SEPARATOR: &str = "__";
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
}

pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 3000;
    pub const TOKEN_TTL_HOURS: i64 = 12;
    pub const MAX_DB_CONNECTIONS: u32 = 5;

    pub mod hashing {
        pub const MEMORY_KIB: u32 = 15000;
        pub const ITERATIONS: u32 = 2;
        pub const PARALLELISM: u32 = 1;
    }
}
