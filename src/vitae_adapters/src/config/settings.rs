use ::config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use chrono::Duration;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::constants::{defaults, env};
use crate::token::JwtConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub auth: AuthSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    /// Empty means any origin is accepted.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: Secret<String>,
    pub token_ttl_hours: i64,
    pub hashing: HashingSettings,
}

impl AuthSettings {
    pub fn jwt_config(&self) -> Result<JwtConfig, ConfigError> {
        Ok(JwtConfig::new(self.jwt_secret.clone()).with_ttl(self.token_ttl()?))
    }

    fn token_ttl(&self) -> Result<Duration, ConfigError> {
        Duration::try_hours(self.token_ttl_hours).ok_or_else(|| {
            ConfigError::Message("auth.token_ttl_hours is out of range".to_string())
        })
    }
}

/// Argon2 work factor for new hashes.
#[derive(Debug, Clone, Deserialize)]
pub struct HashingSettings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Without a URL the service runs on the in-memory store.
    #[serde(default)]
    pub url: Option<Secret<String>>,
    pub max_connections: u32,
}

impl Settings {
    /// Load settings from `.env`, the optional `config/base.json` and
    /// `config/<VITAE_ENV>.json` files, and `VITAE__*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment =
            std::env::var(env::ENVIRONMENT_ENV_VAR).unwrap_or_else(|_| "local".to_string());

        let builder = Config::builder()
            .add_source(File::with_name("config/base").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator(env::ENV_SEPARATOR)
                    .separator(env::ENV_SEPARATOR)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("application.allowed_origins"),
            )
            .set_override_option(
                "auth.jwt_secret",
                std::env::var(env::JWT_SECRET_ENV_VAR).ok(),
            )?
            .set_override_option(
                "database.url",
                std::env::var(env::DATABASE_URL_ENV_VAR).ok(),
            )?;

        Self::from_builder(builder)
    }

    /// Apply defaults on top of the given sources and validate the result.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Settings = builder
            .set_default("application.host", defaults::HOST)?
            .set_default("application.port", i64::from(defaults::PORT))?
            .set_default("application.allowed_origins", Vec::<String>::new())?
            .set_default("auth.token_ttl_hours", defaults::TOKEN_TTL_HOURS)?
            .set_default(
                "auth.hashing.memory_kib",
                i64::from(defaults::hashing::MEMORY_KIB),
            )?
            .set_default(
                "auth.hashing.iterations",
                i64::from(defaults::hashing::ITERATIONS),
            )?
            .set_default(
                "auth.hashing.parallelism",
                i64::from(defaults::hashing::PARALLELISM),
            )?
            .set_default(
                "database.max_connections",
                i64::from(defaults::MAX_DB_CONNECTIONS),
            )?
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.jwt_secret.expose_secret().is_empty() {
            return Err(ConfigError::Message(
                "auth.jwt_secret must not be empty".to_string(),
            ));
        }
        if self.auth.token_ttl_hours <= 0 {
            return Err(ConfigError::Message(
                "auth.token_ttl_hours must be positive".to_string(),
            ));
        }
        self.auth.token_ttl()?;
        Ok(())
    }
}
