use color_eyre::eyre::Result;
use secrecy::ExposeSecret;
use vitae_adapters::{
    Argon2Codec, HashMapIdentityStore, JwtTokenCodec, PostgresIdentityStore, config::Settings,
};
use vitae_auth_service::{AuthService, get_postgres_pool, run_migrations, tracing::init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;

    let codec = Argon2Codec::from_settings(&settings.auth.hashing)?;
    let token_codec = JwtTokenCodec::new(settings.auth.jwt_config()?);

    let auth_service = match &settings.database.url {
        Some(url) => {
            let pg_pool =
                get_postgres_pool(url.expose_secret(), settings.database.max_connections).await?;
            run_migrations(&pg_pool).await?;

            tracing::info!("Using PostgreSQL identity store");
            AuthService::new(PostgresIdentityStore::new(pg_pool), codec, token_codec)
        }
        None => {
            tracing::warn!("No database configured, accounts are kept in memory");
            AuthService::new(HashMapIdentityStore::new(), codec, token_codec)
        }
    };

    let listener = tokio::net::TcpListener::bind(settings.application.address()).await?;

    auth_service
        .run_standalone(listener, &settings.application.allowed_origins)
        .await?;

    Ok(())
}
