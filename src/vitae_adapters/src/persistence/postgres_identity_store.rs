use secrecy::Secret;
use sqlx::{PgPool, Row, postgres::PgRow};
use vitae_core::{Account, AccountId, Email, IdentityStore, NewAccount, PasswordHash, StoreError};

#[derive(Clone)]
pub struct PostgresIdentityStore {
    pool: PgPool,
}

impl PostgresIdentityStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresIdentityStore { pool }
    }
}

#[async_trait::async_trait]
impl IdentityStore for PostgresIdentityStore {
    #[tracing::instrument(name = "Retrieving account from PostgreSQL", skip_all)]
    async fn find_by_handle(&self, email: &Email) -> Result<Option<Account>, StoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, email, password_hash
                FROM accounts
                WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::UnexpectedError(e.to_string()))?;

        row.map(account_from_row).transpose()
    }

    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn create(&self, account: NewAccount) -> Result<AccountId, StoreError> {
        let row = sqlx::query(
            r#"
                INSERT INTO accounts (email, password_hash)
                VALUES ($1, $2)
                RETURNING id
            "#,
        )
        .bind(account.email().as_str())
        .bind(account.password_hash().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return StoreError::Conflict;
                }
            }
            StoreError::UnexpectedError(e.to_string())
        })?;

        row.try_get::<i64, _>("id")
            .map(AccountId::new)
            .map_err(|e| StoreError::UnexpectedError(e.to_string()))
    }
}

fn account_from_row(row: PgRow) -> Result<Account, StoreError> {
    let unexpected = |e: sqlx::Error| StoreError::UnexpectedError(e.to_string());

    let id: i64 = row.try_get("id").map_err(unexpected)?;
    let email: String = row.try_get("email").map_err(unexpected)?;
    let password_hash: String = row.try_get("password_hash").map_err(unexpected)?;

    let email = Email::parse(email).map_err(|e| StoreError::UnexpectedError(e.to_string()))?;

    Ok(Account::new(
        AccountId::new(id),
        email,
        PasswordHash::new(Secret::from(password_hash)),
    ))
}
