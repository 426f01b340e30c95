//! Account Repository

use async_trait::async_trait;
use shared::models::{Account, Role};
use sqlx::PgPool;

use crate::db::RepoResult;

/// Account row to insert
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: Role,
    pub created_at: i64,
}

/// Account storage port
///
/// Email uniqueness is enforced by the store and reported as
/// [`RepoError::Duplicate`](crate::db::RepoError::Duplicate).
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create(&self, account: NewAccount) -> RepoResult<Account>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Account>>;
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>>;
    async fn find_all(&self) -> RepoResult<Vec<Account>>;
    /// Overwrite email, hash, name, role and updated_at; `None` if the row is gone
    async fn update(&self, account: &Account) -> RepoResult<Option<Account>>;
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

const COLUMNS: &str = "id, email, password_hash, name, role, created_at, updated_at";

/// PostgreSQL adapter
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: NewAccount) -> RepoResult<Account> {
        let row: Account = sqlx::query_as(&format!(
            r#"
            INSERT INTO accounts (email, password_hash, name, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(&account.name)
        .bind(account.role)
        .bind(account.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Account>> {
        let row = sqlx::query_as(&format!("SELECT {COLUMNS} FROM accounts WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>> {
        let row = sqlx::query_as(&format!("SELECT {COLUMNS} FROM accounts WHERE email = $1"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_all(&self) -> RepoResult<Vec<Account>> {
        let rows = sqlx::query_as(&format!("SELECT {COLUMNS} FROM accounts ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, account: &Account) -> RepoResult<Option<Account>> {
        let row = sqlx::query_as(&format!(
            r#"
            UPDATE accounts
            SET email = $2, password_hash = $3, name = $4, role = $5, updated_at = $6
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(account.id)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(&account.name)
        .bind(account.role)
        .bind(account.updated_at)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
