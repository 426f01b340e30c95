//! Account service: registration, login and account administration

use std::sync::Arc;

use shared::error::{AppError, ErrorCode};
use shared::models::{Account, AccountPatch, LoginResponse, Role};

use crate::auth::JwtService;
use crate::auth::password::{hash_password, verify_password};
use crate::db::RepoError;
use crate::db::repository::{AccountRepository, NewAccount};
use crate::error::{ServiceError, ServiceResult};
use crate::utils::time::SharedClock;

/// Validated registration input
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

/// Validated login input
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Validated account changes; the password is still plaintext here
#[derive(Debug, Clone, Default)]
pub struct AccountChanges {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
}

pub struct AccountService {
    repo: Arc<dyn AccountRepository>,
    jwt: Arc<JwtService>,
    clock: SharedClock,
}

impl AccountService {
    pub fn new(repo: Arc<dyn AccountRepository>, jwt: Arc<JwtService>, clock: SharedClock) -> Self {
        Self { repo, jwt, clock }
    }

    pub async fn register(&self, input: Registration) -> ServiceResult<Account> {
        let password_hash = hash(&input.password)?;

        let account = self
            .repo
            .create(NewAccount {
                email: input.email,
                password_hash,
                name: input.name,
                role: input.role,
                created_at: self.clock.utc().timestamp_millis(),
            })
            .await
            .map_err(email_conflict)?;

        tracing::info!(account_id = account.id, role = %account.role, "Account registered");
        Ok(account)
    }

    /// Unknown email and wrong password fail identically
    pub async fn login(&self, input: Credentials) -> ServiceResult<LoginResponse> {
        let account = self
            .repo
            .find_by_email(&input.email)
            .await?
            .ok_or_else(AppError::invalid_credentials)?;

        if !verify_password(&input.password, &account.password_hash) {
            return Err(AppError::invalid_credentials().into());
        }

        let token = self
            .jwt
            .issue(&account, self.clock.utc())
            .map_err(|e| ServiceError::Db(Box::new(e)))?;

        tracing::info!(account_id = account.id, "Login succeeded");
        Ok(LoginResponse { token })
    }

    /// Merge `changes` over the account with `id`
    ///
    /// The stored hash is carried over unless a new password is supplied.
    pub async fn update(&self, id: i64, changes: AccountChanges) -> ServiceResult<Account> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::AccountNotFound))?;

        let password_hash = changes.password.as_deref().map(hash).transpose()?;
        let patch = AccountPatch {
            email: changes.email,
            password_hash,
            name: changes.name,
            role: changes.role,
        };

        let mut merged = patch.apply(&existing);
        merged.updated_at = self.clock.utc().timestamp_millis();

        let updated = self
            .repo
            .update(&merged)
            .await
            .map_err(email_conflict)?
            .ok_or_else(|| AppError::new(ErrorCode::AccountNotFound))?;
        Ok(updated)
    }

    pub async fn list(&self) -> ServiceResult<Vec<Account>> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::new(ErrorCode::AccountNotFound).into());
        }
        tracing::info!(account_id = id, "Account deleted");
        Ok(())
    }
}

fn hash(password: &str) -> ServiceResult<String> {
    hash_password(password)
        .map_err(|e| ServiceError::Db(format!("Failed to hash password: {e}").into()))
}

fn email_conflict(err: RepoError) -> ServiceError {
    match err {
        RepoError::Duplicate(_) => AppError::new(ErrorCode::EmailTaken).into(),
        other => other.into(),
    }
}
