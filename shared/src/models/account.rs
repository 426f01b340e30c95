//! Account Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role
///
/// Stored and serialized in lowercase. Route guards compare against
/// [`Role::as_str`] exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "account_role", rename_all = "lowercase")
)]
pub enum Role {
    Owner,
    Staff,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Owner, Role::Staff];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Staff => "staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown role name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid role: {0}")]
pub struct InvalidRole(pub String);

impl FromStr for Role {
    type Err = InvalidRole;

    /// Exact, case-sensitive match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Role::Owner),
            "staff" => Ok(Role::Staff),
            other => Err(InvalidRole(other.to_string())),
        }
    }
}

/// Account record (password hash never leaves the server)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Account {
    pub id: i64,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    pub name: String,
    pub role: Role,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Register payload
///
/// Fields are optional at the wire level so a missing field is reported as
/// a validation error instead of a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

/// Login payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Update account payload (any subset of fields)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountUpdate {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

impl AccountUpdate {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.name.is_none() && self.role.is_none()
    }
}

/// Validated account changes, ready to merge over a stored record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountPatch {
    pub email: Option<String>,
    /// Already hashed
    pub password_hash: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
}

impl AccountPatch {
    /// Merge over `existing`; absent fields keep their stored value.
    pub fn apply(&self, existing: &Account) -> Account {
        Account {
            id: existing.id,
            email: self.email.clone().unwrap_or_else(|| existing.email.clone()),
            password_hash: self
                .password_hash
                .clone()
                .unwrap_or_else(|| existing.password_hash.clone()),
            name: self.name.clone().unwrap_or_else(|| existing.name.clone()),
            role: self.role.unwrap_or(existing.role),
            created_at: existing.created_at,
            updated_at: existing.updated_at,
        }
    }
}
