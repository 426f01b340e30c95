//! Authentication and authorization
//!
//! - [`JwtService`] - session token signing and verification
//! - [`CurrentUser`] - authenticated caller
//! - [`require_roles`] - role gate middleware
//! - [`password`] - Argon2 hashing

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtError, JwtService};
pub use middleware::{ALL_ROLES, OWNER_ONLY, require_roles};
