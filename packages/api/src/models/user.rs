//! # User model for authenticated users
//!
//! Two representations of a portal user:
//!
//! - [`User`] — the complete `users` row, including the Argon2 PHC-format
//!   `password_hash`. Never serialized to a response body.
//! - [`UserInfo`] — the client-safe projection returned by signup/login.
//!   Omits the hash; [`User::to_info`] produces it.
//!
//! `role` is stored as text and constrained to `client` | `admin` both by a
//! CHECK constraint and by DTO validation before any query runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Full user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            role: self.role.clone(),
            created_at: self.created_at,
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}
