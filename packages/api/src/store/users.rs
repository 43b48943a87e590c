//! User queries for signup and login.

use crate::error::{is_unique_violation, ApiError};
use crate::models::User;
use crate::store::Store;

impl Store {
    /// Insert a new user. A duplicate email surfaces as a conflict the
    /// signup endpoint reports with 409.
    pub async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<User, ApiError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash, role)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .fetch_one(self.pool())
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::Conflict("This email is already registered.".to_string())
            } else {
                e.into()
            }
        })
    }

    /// Look up a user by email and role. Login checks both so an email
    /// registered under one role cannot log in as the other.
    pub async fn find_user(&self, email: &str, role: &str) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE email = $1 AND role = $2",
        )
        .bind(email)
        .bind(role)
        .fetch_optional(self.pool())
        .await?;
        Ok(user)
    }
}
