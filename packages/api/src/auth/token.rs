//! Signed, expiring access tokens (HS256).
//!
//! Replaces the constant dummy bearer token of the original system with a
//! verifiable credential: login/signup issue a JWT, and the server verifies
//! it on every data route.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::User;

/// JWT claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issue a token for the given user, valid for `ttl_hours`.
pub fn issue_token(user: &User, secret: &str, ttl_hours: i64) -> Result<String, ApiError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        role: user.role.clone(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(ttl_hours)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(format!("failed to sign token: {e}")))
}

/// Verify a token and return its claims. Expired or tampered tokens fail.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::Unauthorized("Invalid or expired token.".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "a@b.com".to_string(),
            password_hash: String::new(),
            role: "client".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn issue_and_verify_round_trip() {
        let user = test_user();
        let token = issue_token(&user, "test-secret", 24).unwrap();
        let claims = verify_token(&token, "test-secret").unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.role, "client");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token(&test_user(), "test-secret", 24).unwrap();
        assert!(verify_token(&token, "other-secret").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = issue_token(&test_user(), "test-secret", -1).unwrap();
        assert!(verify_token(&token, "test-secret").is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(verify_token("DUMMY_TOKEN", "test-secret").is_err());
    }
}
