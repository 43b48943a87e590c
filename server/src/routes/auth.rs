//! Signup and login. Both issue a signed, expiring access token; the
//! password never leaves this module unhashed.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use api::auth::{hash_password, issue_token, verify_password};
use api::dto::Credentials;
use api::ApiError;

use crate::error::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

/// `POST /api/signup` — 201 with `{success, user, token}`, 409 on a
/// duplicate email.
pub async fn signup(
    State(state): State<AppState>,
    AppJson(creds): AppJson<Credentials>,
) -> Result<impl IntoResponse, AppError> {
    creds.validate()?;

    let email = creds.normalized_email();
    let password_hash = hash_password(&creds.password)?;
    let user = state
        .store
        .create_user(&email, &password_hash, &creds.role)
        .await?;
    let token = issue_token(&user, &state.jwt_secret, state.token_ttl_hours)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "user": user.to_info(),
            "token": token,
        })),
    ))
}

/// `POST /api/login` — 200 with `{success, user, token}`. A wrong email,
/// wrong role, or wrong password all produce the same 401 message.
pub async fn login(
    State(state): State<AppState>,
    AppJson(creds): AppJson<Credentials>,
) -> Result<impl IntoResponse, AppError> {
    creds.validate()?;

    let user = state
        .store
        .find_user(&creds.normalized_email(), &creds.role)
        .await?
        .ok_or_else(|| {
            ApiError::Unauthorized("Invalid credentials or role mismatch.".to_string())
        })?;

    if !verify_password(&creds.password, &user.password_hash)? {
        return Err(
            ApiError::Unauthorized("Invalid credentials or role mismatch.".to_string()).into(),
        );
    }

    let token = issue_token(&user, &state.jwt_secret, state.token_ttl_hours)?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "user": user.to_info(),
            "token": token,
        })),
    ))
}
