//! Renewal endpoints. Renewals are standalone records with no links to
//! profiles or projects.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use api::dto::{NewRenewal, UpdateRenewal};
use api::ApiError;

use crate::error::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

/// `GET /api/renewals-data` — active renewals for the list view.
pub async fn renewals_data(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.list_active_renewals().await?;
    Ok(Json(rows))
}

/// `POST /api/renewals` — insert a renewal.
pub async fn create_renewal(
    State(state): State<AppState>,
    AppJson(renewal): AppJson<NewRenewal>,
) -> Result<impl IntoResponse, AppError> {
    renewal.validate()?;

    let id = state.store.create_renewal(&renewal).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "id": id,
            "message": "Renewal added successfully",
        })),
    ))
}

/// `PUT /api/renewals-updated/:id` — full-row update.
pub async fn update_renewal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(update): AppJson<UpdateRenewal>,
) -> Result<impl IntoResponse, AppError> {
    update.validate()?;

    let renewal = state
        .store
        .update_renewal(id, &update)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Renewal with ID {id} not found.")))?;

    Ok(Json(json!({
        "message": "Renewal record updated successfully",
        "updatedRenewal": renewal,
    })))
}

/// `DELETE /api/renewal-delete/:id` — soft delete; responds with no body.
pub async fn delete_renewal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if state.store.deactivate_renewal(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Renewal not found".to_string()).into())
    }
}
