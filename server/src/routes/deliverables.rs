//! Deliverable endpoints.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use api::dto::UpdateDeliverable;
use api::ApiError;

use crate::error::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

/// `GET /api/deliverable-data` — active deliverables with project and
/// milestone names.
pub async fn deliverable_data(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.list_active_deliverables().await?;
    Ok(Json(rows))
}

#[derive(Debug, Deserialize)]
pub struct DeliverableViewParams {
    pub id: Option<i32>,
}

/// `GET /api/deliverable-view?id=...` — one deliverable joined to its
/// project, profile media, and milestone.
pub async fn deliverable_view(
    State(state): State<AppState>,
    Query(params): Query<DeliverableViewParams>,
) -> Result<impl IntoResponse, AppError> {
    let id = params.id.ok_or_else(|| {
        ApiError::validation(
            "Deliverable ID is required in the query parameters (e.g., /api/deliverable-view?id=123)",
        )
    })?;
    let rows = state.store.deliverable_view(id).await?;
    Ok(Json(rows))
}

/// `PUT /api/deliverable-updated/:id` — update an active deliverable.
pub async fn update_deliverable(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(update): AppJson<UpdateDeliverable>,
) -> Result<impl IntoResponse, AppError> {
    update.validate()?;

    let deliverable = state
        .store
        .update_deliverable(id, &update)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound("Deliverable not found or is inactive".to_string())
        })?;

    Ok(Json(json!({
        "message": "Deliverable updated successfully.",
        "deliverable": deliverable,
    })))
}

/// `DELETE /api/deliverable-delete/:id` — soft delete.
pub async fn delete_deliverable(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deliverable = state
        .store
        .deactivate_deliverable(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Deliverable not found.".to_string()))?;

    Ok(Json(json!({
        "message": "Deliverable deleted successfully (soft delete)",
        "deliverable": deliverable,
    })))
}
