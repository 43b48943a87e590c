//! Project endpoints.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use api::dto::UpdateProjectBody;
use api::ApiError;

use crate::error::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

/// `GET /api/project-Data` — active projects, deduplicated per client.
pub async fn project_data(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let projects = state.store.list_active_projects().await?;
    Ok(Json(projects))
}

/// `GET /api/projects/details/:id` — the first joined project/milestone
/// row as a single object, the shape the detail page consumes.
pub async fn project_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut rows = state.store.project_detail(id).await?;
    if rows.is_empty() {
        return Err(ApiError::NotFound(format!("Project ID: {id} not found.")).into());
    }
    Ok(Json(rows.swap_remove(0)))
}

/// `GET /api/Edit-Project-data/:id` — project merged with its milestones
/// for the edit form.
pub async fn edit_project_data(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (project, milestones) = state
        .store
        .find_project_with_milestones(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;

    let mut body =
        serde_json::to_value(&project).map_err(|e| ApiError::Internal(e.to_string()))?;
    body["milestones"] = serde_json::to_value(&milestones)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(body))
}

/// `PUT /api/project/:projectId` — transactional project + milestones
/// update.
pub async fn update_project(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
    AppJson(body): AppJson<UpdateProjectBody>,
) -> Result<impl IntoResponse, AppError> {
    let (project, milestones) = state
        .store
        .update_project_with_milestones(project_id, &body.project, &body.milestones)
        .await?;

    Ok(Json(json!({
        "message": "Project and Milestones updated successfully.",
        "project": project,
        "milestones": milestones,
    })))
}

/// `DELETE /api/project-delete/:id` — soft delete.
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let project = state
        .store
        .deactivate_project(id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound("Project not found or already inactive.".to_string())
        })?;

    Ok(Json(json!({
        "message": "Project deleted successfully (soft delete)",
        "project": project,
    })))
}
