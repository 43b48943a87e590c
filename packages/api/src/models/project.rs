//! Project rows and the joined detail view.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Full `projects` row. `profile_id` is the real foreign key; `email` is a
/// denormalized copy kept for response-shape compatibility and is never
/// used as a join key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: i32,
    pub profile_id: i32,
    pub email: String,
    pub name_project: String,
    pub status: String,
    pub completion: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub active: bool,
    pub updated_at: DateTime<Utc>,
}

/// One row of the project/milestone join behind `GET /api/projects/details/:id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectDetailRow {
    pub name_project: String,
    pub start_date: Option<NaiveDate>,
    pub completion: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub milestone_name: String,
    pub completed_date: Option<NaiveDate>,
    pub status: String,
}
