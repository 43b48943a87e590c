//! Deliverable rows and the joined list/detail shapes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Full `deliverables` row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Deliverable {
    pub id: i32,
    pub project_id: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub file_type: String,
    pub category: Option<String>,
    pub storage: Option<String>,
    pub file_url: Option<String>,
    pub approval_date: Option<NaiveDate>,
    pub approved_by: Option<String>,
    pub approved_name: Option<String>,
    pub status: String,
    pub active: bool,
    pub updated_at: DateTime<Utc>,
}

/// One row of the deliverable list join (`GET /api/deliverable-data`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DeliverableSummary {
    pub id: i32,
    pub project_name: Option<String>,
    pub milestone_name: Option<String>,
    pub due_date: Option<NaiveDate>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub file_type: String,
    pub category: Option<String>,
    pub storage_type: Option<String>,
    pub status: String,
    pub storage_link: Option<String>,
    pub active: bool,
}

/// One row of the single-deliverable join (`GET /api/deliverable-view`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DeliverableDetail {
    pub project_name: Option<String>,
    pub milestone_name: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub image: Option<String>,
    pub video_url: Option<String>,
    pub file_url: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub file_type: String,
    pub category: Option<String>,
    pub approval_date: Option<NaiveDate>,
    pub approved_by: Option<String>,
    pub approved_name: Option<String>,
    pub storage: Option<String>,
    pub status: String,
}
