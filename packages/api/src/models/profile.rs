//! Employee profile row (presented as a "client" in the UI).

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Full `employee_profiles` row. The image/video columns hold relative
/// `/uploads/...` paths; the HTTP layer rewrites them to absolute URLs
/// where the original API did.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmployeeProfile {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub joined_date: Option<NaiveDate>,
    pub status: String,
    pub image: Option<String>,
    pub video_url: Option<String>,
    pub total_projects: Option<i32>,
    pub completed_projects: Option<i32>,
    pub active_projects: Option<i32>,
    pub total_spent: Option<f64>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
