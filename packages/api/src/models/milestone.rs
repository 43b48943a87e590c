//! Project milestone rows.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Full `project_milestones` row. Each milestone is stamped with both its
/// owning project id and the owning profile id when the coordinator
/// inserts it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Milestone {
    pub id: i32,
    pub project_id: i32,
    pub profile_id: i32,
    pub milestone_name: String,
    pub description: Option<String>,
    pub status: String,
    pub completed_date: Option<NaiveDate>,
    pub responsible_party: Option<String>,
    pub delay_reason: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Trimmed milestone shape embedded in the project-edit response.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MilestoneBrief {
    pub id: i32,
    pub milestone_name: String,
    pub completed_date: Option<NaiveDate>,
    pub status: String,
}
