//! Deliverable queries. The list and detail shapes join through projects
//! (and onward to profiles/milestones) strictly by foreign key.

use crate::dto::UpdateDeliverable;
use crate::error::ApiError;
use crate::models::{Deliverable, DeliverableDetail, DeliverableSummary};
use crate::store::Store;

impl Store {
    /// Active deliverables joined to their project and milestone names.
    pub async fn list_active_deliverables(&self) -> Result<Vec<DeliverableSummary>, ApiError> {
        let rows = sqlx::query_as::<_, DeliverableSummary>(
            "SELECT d.id,
                    p.name_project AS project_name,
                    pm.milestone_name AS milestone_name,
                    p.due_date AS due_date,
                    d.type,
                    d.category,
                    d.storage AS storage_type,
                    d.status,
                    d.file_url AS storage_link,
                    d.active
             FROM deliverables d
             LEFT JOIN projects p ON d.project_id = p.id
             LEFT JOIN project_milestones pm ON p.id = pm.project_id
             WHERE d.active = TRUE
             ORDER BY p.name_project",
        )
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    /// Single deliverable with its project, profile media, and milestone.
    pub async fn deliverable_view(&self, id: i32) -> Result<Vec<DeliverableDetail>, ApiError> {
        let rows = sqlx::query_as::<_, DeliverableDetail>(
            "SELECT p.name_project AS project_name,
                    pm.milestone_name AS milestone_name,
                    p.due_date AS due_date,
                    ep.image,
                    ep.video_url,
                    d.file_url,
                    d.type,
                    d.category,
                    d.approval_date,
                    d.approved_by,
                    d.approved_name,
                    d.storage,
                    d.status
             FROM deliverables d
             LEFT JOIN projects p ON d.project_id = p.id
             LEFT JOIN employee_profiles ep ON p.profile_id = ep.id
             LEFT JOIN project_milestones pm ON p.id = pm.project_id
             WHERE d.id = $1
             ORDER BY p.name_project",
        )
        .bind(id)
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    /// Update an active deliverable; inactive rows are not updatable.
    pub async fn update_deliverable(
        &self,
        id: i32,
        update: &UpdateDeliverable,
    ) -> Result<Option<Deliverable>, ApiError> {
        let row = sqlx::query_as::<_, Deliverable>(
            "UPDATE deliverables SET
                status = $1, approval_date = $2, approved_name = $3,
                type = $4, storage = $5, file_url = $6, category = $7,
                updated_at = NOW()
             WHERE id = $8 AND active = TRUE
             RETURNING *",
        )
        .bind(&update.status)
        .bind(update.approval_date)
        .bind(&update.approved_name)
        .bind(&update.file_type)
        .bind(&update.storage)
        .bind(&update.file_url)
        .bind(&update.category)
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        Ok(row)
    }

    /// Soft delete; `None` when absent or already inactive.
    pub async fn deactivate_deliverable(&self, id: i32) -> Result<Option<Deliverable>, ApiError> {
        let row = sqlx::query_as::<_, Deliverable>(
            "UPDATE deliverables
             SET active = FALSE, updated_at = NOW()
             WHERE id = $1 AND active = TRUE
             RETURNING *",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        Ok(row)
    }
}
