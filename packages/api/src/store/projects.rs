//! Project queries: list, joined detail, edit prefill, the transactional
//! project + milestones update, and the soft delete.

use tracing::warn;

use crate::dto::{UpdateMilestone, UpdateProject};
use crate::error::ApiError;
use crate::models::{Milestone, MilestoneBrief, Project, ProjectDetailRow};
use crate::store::Store;

impl Store {
    /// Active projects, one row per (email, name) pair.
    pub async fn list_active_projects(&self) -> Result<Vec<Project>, ApiError> {
        let rows = sqlx::query_as::<_, Project>(
            "SELECT DISTINCT ON (email, name_project) *
             FROM projects
             WHERE active = TRUE
             ORDER BY email, name_project, id ASC",
        )
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    /// Project joined to its milestones, strictly by project id.
    pub async fn project_detail(&self, id: i32) -> Result<Vec<ProjectDetailRow>, ApiError> {
        let rows = sqlx::query_as::<_, ProjectDetailRow>(
            "SELECT pd.name_project, pd.start_date, pd.completion, pd.due_date,
                    pm.milestone_name, pm.completed_date, pm.status
             FROM projects AS pd
             JOIN project_milestones AS pm ON pd.id = pm.project_id
             WHERE pd.id = $1 AND pd.active = TRUE
             ORDER BY pd.name_project, pm.milestone_name",
        )
        .bind(id)
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    /// Project plus its milestones for the edit form.
    pub async fn find_project_with_milestones(
        &self,
        id: i32,
    ) -> Result<Option<(Project, Vec<MilestoneBrief>)>, ApiError> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        let Some(project) = project else {
            return Ok(None);
        };

        let milestones = sqlx::query_as::<_, MilestoneBrief>(
            "SELECT id, milestone_name, completed_date, status
             FROM project_milestones
             WHERE project_id = $1
             ORDER BY completed_date",
        )
        .bind(id)
        .fetch_all(self.pool())
        .await?;

        Ok(Some((project, milestones)))
    }

    /// Update a project and its existing milestones in one transaction.
    /// An unknown project id rolls back and reports not-found; milestones
    /// without an id are skipped (only existing rows are updated).
    pub async fn update_project_with_milestones(
        &self,
        project_id: i32,
        project: &UpdateProject,
        milestones: &[UpdateMilestone],
    ) -> Result<(Project, Vec<Milestone>), ApiError> {
        let mut tx = self.pool().begin().await?;

        let updated = sqlx::query_as::<_, Project>(
            "UPDATE projects SET
                name_project = $1, start_date = $2, completion = $3,
                status = $4, due_date = $5, updated_at = NOW()
             WHERE id = $6
             RETURNING *",
        )
        .bind(&project.name)
        .bind(project.start_date)
        .bind(project.completion_fraction())
        .bind(&project.status)
        .bind(project.due_date)
        .bind(project_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(updated) = updated else {
            tx.rollback().await?;
            return Err(ApiError::NotFound(
                "Project Details not found for update.".to_string(),
            ));
        };

        let mut updated_milestones = Vec::new();
        for milestone in milestones {
            let Some(id) = milestone.id else {
                warn!(name = %milestone.name, "skipping milestone without id");
                continue;
            };
            let row = sqlx::query_as::<_, Milestone>(
                "UPDATE project_milestones SET
                    milestone_name = $1, status = $2, completed_date = $3,
                    updated_at = NOW()
                 WHERE id = $4 AND project_id = $5
                 RETURNING *",
            )
            .bind(&milestone.name)
            .bind(&milestone.status)
            .bind(milestone.completed_date)
            .bind(id)
            .bind(project_id)
            .fetch_optional(&mut *tx)
            .await?;
            if let Some(row) = row {
                updated_milestones.push(row);
            }
        }

        tx.commit().await?;
        Ok((updated, updated_milestones))
    }

    /// Soft delete; `None` when absent or already inactive.
    pub async fn deactivate_project(&self, id: i32) -> Result<Option<Project>, ApiError> {
        let row = sqlx::query_as::<_, Project>(
            "UPDATE projects
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
