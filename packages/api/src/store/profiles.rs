//! Employee profile queries, including the transactional creation
//! coordinator.
//!
//! The coordinator is the one multi-table write in the system. It inserts
//! the profile, all its projects, and all their milestones inside a single
//! transaction on one pooled connection; any stage failure rolls everything
//! back so no partial rows remain. File compensation (deleting uploads
//! written during the request) is the HTTP layer's job.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::QueryBuilder;
use tracing::warn;

use crate::dto::{NewProfile, NewProject, UpdateProfile};
use crate::error::ApiError;
use crate::models::{EmployeeProfile, Milestone, Project};
use crate::store::Store;

/// Everything the coordinator inserted, returned to the client as one body.
#[derive(Debug, Serialize)]
pub struct ProfileCreation {
    pub profile: EmployeeProfile,
    pub projects: Vec<Project>,
    pub milestones: Vec<Milestone>,
}

/// One milestone ready to insert, with both foreign keys resolved.
#[derive(Debug, Clone, PartialEq)]
struct MilestonePlan {
    project_id: i32,
    profile_id: i32,
    name: String,
    description: Option<String>,
    status: String,
    completed_date: Option<NaiveDate>,
    responsible_party: Option<String>,
    delay_reason: Option<String>,
}

/// Map each descriptor's correlation key to its generated project id.
/// Descriptors and returned rows are in submitted order; a length mismatch
/// leaves the unmatched refs out of the map.
fn correlate_project_ids(descriptors: &[NewProject], inserted: &[Project]) -> HashMap<String, i32> {
    descriptors
        .iter()
        .zip(inserted)
        .filter_map(|(d, row)| d.ref_id.clone().map(|r| (r, row.id)))
        .collect()
}

/// Resolve every milestone against the correlation map. A descriptor whose
/// ref did not yield a generated id is skipped with a warning rather than
/// aborting the transaction.
fn plan_milestones(
    descriptors: &[NewProject],
    ids_by_ref: &HashMap<String, i32>,
    profile_id: i32,
) -> Vec<MilestonePlan> {
    let mut rows = Vec::new();
    for descriptor in descriptors {
        let Some(ref_id) = descriptor.ref_id.as_deref() else {
            warn!("project descriptor without ref key; skipping its milestones");
            continue;
        };
        let Some(&project_id) = ids_by_ref.get(ref_id) else {
            warn!(ref_id, "no generated id for project ref; skipping its milestones");
            continue;
        };
        for m in &descriptor.milestones {
            rows.push(MilestonePlan {
                project_id,
                profile_id,
                name: m.name().to_string(),
                description: m.description.clone(),
                status: m.status().to_string(),
                completed_date: m.completed_date,
                responsible_party: m.responsible_party.clone(),
                delay_reason: m.delay_reason.clone(),
            });
        }
    }
    rows
}

impl Store {
    /// Active profiles for the dashboard widgets, oldest first.
    pub async fn list_active_profiles(&self) -> Result<Vec<EmployeeProfile>, ApiError> {
        let rows = sqlx::query_as::<_, EmployeeProfile>(
            "SELECT * FROM employee_profiles WHERE active = TRUE ORDER BY id ASC",
        )
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    /// Single profile regardless of active flag (edit form prefill).
    pub async fn find_profile(&self, id: i32) -> Result<Option<EmployeeProfile>, ApiError> {
        let row = sqlx::query_as::<_, EmployeeProfile>(
            "SELECT * FROM employee_profiles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        Ok(row)
    }

    /// Full-row profile update. `None` when the id does not exist.
    pub async fn update_profile(
        &self,
        id: i32,
        update: &UpdateProfile,
    ) -> Result<Option<EmployeeProfile>, ApiError> {
        let row = sqlx::query_as::<_, EmployeeProfile>(
            "UPDATE employee_profiles SET
                name = $2, email = $3, phone = $4, location = $5, company = $6,
                joined_date = $7, status = COALESCE($8, status), image = $9,
                total_projects = $10, completed_projects = $11,
                active_projects = $12, total_spent = $13, video_url = $14,
                updated_at = NOW()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.email)
        .bind(&update.phone)
        .bind(&update.location)
        .bind(&update.company)
        .bind(update.joined_date)
        .bind(&update.status)
        .bind(&update.image)
        .bind(update.total_projects)
        .bind(update.completed_projects)
        .bind(update.active_projects)
        .bind(update.total_spent)
        .bind(&update.video_url)
        .fetch_optional(self.pool())
        .await?;
        Ok(row)
    }

    /// Soft delete. `None` when the row is absent or already inactive, so a
    /// repeated delete reports not-found.
    pub async fn deactivate_profile(&self, id: i32) -> Result<Option<EmployeeProfile>, ApiError> {
        let row = sqlx::query_as::<_, EmployeeProfile>(
            "UPDATE employee_profiles
             SET active = FALSE, updated_at = NOW()
             WHERE id = $1 AND active = TRUE
             RETURNING *",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        Ok(row)
    }

    /// The transactional coordinator: one profile, its projects, and their
    /// milestones, all-or-nothing.
    ///
    /// Ordering: the profile is inserted first to obtain its id; projects
    /// are bulk-inserted next in submitted order; milestones are resolved
    /// through the ref-correlation map and bulk-inserted last, each stamped
    /// with both foreign keys.
    pub async fn create_profile_with_projects(
        &self,
        profile: &NewProfile,
        projects: &[NewProject],
        image: Option<&str>,
        video: Option<&str>,
    ) -> Result<ProfileCreation, ApiError> {
        if projects.is_empty() {
            return Err(ApiError::validation("project data is missing or empty"));
        }

        let mut tx = self.pool().begin().await?;

        let inserted_profile = sqlx::query_as::<_, EmployeeProfile>(
            "INSERT INTO employee_profiles
                (name, email, phone, location, company, image,
                 total_projects, total_spent, video_url, joined_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING *",
        )
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(&profile.phone)
        .bind(&profile.location)
        .bind(&profile.company)
        .bind(image)
        .bind(profile.total_projects)
        .bind(profile.total_spent)
        .bind(video)
        .bind(profile.join_date)
        .fetch_one(&mut *tx)
        .await?;

        let mut qb = QueryBuilder::new(
            "INSERT INTO projects
                (profile_id, email, name_project, completion, status, start_date, due_date) ",
        );
        qb.push_values(projects, |mut b, p| {
            b.push_bind(inserted_profile.id)
                .push_bind(p.email_or(&inserted_profile.email).to_string())
                .push_bind(p.name().to_string())
                .push_bind(p.completion)
                .push_bind(p.status().to_string())
                .push_bind(p.start_date)
                .push_bind(p.due_date);
        });
        qb.push(" RETURNING *");
        let inserted_projects: Vec<Project> =
            qb.build_query_as().fetch_all(&mut *tx).await?;

        let ids_by_ref = correlate_project_ids(projects, &inserted_projects);
        let planned = plan_milestones(projects, &ids_by_ref, inserted_profile.id);

        let inserted_milestones: Vec<Milestone> = if planned.is_empty() {
            Vec::new()
        } else {
            let mut qb = QueryBuilder::new(
                "INSERT INTO project_milestones
                    (milestone_name, description, status, completed_date,
                     responsible_party, delay_reason, profile_id, project_id) ",
            );
            qb.push_values(&planned, |mut b, m| {
                b.push_bind(&m.name)
                    .push_bind(&m.description)
                    .push_bind(&m.status)
                    .push_bind(m.completed_date)
                    .push_bind(&m.responsible_party)
                    .push_bind(&m.delay_reason)
                    .push_bind(m.profile_id)
                    .push_bind(m.project_id);
            });
            qb.push(" RETURNING *");
            qb.build_query_as().fetch_all(&mut *tx).await?
        };

        tx.commit().await?;

        Ok(ProfileCreation {
            profile: inserted_profile,
            projects: inserted_projects,
            milestones: inserted_milestones,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::decode_projects;
    use chrono::Utc;

    fn project_row(id: i32) -> Project {
        Project {
            id,
            profile_id: 1,
            email: "a@b.com".to_string(),
            name_project: format!("project-{id}"),
            status: "start".to_string(),
            completion: None,
            start_date: None,
            due_date: None,
            active: true,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn every_milestone_binds_to_its_own_project() {
        let descriptors = decode_projects(
            r#"[
                {"ref": "a", "milestones": [{"milestone_name": "kickoff"},
                                            {"milestone_name": "review"}]},
                {"ref": "b", "milestones": [{"milestone_name": "handover"}]}
            ]"#,
        )
        .unwrap();
        let inserted = vec![project_row(10), project_row(11)];

        let map = correlate_project_ids(&descriptors, &inserted);
        let planned = plan_milestones(&descriptors, &map, 7);

        assert_eq!(planned.len(), 3);
        assert!(planned.iter().all(|m| m.profile_id == 7));
        assert_eq!(planned[0].project_id, 10);
        assert_eq!(planned[1].project_id, 10);
        assert_eq!(planned[2].project_id, 11);
        assert_eq!(planned[2].name, "handover");
    }

    #[test]
    fn unresolved_ref_skips_only_that_projects_milestones() {
        let descriptors = decode_projects(
            r#"[
                {"ref": "a", "milestones": [{"milestone_name": "m1"}]},
                {"ref": "b", "milestones": [{"milestone_name": "m2"}]}
            ]"#,
        )
        .unwrap();
        // Only one row came back: ref "b" never resolves.
        let inserted = vec![project_row(10)];

        let map = correlate_project_ids(&descriptors, &inserted);
        let planned = plan_milestones(&descriptors, &map, 7);

        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].project_id, 10);
        assert_eq!(planned[0].name, "m1");
    }

    #[test]
    fn projects_without_milestones_plan_nothing() {
        let descriptors = decode_projects(r#"[{"name_project": "solo"}]"#).unwrap();
        let inserted = vec![project_row(42)];
        let map = correlate_project_ids(&descriptors, &inserted);
        assert!(plan_milestones(&descriptors, &map, 1).is_empty());
    }
}
