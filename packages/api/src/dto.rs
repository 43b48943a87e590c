//! # Request DTOs
//!
//! Typed request payloads, validated before any business logic runs. Each
//! DTO rejects with an [`ApiError::Validation`] carrying a structured list
//! of per-field messages.
//!
//! Deliberate leniency policy (matching the original write path): absent
//! numeric fields become `None`, absent strings become sentinels
//! (`"N/A"`, `"start"`, `"pending"`, `"Unnamed Milestone"`), and empty
//! date strings are treated as null rather than rejected.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::error::{ApiError, FieldError};

/// Roles a user may sign up or log in with.
pub const ALLOWED_ROLES: &[&str] = &["client", "admin"];

/// Deserialize a date that may arrive as null or an empty string.
fn de_opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Deserialize a cost that may arrive as a number or a numeric string.
fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match raw {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => Ok(n.as_f64()),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(s.trim().parse::<f64>().ok()),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected number or string, got {other}"
        ))),
    }
}

/// Body of `POST /api/signup` and `POST /api/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: String,
}

impl Credentials {
    /// Normalize and check the credential triple.
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut fields = Vec::new();
        if self.email.trim().is_empty() {
            fields.push(FieldError::new("email", "required"));
        }
        if self.password.is_empty() {
            fields.push(FieldError::new("password", "required"));
        }
        if self.role.trim().is_empty() {
            fields.push(FieldError::new("role", "required"));
        }
        if !fields.is_empty() {
            return Err(ApiError::validation_fields(
                "Email, password, and role are required.",
                fields,
            ));
        }
        if !ALLOWED_ROLES.contains(&self.role.as_str()) {
            return Err(ApiError::validation_fields(
                "Invalid role selected.",
                vec![FieldError::new("role", "must be 'client' or 'admin'")],
            ));
        }
        Ok(())
    }

    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }
}

/// Profile attributes submitted as text fields of the multipart form.
#[derive(Debug, Clone, Default)]
pub struct NewProfile {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub total_projects: Option<i32>,
    pub total_spent: Option<f64>,
    pub join_date: Option<NaiveDate>,
}

impl NewProfile {
    /// Build from the collected multipart text fields, validating types and
    /// required fields in one pass.
    pub fn from_form(fields: &HashMap<String, String>) -> Result<Self, ApiError> {
        let mut errors = Vec::new();
        let text = |key: &str| -> Option<String> {
            fields
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let name = text("name").unwrap_or_default();
        if name.is_empty() {
            errors.push(FieldError::new("name", "required"));
        }
        let email = text("email").unwrap_or_default().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            errors.push(FieldError::new("email", "a valid email is required"));
        }

        let total_projects = match text("total_projects") {
            Some(v) => match v.parse::<i32>() {
                Ok(n) => Some(n),
                Err(_) => {
                    errors.push(FieldError::new("total_projects", "must be an integer"));
                    None
                }
            },
            None => None,
        };
        let total_spent = match text("total_spent") {
            Some(v) => match v.parse::<f64>() {
                Ok(n) => Some(n),
                Err(_) => {
                    errors.push(FieldError::new("total_spent", "must be a number"));
                    None
                }
            },
            None => None,
        };
        let join_date = match text("join_date") {
            Some(v) => match v.parse::<NaiveDate>() {
                Ok(d) => Some(d),
                Err(_) => {
                    errors.push(FieldError::new("join_date", "must be a date (YYYY-MM-DD)"));
                    None
                }
            },
            None => None,
        };

        if !errors.is_empty() {
            return Err(ApiError::validation_fields(
                "Invalid profile fields.",
                errors,
            ));
        }

        Ok(Self {
            name,
            email,
            phone: text("phone"),
            location: text("location"),
            company: text("company"),
            total_projects,
            total_spent,
            join_date,
        })
    }
}

/// One project descriptor from the JSON-encoded `projects` form field.
///
/// `ref_id` is the client correlation key milestones are bound through; a
/// descriptor without one gets a generated key during decoding.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    #[serde(default, rename = "ref")]
    pub ref_id: Option<String>,
    #[serde(default)]
    pub name_project: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub completion: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "de_opt_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de_opt_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub milestones: Vec<NewMilestone>,
}

impl NewProject {
    pub fn name(&self) -> &str {
        match self.name_project.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => "N/A",
        }
    }

    pub fn status(&self) -> &str {
        match self.status.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => "start",
        }
    }

    /// Project email falls back to the profile email.
    pub fn email_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.email.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => fallback,
        }
    }
}

/// One milestone descriptor nested under its project.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMilestone {
    #[serde(default)]
    pub milestone_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "de_opt_date")]
    pub completed_date: Option<NaiveDate>,
    #[serde(default)]
    pub responsible_party: Option<String>,
    #[serde(default)]
    pub delay_reason: Option<String>,
}

impl NewMilestone {
    pub fn name(&self) -> &str {
        match self.milestone_name.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => "Unnamed Milestone",
        }
    }

    pub fn status(&self) -> &str {
        match self.status.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => "pending",
        }
    }
}

/// Decode the `projects` multipart field. Fails fast on malformed JSON, an
/// empty array, or duplicate correlation keys; fills in generated `ref`
/// keys for descriptors that did not carry one.
pub fn decode_projects(raw: &str) -> Result<Vec<NewProject>, ApiError> {
    let mut projects: Vec<NewProject> = serde_json::from_str(raw)
        .map_err(|_| ApiError::validation("projects must be valid structured data"))?;

    if projects.is_empty() {
        return Err(ApiError::validation("project data is missing or empty"));
    }

    let mut seen = HashSet::new();
    for (index, project) in projects.iter_mut().enumerate() {
        let key = match project.ref_id.take() {
            Some(r) if !r.trim().is_empty() => r,
            _ => format!("p{index}"),
        };
        if !seen.insert(key.clone()) {
            return Err(ApiError::validation_fields(
                "project data contains duplicate ref keys",
                vec![FieldError::new("ref", format!("duplicate key '{key}'"))],
            ));
        }
        project.ref_id = Some(key);
    }
    Ok(projects)
}

/// Body of `PUT /api/profile-Updated/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "de_opt_date")]
    pub joined_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub total_projects: Option<i32>,
    #[serde(default)]
    pub completed_projects: Option<i32>,
    #[serde(default)]
    pub active_projects: Option<i32>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub total_spent: Option<f64>,
    #[serde(default)]
    pub video_url: Option<String>,
}

impl UpdateProfile {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(status) = self.status.as_deref() {
            if status != "active" && status != "suspended" {
                return Err(ApiError::validation_fields(
                    "Invalid status. Must be \"active\" or \"suspended\".",
                    vec![FieldError::new("status", "must be 'active' or 'suspended'")],
                ));
            }
        }
        Ok(())
    }
}

/// Body of `PUT /api/project/:projectId`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjectBody {
    pub project: UpdateProject,
    #[serde(default)]
    pub milestones: Vec<UpdateMilestone>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: String,
    #[serde(rename = "startDate", default, deserialize_with = "de_opt_date")]
    pub start_date: Option<NaiveDate>,
    /// Percentage 0-100 as submitted; stored as a fraction.
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub progress: Option<f64>,
    pub status: String,
    #[serde(rename = "dueDate", default, deserialize_with = "de_opt_date")]
    pub due_date: Option<NaiveDate>,
}

impl UpdateProject {
    pub fn completion_fraction(&self) -> Option<f64> {
        self.progress.map(|p| p / 100.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMilestone {
    /// Only milestones that already have an id are updated; the rest are
    /// skipped, matching the original behavior.
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    pub status: String,
    #[serde(default, deserialize_with = "de_opt_date")]
    pub completed_date: Option<NaiveDate>,
}

/// Body of `PUT /api/deliverable-updated/:id`. Key casing follows the
/// frontend payload (`Type`, `Storage`).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDeliverable {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "de_opt_date")]
    pub approval_date: Option<NaiveDate>,
    #[serde(default)]
    pub approved_name: Option<String>,
    #[serde(rename = "Type", default)]
    pub file_type: Option<String>,
    #[serde(rename = "Storage", default)]
    pub storage: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl UpdateDeliverable {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut fields = Vec::new();
        if self.status.as_deref().map_or(true, |s| s.trim().is_empty()) {
            fields.push(FieldError::new("status", "required"));
        }
        if self
            .file_type
            .as_deref()
            .map_or(true, |s| s.trim().is_empty())
        {
            fields.push(FieldError::new("Type", "required"));
        }
        if self.storage.as_deref().map_or(true, |s| s.trim().is_empty()) {
            fields.push(FieldError::new("Storage", "required"));
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation_fields(
                "Missing required update fields (status, Type, Storage, or id).",
                fields,
            ))
        }
    }
}

/// Body of `POST /api/renewals`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRenewal {
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(rename = "purchaseDate", default, deserialize_with = "de_opt_date")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(rename = "renewalDate", default, deserialize_with = "de_opt_date")]
    pub renewal_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub cost: Option<f64>,
    #[serde(rename = "autoRenew", default)]
    pub auto_renew: Option<bool>,
    #[serde(rename = "iconType", default)]
    pub icon: Option<String>,
}

impl NewRenewal {
    /// Required-field check producing the `Missing required field(s): ...`
    /// message with one entry per absent field.
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut missing = Vec::new();
        let blank = |v: &Option<String>| v.as_deref().map_or(true, |s| s.trim().is_empty());

        if blank(&self.service) {
            missing.push("service");
        }
        if blank(&self.provider) {
            missing.push("provider");
        }
        if blank(&self.domain) {
            missing.push("domain");
        }
        if self.purchase_date.is_none() {
            missing.push("purchaseDate");
        }
        if self.renewal_date.is_none() {
            missing.push("renewalDate");
        }
        if self.cost.is_none() {
            missing.push("cost");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation_fields(
                format!("Missing required field(s): {}", missing.join(", ")),
                missing
                    .iter()
                    .map(|f| FieldError::new(*f, "required"))
                    .collect(),
            ))
        }
    }
}

/// Body of `PUT /api/renewals-updated/:id`. All fields required, matching
/// the original update contract.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRenewal {
    pub service: String,
    pub provider: String,
    pub domain: String,
    pub purchase_date: NaiveDate,
    pub renewal_date: NaiveDate,
    #[serde(deserialize_with = "de_opt_f64")]
    pub cost: Option<f64>,
    #[serde(rename = "autoRenew", default)]
    pub auto_renew: bool,
    pub daysuntilrenewal: i32,
    #[serde(default)]
    pub icon: Option<String>,
}

impl UpdateRenewal {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.cost.is_none() {
            return Err(ApiError::validation_fields(
                "All required fields must be provided.",
                vec![FieldError::new("cost", "required")],
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_projects_json() {
        let err = decode_projects("not json").unwrap_err();
        assert_eq!(err.to_string(), "projects must be valid structured data");
    }

    #[test]
    fn rejects_empty_project_array() {
        let err = decode_projects("[]").unwrap_err();
        assert_eq!(err.to_string(), "project data is missing or empty");
    }

    #[test]
    fn fills_sentinels_and_generated_refs() {
        let projects = decode_projects(r#"[{"milestones": [{}]}]"#).unwrap();
        assert_eq!(projects.len(), 1);
        let p = &projects[0];
        assert_eq!(p.ref_id.as_deref(), Some("p0"));
        assert_eq!(p.name(), "N/A");
        assert_eq!(p.status(), "start");
        assert_eq!(p.email_or("owner@example.com"), "owner@example.com");
        assert_eq!(p.milestones[0].name(), "Unnamed Milestone");
        assert_eq!(p.milestones[0].status(), "pending");
    }

    #[test]
    fn keeps_client_supplied_refs_and_rejects_duplicates() {
        let ok = decode_projects(r#"[{"ref": "a"}, {}]"#).unwrap();
        assert_eq!(ok[0].ref_id.as_deref(), Some("a"));
        assert_eq!(ok[1].ref_id.as_deref(), Some("p1"));

        let err = decode_projects(r#"[{"ref": "a"}, {"ref": "a"}]"#).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn lenient_dates_and_numeric_strings() {
        let projects = decode_projects(
            r#"[{"start_date": "", "due_date": "2025-03-01", "completion": "0.5"}]"#,
        )
        .unwrap();
        assert!(projects[0].start_date.is_none());
        assert_eq!(
            projects[0].due_date,
            Some(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
        );
        assert_eq!(projects[0].completion, Some(0.5));
    }

    #[test]
    fn credentials_require_all_three_fields() {
        let creds: Credentials = serde_json::from_str(r#"{"email": "a@b.com"}"#).unwrap();
        let err = creds.validate().unwrap_err();
        match err {
            ApiError::Validation { fields, .. } => {
                assert_eq!(fields.len(), 2); // password, role
            }
            _ => panic!("expected validation error"),
        }
    }

    #[test]
    fn credentials_reject_unknown_role() {
        let creds: Credentials = serde_json::from_str(
            r#"{"email": "a@b.com", "password": "secret1", "role": "root"}"#,
        )
        .unwrap();
        assert_eq!(
            creds.validate().unwrap_err().to_string(),
            "Invalid role selected."
        );
    }

    #[test]
    fn new_profile_from_form_collects_field_errors() {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "Acme".to_string());
        fields.insert("email".to_string(), "not-an-email".to_string());
        fields.insert("total_projects".to_string(), "three".to_string());

        let err = NewProfile::from_form(&fields).unwrap_err();
        match err {
            ApiError::Validation { fields, .. } => {
                let names: Vec<_> = fields.iter().map(|f| f.field.as_str()).collect();
                assert!(names.contains(&"email"));
                assert!(names.contains(&"total_projects"));
            }
            _ => panic!("expected validation error"),
        }
    }

    #[test]
    fn new_renewal_lists_every_missing_field() {
        let renewal: NewRenewal = serde_json::from_str(r#"{"service": "DNS"}"#).unwrap();
        let err = renewal.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required field(s): provider, domain, purchaseDate, renewalDate, cost"
        );
    }

    #[test]
    fn renewal_cost_accepts_numeric_string() {
        let renewal: NewRenewal = serde_json::from_str(
            r#"{"service": "s", "provider": "p", "domain": "d",
                "purchaseDate": "2024-01-01", "renewalDate": "2025-01-01",
                "cost": "19.99"}"#,
        )
        .unwrap();
        renewal.validate().unwrap();
        assert_eq!(renewal.cost, Some(19.99));
    }

    #[test]
    fn update_project_progress_becomes_fraction() {
        let body: UpdateProjectBody = serde_json::from_str(
            r#"{"project": {"name": "n", "status": "active", "progress": 40,
                "startDate": "2024-01-01", "dueDate": null},
                "milestones": []}"#,
        )
        .unwrap();
        assert_eq!(body.project.completion_fraction(), Some(0.4));
    }
}
