//! Data models for the application.

mod deliverable;
mod milestone;
mod profile;
mod project;
mod renewal;
mod user;

pub use deliverable::{Deliverable, DeliverableDetail, DeliverableSummary};
pub use milestone::{Milestone, MilestoneBrief};
pub use profile::EmployeeProfile;
pub use project::{Project, ProjectDetailRow};
pub use renewal::{Renewal, RenewalSummary};
pub use user::{User, UserInfo};
