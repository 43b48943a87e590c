//! Subscription renewal rows. Renewals are independent of the other
//! entities; there are no foreign keys here.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Full `renewals` row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Renewal {
    pub id: i32,
    pub service: String,
    pub provider: String,
    pub domain: String,
    pub purchase_date: NaiveDate,
    pub renewal_date: NaiveDate,
    pub cost: f64,
    pub status: String,
    pub auto_renew: bool,
    pub days_until_renewal: Option<i32>,
    pub icon: Option<String>,
    pub active: bool,
    pub updated_at: DateTime<Utc>,
}

/// List shape for `GET /api/renewals-data`. Field names match what the
/// frontend consumes (`autoRenew`, `iconType`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RenewalSummary {
    pub id: i32,
    pub service: String,
    pub provider: String,
    pub domain: String,
    pub purchase_date: NaiveDate,
    pub renewal_date: NaiveDate,
    pub cost: f64,
    #[serde(rename = "autoRenew")]
    pub auto_renew: bool,
    pub status: String,
    #[serde(rename = "iconType")]
    pub icon_type: String,
}
