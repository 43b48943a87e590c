//! Renewal queries. Renewals have no foreign keys to other entities.

use crate::dto::{NewRenewal, UpdateRenewal};
use crate::error::ApiError;
use crate::models::{Renewal, RenewalSummary};
use crate::store::Store;

impl Store {
    /// Active renewals for the list view, oldest first.
    pub async fn list_active_renewals(&self) -> Result<Vec<RenewalSummary>, ApiError> {
        let rows = sqlx::query_as::<_, RenewalSummary>(
            "SELECT id, service, provider, domain, purchase_date, renewal_date,
                    cost, auto_renew, status, 'Globe' AS icon_type
             FROM renewals
             WHERE active = TRUE
             ORDER BY id",
        )
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    /// Insert a renewal; new rows start active with status 'Active'.
    pub async fn create_renewal(&self, renewal: &NewRenewal) -> Result<i32, ApiError> {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO renewals
                (service, provider, domain, purchase_date, renewal_date,
                 cost, status, auto_renew, icon)
             VALUES ($1, $2, $3, $4, $5, $6, 'Active', $7, $8)
             RETURNING id",
        )
        .bind(&renewal.service)
        .bind(&renewal.provider)
        .bind(&renewal.domain)
        .bind(renewal.purchase_date)
        .bind(renewal.renewal_date)
        .bind(renewal.cost.unwrap_or(0.0))
        .bind(renewal.auto_renew.unwrap_or(false))
        .bind(&renewal.icon)
        .fetch_one(self.pool())
        .await?;
        Ok(id)
    }

    /// Full-row renewal update. `None` when the id does not exist.
    pub async fn update_renewal(
        &self,
        id: i32,
        update: &UpdateRenewal,
    ) -> Result<Option<Renewal>, ApiError> {
        let row = sqlx::query_as::<_, Renewal>(
            "UPDATE renewals SET
                service = $1, provider = $2, domain = $3, purchase_date = $4,
                renewal_date = $5, cost = $6, auto_renew = $7,
                days_until_renewal = $8, icon = $9, updated_at = NOW()
             WHERE id = $10
             RETURNING *",
        )
        .bind(&update.service)
        .bind(&update.provider)
        .bind(&update.domain)
        .bind(update.purchase_date)
        .bind(update.renewal_date)
        .bind(update.cost)
        .bind(update.auto_renew)
        .bind(update.daysuntilrenewal)
        .bind(&update.icon)
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        Ok(row)
    }

    /// Soft delete; false when absent or already inactive.
    pub async fn deactivate_renewal(&self, id: i32) -> Result<bool, ApiError> {
        let result = sqlx::query(
            "UPDATE renewals
             SET active = FALSE, updated_at = NOW()
             WHERE id = $1 AND active = TRUE",
        )
        .bind(id)
        .execute(self.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
