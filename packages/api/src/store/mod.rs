//! # Store — PostgreSQL access
//!
//! [`Store`] wraps the connection pool and owns every query in the system.
//! It is constructed once at process start and passed into the HTTP layer
//! explicitly; nothing in this crate holds a process-wide singleton.
//!
//! Lifecycle: [`Store::connect`] opens the pool (5 connections),
//! [`Store::migrate`] applies the schema, [`Store::healthcheck`] issues
//! `SELECT 1`, and [`Store::close`] drains the pool at shutdown.
//!
//! Query modules:
//!
//! - `users` — signup/login lookups
//! - `profiles` — employee profiles, including the transactional
//!   profile + projects + milestones coordinator
//! - `projects` — project reads, the joined detail view, and the
//!   transactional project/milestone update
//! - `deliverables` — joined list/detail reads and updates
//! - `renewals` — independent renewal records

mod deliverables;
mod profiles;
mod projects;
mod renewals;
mod users;

pub use profiles::ProfileCreation;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Injected database handle. Cloning is cheap (the pool is shared).
#[derive(Debug, Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Open a connection pool against the given database URL.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool (used by test harnesses).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply pending migrations.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    /// Cheap liveness probe.
    pub async fn healthcheck(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Drain the pool. Called once at shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}
