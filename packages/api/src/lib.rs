//! # API crate — domain layer for the ClientDesk admin portal
//!
//! Everything the HTTP server needs that is not HTTP: database models, the
//! PostgreSQL [`Store`], request DTOs with validation, authentication
//! primitives, and the error taxonomy.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Argon2id password hashing and signed, expiring access tokens |
//! | [`dto`] | Typed request payloads validated before they reach the store |
//! | [`error`] | [`ApiError`] — the taxonomy every fallible operation maps into |
//! | [`models`] | Database rows (`sqlx::FromRow`) and their client-safe projections |
//! | [`store`] | The injected [`Store`]: connection pool lifecycle plus all queries, including the transactional profile-creation coordinator |

pub mod auth;
pub mod dto;
pub mod error;
pub mod models;
pub mod store;

pub use error::ApiError;
pub use store::Store;
