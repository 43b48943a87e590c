//! Router assembly. Signup/login are public; every data route sits behind
//! the bearer-token middleware. Uploaded files are served statically at
//! `/uploads`.

pub mod auth;
pub mod deliverables;
pub mod profiles;
pub mod projects;
pub mod renewals;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::middleware::require_auth;
use crate::state::AppState;

/// Uploads may carry a profile video.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/api/signup", post(auth::signup))
        .route("/api/login", post(auth::login));

    let protected = Router::new()
        .route("/api/widgets-data", get(profiles::widgets_data))
        .route("/api/employees", post(profiles::create_employee))
        .route("/api/employees-delete/:id", delete(profiles::delete_employee))
        .route("/api/edit-profile-data/:id", get(profiles::edit_profile_data))
        .route("/api/profile-Updated/:id", put(profiles::update_profile))
        .route("/api/project-Data", get(projects::project_data))
        .route("/api/Edit-Project-data/:id", get(projects::edit_project_data))
        .route("/api/projects/details/:id", get(projects::project_details))
        .route("/api/project/:projectId", put(projects::update_project))
        .route("/api/project-delete/:id", delete(projects::delete_project))
        .route("/api/deliverable-data", get(deliverables::deliverable_data))
        .route("/api/deliverable-view", get(deliverables::deliverable_view))
        .route(
            "/api/deliverable-updated/:id",
            put(deliverables::update_deliverable),
        )
        .route(
            "/api/deliverable-delete/:id",
            delete(deliverables::delete_deliverable),
        )
        .route("/api/renewals-data", get(renewals::renewals_data))
        .route("/api/renewals", post(renewals::create_renewal))
        .route("/api/renewals-updated/:id", put(renewals::update_renewal))
        .route("/api/renewal-delete/:id", delete(renewals::delete_renewal))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    Router::new()
        .merge(public)
        .merge(protected)
        .nest_service("/uploads", ServeDir::new(&state.uploads_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
