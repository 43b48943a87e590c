use std::path::PathBuf;

use api::Store;

/// Shared application state, built once in `main` and cloned per request
/// (the store's pool handle is cheap to clone).
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub uploads_dir: PathBuf,
}
