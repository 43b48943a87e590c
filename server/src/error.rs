//! HTTP mapping of the domain error taxonomy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use api::ApiError;

/// Newtype so `ApiError` can implement `IntoResponse` here without the
/// domain crate depending on axum.
pub struct AppError(pub ApiError);

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self.0, "request failed");
        }

        let mut body = json!({
            "success": false,
            "error": self.0.to_string(),
        });
        if let ApiError::Validation { fields, .. } = &self.0 {
            if !fields.is_empty() {
                body["fields"] = json!(fields);
            }
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApiError) -> StatusCode {
        AppError(err).into_response().status()
    }

    #[test]
    fn taxonomy_maps_to_expected_status_codes() {
        assert_eq!(
            status_of(ApiError::validation("bad")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::Unauthorized("no".into())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(ApiError::NotFound("gone".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ApiError::Conflict("dup".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(ApiError::Internal("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(ApiError::Database(sqlx_row_not_found())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    fn sqlx_row_not_found() -> sqlx::Error {
        sqlx::Error::RowNotFound
    }
}
