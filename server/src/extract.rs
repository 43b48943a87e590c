//! Request extractors.

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use api::ApiError;

use crate::error::AppError;

/// `axum::Json` with its rejection mapped into the standard
/// `{"success": false, "error": ...}` body. Without this, a body that
/// fails deserialization (missing field, wrong type, bad syntax) would
/// surface as axum's plain-text 422 instead of the API's 400 shape.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::validation(rejection.body_text()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::routing::put;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    #[allow(dead_code)]
    struct Payload {
        service: String,
    }

    async fn handler(AppJson(_payload): AppJson<Payload>) -> StatusCode {
        StatusCode::OK
    }

    #[tokio::test]
    async fn missing_field_yields_standard_400_body() {
        let app = Router::new().route("/r", put(handler));
        let request = Request::builder()
            .method("PUT")
            .uri("/r")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], serde_json::Value::Bool(false));
        assert!(body["error"].as_str().unwrap().contains("service"));
    }

    #[tokio::test]
    async fn valid_body_passes_through() {
        let app = Router::new().route("/r", put(handler));
        let request = Request::builder()
            .method("PUT")
            .uri("/r")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"service": "dns"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
