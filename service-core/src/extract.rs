use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor whose rejections use the service error shape.
///
/// Axum's own `Json` rejection answers with a plain-text body; this wrapper
/// keeps the rejection's status (400, 415 or 422) and moves the message into
/// `{"detail": ...}`. A body without any `Content-Type` is parsed as JSON;
/// only a declared non-JSON type is refused with 415.
pub struct JsonBody<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(header::CONTENT_TYPE) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| rejected(e.status(), e.body_text()))?;
            return Ok(JsonBody(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| rejected(e.status(), e.body_text()))?;
        let Json(value) =
            Json::<T>::from_bytes(&bytes).map_err(|e| rejected(e.status(), e.body_text()))?;

        Ok(JsonBody(value))
    }
}

fn rejected(status: StatusCode, message: String) -> AppError {
    tracing::debug!(%status, error = %message, "Rejected JSON body");
    AppError::Rejected { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::post,
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::util::ServiceExt;

    #[derive(Deserialize)]
    struct Echo {
        text: String,
    }

    fn app() -> Router {
        Router::new().route(
            "/echo",
            post(|JsonBody(body): JsonBody<Echo>| async move { body.text }),
        )
    }

    fn json_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/echo")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn detail(res: axum::response::Response) -> String {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        value["detail"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn accepts_valid_body() {
        let res = app().oneshot(json_request(r#"{"text":"hi"}"#)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_field_is_unprocessable() {
        let res = app().oneshot(json_request(r#"{"other":1}"#)).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(detail(res).await.contains("text"));
    }

    #[tokio::test]
    async fn syntax_error_is_bad_request() {
        let res = app().oneshot(json_request("{not json")).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn body_without_content_type_is_parsed_as_json() {
        let req = Request::builder()
            .method("POST")
            .uri("/echo")
            .body(Body::from(r#"{"text":"hi"}"#))
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn body_without_content_type_still_needs_text() {
        let req = Request::builder()
            .method("POST")
            .uri("/echo")
            .body(Body::from(r#"{"other":1}"#))
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn non_json_content_type_is_unsupported() {
        let req = Request::builder()
            .method("POST")
            .uri("/echo")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(r#"{"text":"hi"}"#))
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(detail(res).await.contains("Content-Type"));
    }
}
