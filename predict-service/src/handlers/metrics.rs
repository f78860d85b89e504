use axum::{http::header, response::IntoResponse};
use service_core::middleware::metrics::render_metrics;

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_metrics(),
    )
}
