use axum::http::StatusCode;

/// `GET /healthz` — liveness probe, always OK while the process runs.
pub async fn healthz() -> &'static str {
    "ok"
}

/// `GET /readyz` — readiness probe. Services with external dependencies
/// can mount their own handler instead.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
