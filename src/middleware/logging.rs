//! Logging middleware

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

/// How a finished request is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Served,
    Rejected,
    Failed,
}

impl Outcome {
    /// Missing contests are a normal answer, not a client mistake
    fn of(status: StatusCode) -> Self {
        if status.is_server_error() {
            Self::Failed
        } else if status.is_client_error() && status != StatusCode::NOT_FOUND {
            Self::Rejected
        } else {
            Self::Served
        }
    }
}

/// Emit one event per request, keyed by the route template
/// (`/contest/{contest_id}`) so requests for different contests group together
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| path.clone(), |matched| matched.as_str().to_string());

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

    match Outcome::of(response.status()) {
        Outcome::Served => info!(%method, %route, %path, status, latency_ms, "Request completed"),
        Outcome::Rejected => warn!(
            %method,
            %route,
            %path,
            status,
            latency_ms,
            "Request rejected"
        ),
        Outcome::Failed => warn!(
            %method,
            %route,
            %path,
            status,
            latency_ms,
            "Request failed"
        ),
    }

    response
}
