use std::time::Instant;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

/// One `api_request` event per request, with status and latency.
///
/// Requests turned away with 401 are logged at warn, together with whether
/// the caller sent an `Authorization` header at all, so bad tokens and
/// failed logins can be told apart from anonymous probing.
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let sent_authorization = req.headers().contains_key(AUTHORIZATION);
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    if status == StatusCode::UNAUTHORIZED {
        tracing::warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            sent_authorization,
            elapsed_ms,
            "api_request"
        );
    } else {
        tracing::info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms,
            "api_request"
        );
    }

    response
}
