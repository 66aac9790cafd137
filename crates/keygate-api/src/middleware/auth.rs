use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::{ApiError, INVALID_ACCESS_TOKEN, MISSING_AUTH_HEADER};
use crate::state::AppState;

/// Length of the `"Bearer "` scheme prefix. The prefix text itself is not checked.
pub const BEARER_PREFIX_LEN: usize = "Bearer ".len();

/// Bearer token validation middleware.
///
/// Strips the scheme prefix from the `Authorization` header and asks the
/// identity provider whether the remaining token is valid. On success,
/// inserts [`AuthUser`] into request extensions for handlers to use.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = {
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::unauthorized(MISSING_AUTH_HEADER))?;

        header
            .to_str()
            .ok()
            .and_then(bearer_token)
            .ok_or_else(|| ApiError::unauthorized(INVALID_ACCESS_TOKEN))?
            .to_string()
    };

    let user = state.provider.validate_token(&token).await.map_err(|e| {
        tracing::warn!(error = %e, "rejecting request with invalid access token");
        ApiError::unauthorized(INVALID_ACCESS_TOKEN)
    })?;

    req.extensions_mut().insert(AuthUser {
        username: user.username,
    });

    Ok(next.run(req).await)
}

/// Everything after the first [`BEARER_PREFIX_LEN`] bytes of the header.
///
/// `None` when the header is too short, the cut would split a character, or
/// nothing is left.
pub fn bearer_token(header: &str) -> Option<&str> {
    header.get(BEARER_PREFIX_LEN..).filter(|t| !t.is_empty())
}

/// Identity of the caller, attached once the access token has been validated.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub username: String,
}
