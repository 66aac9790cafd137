use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use keygate_auth::types::AuthOutcome;

use crate::error::{ApiError, INVALID_CREDENTIALS, LOGIN_FAILED};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if self.username.is_empty() {
            return Err(ApiError::BadRequest("username is required".to_string()));
        }
        if self.password.is_empty() {
            return Err(ApiError::BadRequest("password is required".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Exchange a username and password for an access token.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(req) = payload?;
    req.validate()?;

    let outcome = state
        .provider
        .authenticate(&req.username, &req.password)
        .await
        .map_err(|e| {
            warn!(username = %req.username, error = %e, "login rejected");
            ApiError::unauthorized(INVALID_CREDENTIALS)
        })?;

    let result = match outcome {
        AuthOutcome::Tokens(result) => result,
        AuthOutcome::Challenge { name, .. } => {
            warn!(username = %req.username, challenge = %name, "login returned a challenge");
            return Err(ApiError::unauthorized(LOGIN_FAILED));
        }
    };

    // Success is gated on the ID token, but callers receive the access token.
    match (result.id_token, result.access_token) {
        (Some(_), Some(access_token)) => {
            info!(username = %req.username, "login succeeded");
            Ok(Json(LoginResponse {
                token: access_token,
            }))
        }
        _ => {
            warn!(username = %req.username, "authentication result missing tokens");
            Err(ApiError::unauthorized(LOGIN_FAILED))
        }
    }
}
