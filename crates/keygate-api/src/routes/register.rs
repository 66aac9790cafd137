use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if self.email.is_empty() {
            return Err(ApiError::BadRequest("email is required".to_string()));
        }
        if self.password.is_empty() {
            return Err(ApiError::BadRequest("password is required".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: String,
}

/// Create a new user pool account keyed by email.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let Json(req) = payload?;
    req.validate()?;

    let user = state.provider.register(&req.email, &req.password).await?;

    tracing::info!(email = %req.email, user = %user, "user registered");
    Ok(Json(RegisterResponse {
        message: "success".to_string(),
        user,
    }))
}
