use axum::{Extension, Json};

use super::MessageResponse;
use crate::middleware::auth::AuthUser;

pub async fn protected_resource(Extension(user): Extension<AuthUser>) -> Json<MessageResponse> {
    tracing::debug!(username = %user.username, "serving protected resource");
    Json(MessageResponse::new(
        "You are authorized to access this resource.",
    ))
}
