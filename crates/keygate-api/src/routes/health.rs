use axum::Json;

use super::MessageResponse;

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello, World!"))
}
