use serde::Serialize;

pub mod health;
pub mod login;
pub mod protected;
pub mod register;

/// `{"message": ...}` response body shared by the simple routes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
