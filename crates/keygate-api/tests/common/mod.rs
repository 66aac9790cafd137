#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use keygate_api::state::AppState;
use keygate_auth::error::AuthError;
use keygate_auth::provider::IdentityProvider;
use keygate_auth::types::{AuthOutcome, UserInfo};

pub const VALID_TOKEN: &str = "valid-access-token";

/// In-memory identity provider. Records every call it receives.
pub struct FakeProvider {
    pub login: Mutex<Option<Result<AuthOutcome, AuthError>>>,
    pub register_result: Mutex<Option<Result<String, AuthError>>>,
    pub validated_tokens: Mutex<Vec<String>>,
    pub login_calls: Mutex<Vec<(String, String)>>,
    pub sign_ups: Mutex<Vec<(String, String)>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self {
            login: Mutex::new(None),
            register_result: Mutex::new(None),
            validated_tokens: Mutex::new(Vec::new()),
            login_calls: Mutex::new(Vec::new()),
            sign_ups: Mutex::new(Vec::new()),
        }
    }

    pub fn with_login(self, outcome: Result<AuthOutcome, AuthError>) -> Self {
        *self.login.lock().unwrap() = Some(outcome);
        self
    }

    pub fn with_register(self, result: Result<String, AuthError>) -> Self {
        *self.register_result.lock().unwrap() = Some(result);
        self
    }
}

#[async_trait]
impl IdentityProvider for FakeProvider {
    async fn validate_token(&self, access_token: &str) -> Result<UserInfo, AuthError> {
        self.validated_tokens
            .lock()
            .unwrap()
            .push(access_token.to_string());
        if access_token == VALID_TOKEN {
            Ok(UserInfo::new("ada"))
        } else {
            Err(AuthError::InvalidToken("Access Token has expired".to_string()))
        }
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthOutcome, AuthError> {
        self.login_calls
            .lock()
            .unwrap()
            .push((username.to_string(), password.to_string()));
        self.login
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(AuthError::AuthFailed("no login configured".to_string())))
    }

    async fn register(&self, email: &str, password: &str) -> Result<String, AuthError> {
        self.sign_ups
            .lock()
            .unwrap()
            .push((email.to_string(), password.to_string()));
        self.register_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok("3f1c2d4e-0000-4000-8000-000000000001".to_string()))
    }
}

pub fn app(provider: Arc<FakeProvider>) -> Router {
    keygate_api::router(AppState::new(provider))
}

pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_auth(uri: &str, authorization: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", authorization)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
