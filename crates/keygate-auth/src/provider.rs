use async_trait::async_trait;

use crate::error::AuthError;
use crate::types::{AuthOutcome, UserInfo};

/// The three identity operations the HTTP layer needs.
///
/// Implementations hold only read-only configuration, so one instance is
/// shared across all requests.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Check an access token with the provider and return who it belongs to.
    async fn validate_token(&self, access_token: &str) -> Result<UserInfo, AuthError>;

    /// Exchange a username and password for tokens.
    async fn authenticate(&self, username: &str, password: &str)
    -> Result<AuthOutcome, AuthError>;

    /// Create a user whose username is `email`. Returns the provider-assigned user id.
    async fn register(&self, email: &str, password: &str) -> Result<String, AuthError>;
}
