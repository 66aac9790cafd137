use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::Client;
use aws_sdk_cognitoidentityprovider::error::ProvideErrorMetadata;
use aws_sdk_cognitoidentityprovider::types::{AttributeType, AuthFlowType};
use tracing::{info, warn};

use crate::client::build_client;
use crate::error::AuthError;
use crate::provider::IdentityProvider;
use crate::types::{AuthOutcome, AuthenticationResult, UserInfo, registration_attributes};

/// [`IdentityProvider`] backed by a Cognito user pool.
#[derive(Clone, Debug)]
pub struct CognitoProvider {
    client: Client,
    client_id: String,
    user_pool_id: String,
}

impl CognitoProvider {
    pub fn new(
        client: Client,
        client_id: impl Into<String>,
        user_pool_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            client_id: client_id.into(),
            user_pool_id: user_pool_id.into(),
        }
    }

    /// Build the SDK client for `region` and wrap it.
    pub async fn connect(
        client_id: impl Into<String>,
        user_pool_id: impl Into<String>,
        region: Option<&str>,
    ) -> Self {
        Self::new(build_client(region).await, client_id, user_pool_id)
    }
}

#[async_trait]
impl IdentityProvider for CognitoProvider {
    async fn validate_token(&self, access_token: &str) -> Result<UserInfo, AuthError> {
        let resp = self
            .client
            .get_user()
            .access_token(access_token)
            .send()
            .await
            .map_err(|e| {
                let err = e.into_service_error();
                warn!(error = %err, "access token rejected");
                AuthError::InvalidToken(err.to_string())
            })?;

        let attributes = resp
            .user_attributes()
            .iter()
            .map(|a| (a.name().to_string(), a.value().unwrap_or_default().to_string()))
            .collect();

        Ok(UserInfo {
            username: resp.username().to_string(),
            attributes,
        })
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthOutcome, AuthError> {
        info!(username = username, "initiating admin auth");

        let mut auth_params = HashMap::new();
        auth_params.insert("USERNAME".to_string(), username.to_string());
        auth_params.insert("PASSWORD".to_string(), password.to_string());

        let resp = self
            .client
            .admin_initiate_auth()
            .auth_flow(AuthFlowType::AdminNoSrpAuth)
            .client_id(&self.client_id)
            .user_pool_id(&self.user_pool_id)
            .set_auth_parameters(Some(auth_params))
            .send()
            .await
            .map_err(|e| AuthError::AuthFailed(e.into_service_error().to_string()))?;

        match resp.authentication_result() {
            Some(result) => Ok(AuthOutcome::Tokens(AuthenticationResult {
                access_token: result.access_token().map(str::to_string),
                id_token: result.id_token().map(str::to_string),
                refresh_token: result.refresh_token().map(str::to_string),
            })),
            None => Ok(AuthOutcome::Challenge {
                name: resp
                    .challenge_name()
                    .map(|c| c.as_str().to_string())
                    .unwrap_or_default(),
                session: resp.session().unwrap_or_default().to_string(),
            }),
        }
    }

    async fn register(&self, email: &str, password: &str) -> Result<String, AuthError> {
        info!(email = email, "signing up user");

        let attributes = registration_attributes(email)
            .into_iter()
            .map(|(name, value)| {
                AttributeType::builder()
                    .name(name)
                    .value(value)
                    .build()
                    .map_err(|e| AuthError::Cognito(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let resp = self
            .client
            .sign_up()
            .client_id(&self.client_id)
            .username(email)
            .password(password)
            .set_user_attributes(Some(attributes))
            .send()
            .await
            .map_err(|e| {
                let err = e.into_service_error();
                let message = err
                    .message()
                    .map(str::to_string)
                    .unwrap_or_else(|| err.to_string());
                AuthError::RegistrationRejected(message)
            })?;

        Ok(resp.user_sub().to_string())
    }
}
