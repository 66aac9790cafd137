/// Minimal identity returned when an access token checks out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub username: String,
    pub attributes: Vec<(String, String)>,
}

impl UserInfo {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            attributes: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Tokens handed back by a successful password login.
///
/// Every field is optional because the user pool may omit any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthenticationResult {
    pub access_token: Option<String>,
    pub id_token: Option<String>,
    pub refresh_token: Option<String>,
}

/// Outcome of a password login that the user pool did not reject outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Tokens(AuthenticationResult),
    /// The pool wants another step (new password, MFA, ...) before issuing tokens.
    Challenge { name: String, session: String },
}

/// User attributes attached to a sign-up. The email doubles as the display name.
pub fn registration_attributes(email: &str) -> Vec<(&'static str, String)> {
    vec![("name", email.to_string()), ("email", email.to_string())]
}
