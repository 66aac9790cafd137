//! keygate-auth
//!
//! Cognito user pool access: token validation, admin password login and
//! self-service sign-up. No HTTP dependency.

pub mod client;
pub mod cognito;
pub mod error;
pub mod provider;
pub mod types;
