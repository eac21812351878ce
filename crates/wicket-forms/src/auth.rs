// File: src/auth.rs
// Purpose: Authentication capability trait and an in-memory reference implementation

use crate::credentials::Credentials;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome reported by an authentication capability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AuthResult {
    /// Successful authentication
    pub fn granted() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// Failed authentication with a displayable message
    pub fn denied(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// Trait for authentication capabilities
///
/// The form controller consumes this and assumes nothing about where the
/// account data lives or how the call travels. A denial comes back as
/// `Ok` with `success: false`; `Err` means the capability itself failed.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Attempt to authenticate the submitted credentials
    async fn login(&self, credentials: &Credentials) -> Result<AuthResult>;
}

/// In-memory authenticator backed by a fixed email/password table
///
/// Useful for demos and tests. Unknown emails and wrong passwords are
/// indistinguishable in the reported message.
#[derive(Debug, Clone, Default)]
pub struct StaticAuthenticator {
    users: HashMap<String, String>,
}

impl StaticAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an accepted email/password pair
    pub fn with_user(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.users.insert(email.into(), password.into());
        self
    }
}

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResult> {
        match self.users.get(&credentials.email) {
            Some(password) if password == &credentials.password => Ok(AuthResult::granted()),
            _ => Ok(AuthResult::denied("Invalid credentials")),
        }
    }
}
