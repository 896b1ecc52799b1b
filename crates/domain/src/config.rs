//! Configuration management

use serde::{Deserialize, Serialize};

use crate::{IntercallError, Result};

/// Default request timeout applied by the HTTP transport.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntercallConfig {
    pub credentials: Credentials,
    /// SOAP endpoint every envelope is posted to
    pub endpoint: String,
    /// WSDL document location (URL or filesystem path)
    #[serde(default)]
    pub document: Option<String>,
    /// Owner number used for dial-in lookups when the caller passes none
    #[serde(default)]
    pub default_owner_number: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
}

/// Vendor account credentials merged into every request
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub account_number: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("account_number", &self.account_number)
            .finish()
    }
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            account_number: account_number.into(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl IntercallConfig {
    /// Create a configuration with default timeout and no document.
    pub fn new(credentials: Credentials, endpoint: impl Into<String>) -> Self {
        Self {
            credentials,
            endpoint: endpoint.into(),
            document: None,
            default_owner_number: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }

    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.document = Some(document.into());
        self
    }

    pub fn with_default_owner_number(mut self, owner_number: impl Into<String>) -> Self {
        self.default_owner_number = Some(owner_number.into());
        self
    }

    /// Check that credentials are present and the endpoint is an HTTP(S) URL.
    ///
    /// # Errors
    /// Returns `IntercallError::Config` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("username", &self.credentials.username),
            ("password", &self.credentials.password),
            ("account_number", &self.credentials.account_number),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(IntercallError::Config(format!("credentials.{name} must not be blank")));
            }
        }

        let endpoint = url::Url::parse(&self.endpoint).map_err(|e| {
            IntercallError::Config(format!("Invalid endpoint URL '{}': {}", self.endpoint, e))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(IntercallError::Config(format!(
                "Endpoint must use http or https, got '{}'",
                endpoint.scheme()
            )));
        }

        if self.timeout_secs == 0 {
            return Err(IntercallError::Config("timeout_secs must be greater than zero".into()));
        }

        Ok(())
    }
}
