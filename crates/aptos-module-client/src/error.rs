//! Error types for module clients.
//!
//! [`AptosError`] covers both the failures raised by generated members
//! themselves (a missing collaborator capability, an unknown member name)
//! and the failures of the bundled fullnode reader. Errors returned by a
//! user-supplied collaborator pass through unchanged.

use std::fmt;
use thiserror::Error;

/// A specialized Result type for module client operations.
pub type AptosResult<T> = Result<T, AptosError>;

/// A collaborator capability that a generated member may require.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Signing and submitting transactions.
    Signer,
    /// Fetching a resource stored under an account.
    AccountResource,
    /// Fetching events by event handle.
    Events,
}

impl Capability {
    /// The fixed message reported when this capability is missing.
    pub fn missing_message(&self) -> &'static str {
        match self {
            Capability::Signer => "Client is not able to sign transactions.",
            Capability::AccountResource => {
                "Signer does not implement the \"get_account_resource\" function."
            }
            Capability::Events => {
                "Signer does not implement the \"get_events_by_event_handle\" function."
            }
        }
    }

    /// Returns the capability name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Signer => "sign_and_submit_transaction",
            Capability::AccountResource => "get_account_resource",
            Capability::Events => "get_events_by_event_handle",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.missing_message())
    }
}

/// The main error type for module clients.
#[derive(Error, Debug)]
pub enum AptosError {
    /// A generated member was invoked without the capability it needs
    #[error("{0}")]
    MissingCapability(Capability),

    /// Error occurred during HTTP communication
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error occurred during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error occurred during URL parsing
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// API returned an error response
    #[error("API error ({status_code}): {message}")]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
        /// Optional error code from the API
        error_code: Option<String>,
        /// Optional VM error code
        vm_error_code: Option<u64>,
    },

    /// Member or on-chain item not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AptosError {
    /// Creates a new API error from response details
    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status_code,
            message: message.into(),
            error_code: None,
            vm_error_code: None,
        }
    }

    /// Creates a new API error with additional details
    pub fn api_with_details(
        status_code: u16,
        message: impl Into<String>,
        error_code: Option<String>,
        vm_error_code: Option<u64>,
    ) -> Self {
        Self::Api {
            status_code,
            message: message.into(),
            error_code,
            vm_error_code,
        }
    }

    /// Returns the missing capability if this error reports one.
    pub fn missing_capability(&self) -> Option<Capability> {
        match self {
            Self::MissingCapability(capability) => Some(*capability),
            _ => None,
        }
    }

    /// Returns true if this error reports a missing collaborator capability
    pub fn is_missing_capability(&self) -> bool {
        matches!(self, Self::MissingCapability(_))
    }

    /// Returns true if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::Api {
                    status_code: 404,
                    ..
                }
        )
    }

    /// Returns true if this is a transient error that might succeed on retry
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status_code, .. } => {
                matches!(status_code, 429 | 500 | 502 | 503 | 504)
            }
            _ => false,
        }
    }
}
