//! Error types for the keyword data crate.
//!
//! [`KeywordDataError`] is raised inside provider implementations and by
//! input validation. Provider errors are recovered at the provider boundary
//! (see [`crate::provider`]) and never reach the aggregator.

use thiserror::Error;

/// Errors that can occur during keyword data operations.
#[derive(Error, Debug)]
pub enum KeywordDataError {
    /// The inbound request was invalid (e.g. blank term).
    /// This is the only error that fails a whole request.
    #[error("{0}")]
    InvalidInput(String),

    /// The provider answered with a non-success status or an
    /// unusable payload.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider body could not be parsed.
    #[error("Parse error: {provider} - {message}")]
    Parse {
        /// The provider whose payload failed to parse
        provider: String,
        /// Description of the parse failure
        message: String,
    },

    /// The provider is not configured, so the operation cannot run.
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl KeywordDataError {
    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new provider error.
    pub fn provider(provider: &str, message: impl Into<String>) -> Self {
        Self::ProviderError {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    /// Create a new parse error.
    pub fn parse(provider: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    /// Map a transport error. Timeouts are tagged with the provider, anything
    /// else stays a [`KeywordDataError::Network`].
    pub fn from_transport(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else {
            Self::Network(err)
        }
    }

    /// Whether this error was caused by the caller rather than a provider.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::NotConfigured(_))
    }
}
