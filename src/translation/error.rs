//! Error types for provider attempts and for the orchestrator as a whole.

use reqwest::StatusCode;
use std::fmt;
use std::time::Duration;

/// The broad category of a single provider failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Timeout,
    HttpError,
    MalformedResponse,
    NetworkError,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Timeout => "timeout",
            Self::HttpError => "http_error",
            Self::MalformedResponse => "malformed_response",
            Self::NetworkError => "network_error",
        };
        f.write_str(name)
    }
}

/// Why one provider could not produce a translation.
///
/// These are recovered by the orchestrator and never shown to callers.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{provider} did not respond within {after:?}")]
    Timeout { provider: String, after: Duration },

    #[error("{provider} returned HTTP {status}: {body}")]
    Http {
        provider: String,
        status: StatusCode,
        body: String,
    },

    #[error("{provider} returned an unexpected response: {reason}")]
    MalformedResponse { provider: String, reason: String },

    #[error("{provider} request failed: {source}")]
    Network {
        provider: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ProviderError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Timeout { .. } => FailureKind::Timeout,
            Self::Http { .. } => FailureKind::HttpError,
            Self::MalformedResponse { .. } => FailureKind::MalformedResponse,
            Self::Network { .. } => FailureKind::NetworkError,
        }
    }

    pub fn provider(&self) -> &str {
        match self {
            Self::Timeout { provider, .. }
            | Self::Http { provider, .. }
            | Self::MalformedResponse { provider, .. }
            | Self::Network { provider, .. } => provider,
        }
    }

    pub fn malformed(provider: &str, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider: provider.to_string(),
            reason: reason.into(),
        }
    }

    /// Classifies a transport error from reqwest.
    pub fn from_reqwest(provider: &str, timeout: Duration, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
                after: timeout,
            }
        } else if let Some(status) = err.status() {
            Self::Http {
                provider: provider.to_string(),
                status,
                body: String::new(),
            }
        } else if err.is_decode() {
            Self::malformed(provider, err.to_string())
        } else {
            Self::Network {
                provider: provider.to_string(),
                source: Box::new(err),
            }
        }
    }
}

pub const INVALID_REQUEST_MESSAGE: &str = "Missing required parameters";
pub const UNAVAILABLE_MESSAGE: &str = "Translation services unavailable. Please try again later.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Translation failed";

/// The terminal outcome of a failed translation.
///
/// Each variant displays a fixed message that is safe to show to end users;
/// provider details stay in the attached failures and in the logs.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("{}", INVALID_REQUEST_MESSAGE)]
    InvalidRequest,

    #[error("{}", UNAVAILABLE_MESSAGE)]
    AllProvidersUnavailable { failures: Vec<ProviderError> },

    #[error("{}", INTERNAL_ERROR_MESSAGE)]
    Internal { detail: String },
}

impl TranslateError {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// Whether retrying the same request later may succeed.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::AllProvidersUnavailable { .. })
    }
}
