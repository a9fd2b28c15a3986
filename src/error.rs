//! Error types for SAML provider configuration operations.
//!
//! Every operation on [`ProviderConfigClient`](crate::client::ProviderConfigClient)
//! returns a [`ProviderConfigError`]. Local validation failures surface as
//! [`ProviderConfigError::InvalidArgument`] before any request is sent; failures
//! reported by the remote service are classified through [`ServiceErrorCode`].

use crate::client::TransportError;
use serde::Deserialize;

/// Main error type for provider configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ProviderConfigError {
    /// Malformed identifier, missing parameters, or a field that failed local validation.
    ///
    /// The message is rendered verbatim so callers can match on stable prefixes
    /// such as `"invalid SAML provider id: "`.
    #[error("{message}")]
    InvalidArgument { message: String },

    /// No project identifier could be resolved for the call
    #[error("project id not available")]
    ProjectIdNotAvailable,

    /// The service reported that the configuration does not exist
    #[error("configuration not found (status {status}): {message}")]
    ConfigurationNotFound { status: u16, message: String },

    /// Any other non-success or undecodable service response
    #[error("unknown service error (status {status}): {body}")]
    Unknown { status: u16, body: String },

    /// Network or connection failure, passed through unmodified
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The request body could not be encoded
    #[error("failed to encode request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The caller's deadline elapsed before the exchange completed
    #[error("deadline exceeded before the request completed")]
    DeadlineExceeded,
}

/// Result type for provider configuration operations.
pub type ProviderConfigResult<T> = Result<T, ProviderConfigError>;

impl ProviderConfigError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an unknown error carrying the raw response.
    pub fn unknown(status: u16, body: impl Into<String>) -> Self {
        Self::Unknown {
            status,
            body: body.into(),
        }
    }

    /// Classify a non-success service response.
    ///
    /// The body is parsed as a service error document; only a recognised
    /// error code produces a specific variant.
    pub fn from_service_response(status: u16, body: &str) -> Self {
        match ServiceErrorCode::parse(body) {
            Some((ServiceErrorCode::ConfigurationNotFound, message)) => {
                Self::ConfigurationNotFound { status, message }
            }
            _ => Self::unknown(status, body),
        }
    }

    /// Check whether this error reports a missing configuration.
    pub fn is_configuration_not_found(&self) -> bool {
        matches!(self, Self::ConfigurationNotFound { .. })
    }

    /// Check whether this error is an unclassified service error.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }

    /// Check whether this error was raised by local validation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Error codes the management API reports in its error documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceErrorCode {
    /// `CONFIGURATION_NOT_FOUND`
    ConfigurationNotFound,
    /// Any code this client does not classify
    Other(String),
}

#[derive(Deserialize)]
struct ServiceErrorDocument {
    error: ServiceErrorBody,
}

#[derive(Deserialize)]
struct ServiceErrorBody {
    #[serde(default)]
    message: String,
}

impl ServiceErrorCode {
    /// Parse the error code out of a service error document.
    ///
    /// The service reports errors as `{"error": {"message": "CODE : detail"}}`.
    /// Returns the code together with the full message, or `None` if the body
    /// is not an error document or carries no code.
    pub fn parse(body: &str) -> Option<(Self, String)> {
        let document: ServiceErrorDocument = serde_json::from_str(body).ok()?;
        let message = document.error.message;
        let code = message.split(':').next().map(str::trim).unwrap_or_default();
        if code.is_empty() {
            return None;
        }

        Some((Self::from_code(code), message))
    }

    fn from_code(code: &str) -> Self {
        match code {
            "CONFIGURATION_NOT_FOUND" => Self::ConfigurationNotFound,
            other => Self::Other(other.to_string()),
        }
    }
}
