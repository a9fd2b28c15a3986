//! Transport abstraction for the management API.
//!
//! The client never talks to the network itself. It hands a fully described
//! [`TransportRequest`] to an injected [`Transport`], which attaches
//! credentials, performs the exchange, and reports the status and raw body.

use std::fmt;
use std::future::Future;
use url::Url;

/// HTTP methods used by the provider configuration API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single request to the management API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: HttpMethod,
    /// Project-relative resource path, e.g. `projects/p/inboundSamlConfigs/saml.x`
    pub path: String,
    /// Query parameters, in order
    pub query: Vec<(String, String)>,
    /// Pre-serialized JSON body
    pub body: Option<String>,
}

impl TransportRequest {
    /// Create a request with no query parameters and no body.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Append a query parameter.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// Look up a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Render the absolute URL of this request against a service base URL.
    ///
    /// The base URL's own path is kept as a prefix, so
    /// `https://host/v2` and `projects/p/...` give `https://host/v2/projects/p/...`.
    pub fn to_url(&self, base: &Url) -> Result<Url, url::ParseError> {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut url = base.join(self.path.trim_start_matches('/'))?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(url)
    }
}

/// Raw response returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    /// Create a response from a status code and raw body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Connection-level failure reported by a transport.
#[derive(Debug, thiserror::Error)]
#[error("transport error: {message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// Create an error without an underlying source.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying I/O or client error.
    pub fn with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Message describing the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Executes requests against the management API.
///
/// Implementations attach authentication and perform the network call. HTTP
/// error statuses are returned as ordinary responses; only failures to
/// complete the exchange are reported as [`TransportError`].
///
/// # Example Implementation
///
/// ```rust
/// use saml_provider_config::client::{Transport, TransportError, TransportRequest, TransportResponse};
/// use std::future::Future;
///
/// struct Offline;
///
/// impl Transport for Offline {
///     fn execute(
///         &self,
///         _request: TransportRequest,
///     ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send {
///         async move { Err(TransportError::new("offline")) }
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}
