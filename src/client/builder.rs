//! Builder pattern for configuring provider configuration clients.

use super::core::ProviderConfigClient;
use super::project::ProjectResolver;
use super::transport::Transport;
use crate::error::{ProviderConfigError, ProviderConfigResult};
use crate::provider_id::PATH_RESERVED_CHARS;
use std::time::Duration;

/// Configuration for a [`ProviderConfigClient`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Tenant whose configurations are managed. When unset, calls operate on
    /// the project-level configurations.
    pub tenant_id: Option<String>,

    /// Upper bound for a single exchange, applied in addition to any
    /// per-call deadline.
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> ProviderConfigResult<()> {
        if let Some(tenant_id) = self.tenant_id.as_deref() {
            if tenant_id.is_empty() {
                return Err(ProviderConfigError::invalid_argument(
                    "tenant id must not be empty",
                ));
            }
            if tenant_id.contains(PATH_RESERVED_CHARS) {
                return Err(ProviderConfigError::invalid_argument(format!(
                    "invalid tenant id: {tenant_id}"
                )));
            }
        }

        if self.request_timeout.is_some_and(|timeout| timeout.is_zero()) {
            return Err(ProviderConfigError::invalid_argument(
                "request timeout must be greater than zero",
            ));
        }

        Ok(())
    }

    /// Collection path for inbound SAML configurations in `project_id`.
    pub fn collection_path(&self, project_id: &str) -> String {
        match &self.tenant_id {
            Some(tenant_id) => {
                format!("projects/{project_id}/tenants/{tenant_id}/inboundSamlConfigs")
            }
            None => format!("projects/{project_id}/inboundSamlConfigs"),
        }
    }

    /// Item path for a single inbound SAML configuration.
    pub fn item_path(&self, project_id: &str, id: &str) -> String {
        format!("{}/{id}", self.collection_path(project_id))
    }
}

/// Builder for configuring and creating provider configuration clients.
///
/// # Examples
///
/// ```rust
/// use saml_provider_config::client::{
///     ProviderConfigClientBuilder, StaticProjectResolver, Transport, TransportError,
///     TransportRequest, TransportResponse,
/// };
/// use std::future::Future;
/// use std::time::Duration;
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
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ProviderConfigClientBuilder::new(Offline, StaticProjectResolver::new("my-project"))
///     .with_tenant_id("tenant-1")
///     .with_request_timeout(Duration::from_secs(30))
///     .build()?;
/// assert_eq!(client.config().tenant_id.as_deref(), Some("tenant-1"));
/// # Ok(())
/// # }
/// ```
pub struct ProviderConfigClientBuilder<T, R> {
    transport: T,
    resolver: R,
    config: ClientConfig,
}

impl<T: Transport, R: ProjectResolver> ProviderConfigClientBuilder<T, R> {
    /// Create a builder with the default configuration.
    pub fn new(transport: T, resolver: R) -> Self {
        Self {
            transport,
            resolver,
            config: ClientConfig::default(),
        }
    }

    /// Scope the client to a tenant.
    pub fn with_tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.config.tenant_id = Some(tenant_id.into());
        self
    }

    /// Bound every exchange by `timeout`.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = Some(timeout);
        self
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the client, validating the configuration.
    pub fn build(self) -> ProviderConfigResult<ProviderConfigClient<T, R>> {
        self.config.validate()?;
        Ok(ProviderConfigClient::with_config(
            self.transport,
            self.resolver,
            self.config,
        ))
    }
}
