//! Provider configuration client.
//!
//! Each operation validates its input locally, resolves the project scope,
//! performs exactly one exchange through the injected [`Transport`], and
//! decodes or classifies the response. No retries are attempted.

use super::builder::{ClientConfig, ProviderConfigClientBuilder};
use super::context::RequestContext;
use super::project::ProjectResolver;
use super::transport::{HttpMethod, Transport, TransportRequest, TransportResponse};
use crate::error::{ProviderConfigError, ProviderConfigResult};
use crate::provider_config::{
    SamlProviderConfig, SamlProviderConfigToCreate, SamlProviderConfigToUpdate,
};
use crate::provider_id::SamlProviderId;
use log::{debug, info, warn};
use tokio::time::Instant;

/// Query parameter naming the id of a configuration being created.
const CREATE_ID_PARAM: &str = "inboundSamlConfigId";
/// Query parameter carrying the comma-joined update mask.
const UPDATE_MASK_PARAM: &str = "updateMask";

/// Client for SAML provider configurations.
///
/// The client holds no per-call mutable state and can be shared between
/// tasks; concurrency limits and retries are left to the caller.
///
/// # Example
///
/// ```rust,no_run
/// use saml_provider_config::client::{ProviderConfigClient, RequestContext, StaticProjectResolver};
/// # use saml_provider_config::client::{Transport, TransportError, TransportRequest, TransportResponse};
/// # use std::future::Future;
/// # struct Http;
/// # impl Transport for Http {
/// #     fn execute(&self, _r: TransportRequest)
/// #         -> impl Future<Output = Result<TransportResponse, TransportError>> + Send {
/// #         async move { Ok(TransportResponse::new(200, "{}")) }
/// #     }
/// # }
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ProviderConfigClient::new(Http, StaticProjectResolver::new("my-project"));
/// let config = client
///     .saml_provider_config(&RequestContext::default(), "saml.provider")
///     .await?;
/// println!("{} -> {}", config.id, config.sso_url);
/// # Ok(())
/// # }
/// ```
pub struct ProviderConfigClient<T, R> {
    transport: T,
    resolver: R,
    config: ClientConfig,
}

impl<T: Transport, R: ProjectResolver> ProviderConfigClient<T, R> {
    /// Create a client with the default configuration.
    pub fn new(transport: T, resolver: R) -> Self {
        Self::with_config(transport, resolver, ClientConfig::default())
    }

    pub(crate) fn with_config(transport: T, resolver: R, config: ClientConfig) -> Self {
        Self {
            transport,
            resolver,
            config,
        }
    }

    /// Start building a configured client.
    pub fn builder(transport: T, resolver: R) -> ProviderConfigClientBuilder<T, R> {
        ProviderConfigClientBuilder::new(transport, resolver)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the SAML provider configuration with the given id.
    pub async fn saml_provider_config(
        &self,
        context: &RequestContext,
        id: &str,
    ) -> ProviderConfigResult<SamlProviderConfig> {
        let id = SamlProviderId::new(id)?;
        let path = self.item_path(&id)?;

        let response = self
            .send(context, TransportRequest::new(HttpMethod::Get, path))
            .await?;
        SamlProviderConfig::decode(response.status, &response.body)
    }

    /// Create a new SAML provider configuration.
    pub async fn create_saml_provider_config(
        &self,
        context: &RequestContext,
        config: &SamlProviderConfigToCreate,
    ) -> ProviderConfigResult<SamlProviderConfig> {
        let (id, payload) = config.build().inspect_err(|e| {
            debug!("Rejected create request {}: {}", context.request_id, e);
        })?;
        let path = self.collection_path()?;

        let request = TransportRequest::new(HttpMethod::Post, path)
            .with_query(CREATE_ID_PARAM, id.as_str())
            .with_body(serde_json::to_string(&payload)?);
        let response = self.send(context, request).await?;
        let created = SamlProviderConfig::decode(response.status, &response.body)?;

        info!(
            "Created SAML provider config {} (request {})",
            created.id, context.request_id
        );
        Ok(created)
    }

    /// Apply a sparse update to an existing SAML provider configuration.
    ///
    /// Only the fields touched on `config` are sent, and the update mask
    /// names exactly those fields.
    pub async fn update_saml_provider_config(
        &self,
        context: &RequestContext,
        id: &str,
        config: &SamlProviderConfigToUpdate,
    ) -> ProviderConfigResult<SamlProviderConfig> {
        let id = SamlProviderId::new(id)?;
        let (payload, mask) = config.build().inspect_err(|e| {
            debug!("Rejected update request {}: {}", context.request_id, e);
        })?;
        let path = self.item_path(&id)?;

        let request = TransportRequest::new(HttpMethod::Patch, path)
            .with_query(UPDATE_MASK_PARAM, mask.to_string())
            .with_body(serde_json::to_string(&payload)?);
        let response = self.send(context, request).await?;
        let updated = SamlProviderConfig::decode(response.status, &response.body)?;

        info!(
            "Updated SAML provider config {} fields [{}] (request {})",
            updated.id, mask, context.request_id
        );
        Ok(updated)
    }

    /// Delete the SAML provider configuration with the given id.
    pub async fn delete_saml_provider_config(
        &self,
        context: &RequestContext,
        id: &str,
    ) -> ProviderConfigResult<()> {
        let id = SamlProviderId::new(id)?;
        let path = self.item_path(&id)?;

        self.send(context, TransportRequest::new(HttpMethod::Delete, path))
            .await?;

        info!(
            "Deleted SAML provider config {} (request {})",
            id, context.request_id
        );
        Ok(())
    }

    fn project_id(&self) -> ProviderConfigResult<&str> {
        self.resolver
            .project_id()
            .ok_or(ProviderConfigError::ProjectIdNotAvailable)
    }

    fn collection_path(&self) -> ProviderConfigResult<String> {
        Ok(self.config.collection_path(self.project_id()?))
    }

    fn item_path(&self, id: &SamlProviderId) -> ProviderConfigResult<String> {
        Ok(self.config.item_path(self.project_id()?, id.as_str()))
    }

    /// Earliest of the caller's deadline and the configured request timeout.
    fn deadline(&self, context: &RequestContext) -> Option<Instant> {
        let timeout = self
            .config
            .request_timeout
            .map(|timeout| Instant::now() + timeout);

        match (context.deadline, timeout) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Perform the single exchange for an operation and classify failures.
    async fn send(
        &self,
        context: &RequestContext,
        request: TransportRequest,
    ) -> ProviderConfigResult<TransportResponse> {
        if context.is_expired() {
            return Err(ProviderConfigError::DeadlineExceeded);
        }

        debug!(
            "Sending {} {} (request {})",
            request.method, request.path, context.request_id
        );

        let exchange = self.transport.execute(request);
        let response = match self.deadline(context) {
            Some(deadline) => tokio::time::timeout_at(deadline, exchange)
                .await
                .map_err(|_| ProviderConfigError::DeadlineExceeded)??,
            None => exchange.await?,
        };

        if !response.is_success() {
            warn!(
                "Provider config request {} failed with status {}",
                context.request_id, response.status
            );
            return Err(ProviderConfigError::from_service_response(
                response.status,
                &response.body,
            ));
        }

        Ok(response)
    }
}
