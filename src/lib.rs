//! Typed client for SAML single sign-on provider configurations.
//!
//! Manages named inbound SAML configurations on an identity-platform
//! management API: get, create, sparse update with field masks, and delete.
//! Input is validated before any request is sent, and the network layer is
//! injected through the [`Transport`](client::Transport) trait.
//!
//! # Core Components
//!
//! - [`ProviderConfigClient`] - Performs one request per operation
//! - [`SamlProviderConfigToCreate`] - Builder for new configurations
//! - [`SamlProviderConfigToUpdate`] - Builder for sparse updates
//! - [`SamlProviderConfig`] - Decoded configuration
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use saml_provider_config::client::{RequestContext, StaticProjectResolver};
//! use saml_provider_config::{ProviderConfigClient, SamlProviderConfigToUpdate};
//! # use saml_provider_config::client::{Transport, TransportError, TransportRequest, TransportResponse};
//! # use std::future::Future;
//! # struct Http;
//! # impl Transport for Http {
//! #     fn execute(&self, _r: TransportRequest)
//! #         -> impl Future<Output = Result<TransportResponse, TransportError>> + Send {
//! #         async move { Ok(TransportResponse::new(200, "{}")) }
//! #     }
//! # }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ProviderConfigClient::new(Http, StaticProjectResolver::new("my-project"));
//! let update = SamlProviderConfigToUpdate::new()
//!     .display_name("Corporate IdP")
//!     .enabled(false);
//! let updated = client
//!     .update_saml_provider_config(&RequestContext::default(), "saml.corp", &update)
//!     .await?;
//! assert!(!updated.enabled);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod provider_config;
pub mod provider_id;

// Re-export commonly used types for convenience
pub use client::{ProviderConfigClient, RequestContext};
pub use error::{ProviderConfigError, ProviderConfigResult, ServiceErrorCode};
pub use provider_config::{
    FieldChange, SamlConfigField, SamlProviderConfig, SamlProviderConfigToCreate,
    SamlProviderConfigToUpdate, UpdateMask,
};
pub use provider_id::{SAML_PROVIDER_ID_PREFIX, SamlProviderId};
