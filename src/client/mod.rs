//! Client for the inbound SAML configuration endpoints.
//!
//! # Architecture
//!
//! The client is responsible for:
//! - Validating identifiers and builder input before any network activity
//! - Building resource paths scoped to the resolved project (and tenant)
//! - Dispatching exactly one request per operation through a [`Transport`]
//! - Decoding responses and classifying service errors
//!
//! The client is NOT responsible for:
//! - HTTP connections, credentials, or token refresh (the transport)
//! - Discovering the project id (the [`ProjectResolver`])
//! - Retries, pagination, or batching

mod builder;
mod context;
mod core;
mod project;
mod transport;

pub use builder::{ClientConfig, ProviderConfigClientBuilder};
pub use context::RequestContext;
pub use self::core::ProviderConfigClient;
pub use project::{ProjectResolver, StaticProjectResolver};
pub use transport::{HttpMethod, Transport, TransportError, TransportRequest, TransportResponse};
