//! Decoded SAML provider configuration.

use super::wire::SamlConfigResource;
use crate::error::{ProviderConfigError, ProviderConfigResult};
use crate::provider_id::SamlProviderId;
use serde::{Deserialize, Serialize};

/// Snapshot of a SAML provider configuration as held by the service.
///
/// Instances are produced by decoding service responses and are never
/// modified by the client afterwards. The nested `idpConfig`/`spConfig`
/// groups of the wire format are flattened into plain fields and each
/// certificate is unwrapped to its bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlProviderConfig {
    /// Provider identifier, always `saml.`-prefixed
    pub id: SamlProviderId,
    /// Human-readable label
    pub display_name: String,
    /// Whether the provider can be used for sign-in
    pub enabled: bool,
    /// Identity provider entity identifier
    pub idp_entity_id: String,
    /// Identity provider single sign-on URL
    pub sso_url: String,
    /// Whether authentication requests are signed
    pub request_signing_enabled: bool,
    /// Identity provider certificates, in service order
    pub x509_certificates: Vec<String>,
    /// Relying party entity identifier
    pub rp_entity_id: String,
    /// Relying party callback URL
    pub callback_url: String,
}

impl SamlProviderConfig {
    /// Decode a service resource, extracting the id from its resource name.
    ///
    /// Returns `None` when the resource name does not end in a SAML-family id.
    pub(crate) fn from_resource(resource: SamlConfigResource) -> Option<Self> {
        let id = resource.name.rsplit('/').next()?;
        let id = SamlProviderId::new(id).ok()?;

        Some(Self {
            id,
            display_name: resource.display_name,
            enabled: resource.enabled,
            idp_entity_id: resource.idp_config.idp_entity_id,
            sso_url: resource.idp_config.sso_url,
            request_signing_enabled: resource.idp_config.sign_request,
            x509_certificates: resource
                .idp_config
                .idp_certificates
                .into_iter()
                .map(|cert| cert.x509_certificate)
                .collect(),
            rp_entity_id: resource.sp_config.sp_entity_id,
            callback_url: resource.sp_config.callback_uri,
        })
    }

    /// Decode a successful response body.
    ///
    /// A body that is not a SAML configuration resource is reported as
    /// [`ProviderConfigError::Unknown`] carrying the raw status and body.
    pub(crate) fn decode(status: u16, body: &str) -> ProviderConfigResult<Self> {
        serde_json::from_str::<SamlConfigResource>(body)
            .ok()
            .and_then(Self::from_resource)
            .ok_or_else(|| ProviderConfigError::unknown(status, body))
    }
}
