//! Builder for new SAML provider configurations.

use super::config::SamlProviderConfig;
use super::validation::{require_certificates, require_non_empty, require_url};
use super::wire::{IdpCertificate, IdpConfigPayload, SamlConfigPayload, SpConfigPayload};
use crate::error::{ProviderConfigError, ProviderConfigResult};
use crate::provider_id::SamlProviderId;

/// Parameters for creating a SAML provider configuration.
///
/// Each setter consumes the builder and returns it with exactly one field
/// replaced. Unset optional fields are left out of the request entirely.
///
/// # Example
/// ```rust
/// use saml_provider_config::SamlProviderConfigToCreate;
///
/// let config = SamlProviderConfigToCreate::new()
///     .id("saml.provider")
///     .idp_entity_id("IDP_ENTITY_ID")
///     .sso_url("https://example.com/login")
///     .x509_certificates(vec!["CERT1".to_string()])
///     .rp_entity_id("RP_ENTITY_ID")
///     .callback_url("https://project-id.firebaseapp.com/__/auth/handler");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SamlProviderConfigToCreate {
    id: Option<String>,
    display_name: Option<String>,
    enabled: Option<bool>,
    idp_entity_id: Option<String>,
    sso_url: Option<String>,
    request_signing_enabled: Option<bool>,
    x509_certificates: Option<Vec<String>>,
    rp_entity_id: Option<String>,
    callback_url: Option<String>,
}

impl SamlProviderConfigToCreate {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a builder with every field of an existing configuration.
    pub fn from_config(config: &SamlProviderConfig) -> Self {
        Self::new()
            .id(config.id.as_str())
            .display_name(config.display_name.clone())
            .enabled(config.enabled)
            .idp_entity_id(config.idp_entity_id.clone())
            .sso_url(config.sso_url.clone())
            .request_signing_enabled(config.request_signing_enabled)
            .x509_certificates(config.x509_certificates.clone())
            .rp_entity_id(config.rp_entity_id.clone())
            .callback_url(config.callback_url.clone())
    }

    /// Set the provider id; must start with `saml.`.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the human-readable label.
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Set whether the provider can be used for sign-in.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Set the identity provider entity id.
    pub fn idp_entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.idp_entity_id = Some(entity_id.into());
        self
    }

    /// Set the identity provider single sign-on URL.
    pub fn sso_url(mut self, url: impl Into<String>) -> Self {
        self.sso_url = Some(url.into());
        self
    }

    /// Set whether authentication requests are signed.
    pub fn request_signing_enabled(mut self, enabled: bool) -> Self {
        self.request_signing_enabled = Some(enabled);
        self
    }

    /// Set the identity provider certificates.
    pub fn x509_certificates(mut self, certificates: Vec<String>) -> Self {
        self.x509_certificates = Some(certificates);
        self
    }

    /// Set the relying party entity id.
    pub fn rp_entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.rp_entity_id = Some(entity_id.into());
        self
    }

    /// Set the relying party callback URL.
    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    /// Validate the parameters, stopping at the first failure.
    ///
    /// Once anything beyond the id is set, the entity ids, both URLs and the
    /// certificate list are all mandatory.
    pub fn validate(&self) -> ProviderConfigResult<SamlProviderId> {
        let id = SamlProviderId::new(self.id.clone().unwrap_or_default())?;

        if !self.has_parameters() {
            return Err(ProviderConfigError::invalid_argument(
                "no parameters specified in the create request",
            ));
        }

        require_non_empty("IDPEntityID", self.idp_entity_id.as_deref().unwrap_or_default())?;
        require_url("SSOURL", self.sso_url.as_deref().unwrap_or_default())?;
        require_certificates(
            "X509Certificates",
            self.x509_certificates.as_deref().unwrap_or_default(),
        )?;
        require_non_empty("RPEntityID", self.rp_entity_id.as_deref().unwrap_or_default())?;
        require_url("CallbackURL", self.callback_url.as_deref().unwrap_or_default())?;

        Ok(id)
    }

    /// Validate and produce the id together with the request payload.
    pub(crate) fn build(&self) -> ProviderConfigResult<(SamlProviderId, SamlConfigPayload)> {
        let id = self.validate()?;

        let idp = IdpConfigPayload {
            idp_entity_id: self.idp_entity_id.clone(),
            sso_url: self.sso_url.clone(),
            sign_request: self.request_signing_enabled,
            idp_certificates: self
                .x509_certificates
                .as_deref()
                .map(IdpCertificate::wrap_all),
        };
        let sp = SpConfigPayload {
            sp_entity_id: self.rp_entity_id.clone(),
            callback_uri: self.callback_url.clone(),
        };
        let payload = SamlConfigPayload {
            display_name: self.display_name.clone().map(Some),
            enabled: self.enabled,
            ..Default::default()
        }
        .with_groups(idp, sp);

        Ok((id, payload))
    }

    fn has_parameters(&self) -> bool {
        self.display_name.is_some()
            || self.enabled.is_some()
            || self.idp_entity_id.is_some()
            || self.sso_url.is_some()
            || self.request_signing_enabled.is_some()
            || self.x509_certificates.is_some()
            || self.rp_entity_id.is_some()
            || self.callback_url.is_some()
    }
}
