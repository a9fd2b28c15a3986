//! Sparse updates to existing SAML provider configurations.
//!
//! Every setter marks its field as touched, including when the value is the
//! zero value. Finalization walks the touched fields once and produces the
//! request payload together with the matching update mask.

use super::field::FieldChange;
use super::validation::{empty, require_certificates, require_non_empty, require_url};
use super::wire::{IdpCertificate, IdpConfigPayload, SamlConfigPayload, SpConfigPayload};
use crate::error::{ProviderConfigError, ProviderConfigResult};
use std::fmt;

/// Updatable fields of a SAML provider configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SamlConfigField {
    DisplayName,
    Enabled,
    IdpEntityId,
    SsoUrl,
    RequestSigningEnabled,
    X509Certificates,
    RpEntityId,
    CallbackUrl,
}

impl SamlConfigField {
    /// Dotted path of the field in the wire representation.
    pub fn mask_path(self) -> &'static str {
        match self {
            Self::DisplayName => "displayName",
            Self::Enabled => "enabled",
            Self::IdpEntityId => "idpConfig.idpEntityId",
            Self::SsoUrl => "idpConfig.ssoUrl",
            Self::RequestSigningEnabled => "idpConfig.signRequest",
            Self::X509Certificates => "idpConfig.idpCertificates",
            Self::RpEntityId => "spConfig.spEntityId",
            Self::CallbackUrl => "spConfig.callbackUri",
        }
    }
}

/// Field mask naming exactly the paths present in an update payload.
///
/// Paths appear in the order their setters were first called, each at most
/// once. Order carries no meaning to the service; use [`UpdateMask::sorted`]
/// when comparing masks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateMask {
    paths: Vec<&'static str>,
}

impl UpdateMask {
    fn from_fields(fields: &[SamlConfigField]) -> Self {
        Self {
            paths: fields.iter().map(|field| field.mask_path()).collect(),
        }
    }

    /// Paths in first-touch order.
    pub fn paths(&self) -> &[&'static str] {
        &self.paths
    }

    /// Paths in lexicographic order.
    pub fn sorted(&self) -> Vec<&'static str> {
        let mut paths = self.paths.clone();
        paths.sort_unstable();
        paths
    }

    /// Number of paths in the mask.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no field was touched.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl fmt::Display for UpdateMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.paths.join(","))
    }
}

/// Parameters for updating a SAML provider configuration.
///
/// # Example
/// ```rust
/// use saml_provider_config::SamlProviderConfigToUpdate;
///
/// let update = SamlProviderConfigToUpdate::new()
///     .display_name("")
///     .enabled(false);
/// assert_eq!(update.update_mask().to_string(), "displayName,enabled");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SamlProviderConfigToUpdate {
    display_name: FieldChange<String>,
    enabled: FieldChange<bool>,
    idp_entity_id: FieldChange<String>,
    sso_url: FieldChange<String>,
    request_signing_enabled: FieldChange<bool>,
    x509_certificates: FieldChange<Vec<String>>,
    rp_entity_id: FieldChange<String>,
    callback_url: FieldChange<String>,
    touched: Vec<SamlConfigField>,
}

impl SamlProviderConfigToUpdate {
    /// Create a builder with no fields touched.
    pub fn new() -> Self {
        Self::default()
    }

    fn touch(mut self, field: SamlConfigField) -> Self {
        if !self.touched.contains(&field) {
            self.touched.push(field);
        }
        self
    }

    /// Set the display name; an empty name clears it.
    /// Set the human-readable label.
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = FieldChange::touch(name.into());
        self.touch(SamlConfigField::DisplayName)
    }

    /// Set whether the provider can be used for sign-in.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = FieldChange::touch(enabled);
        self.touch(SamlConfigField::Enabled)
    }

    /// Set the identity provider entity id.
    pub fn idp_entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.idp_entity_id = FieldChange::touch(entity_id.into());
        self.touch(SamlConfigField::IdpEntityId)
    }

    /// Set the identity provider single sign-on URL.
    pub fn sso_url(mut self, url: impl Into<String>) -> Self {
        self.sso_url = FieldChange::touch(url.into());
        self.touch(SamlConfigField::SsoUrl)
    }

    /// Set whether authentication requests are signed.
    pub fn request_signing_enabled(mut self, enabled: bool) -> Self {
        self.request_signing_enabled = FieldChange::touch(enabled);
        self.touch(SamlConfigField::RequestSigningEnabled)
    }

    /// Set the identity provider certificates.
    pub fn x509_certificates(mut self, certificates: Vec<String>) -> Self {
        self.x509_certificates = FieldChange::touch(certificates);
        self.touch(SamlConfigField::X509Certificates)
    }

    /// Set the relying party entity id.
    pub fn rp_entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.rp_entity_id = FieldChange::touch(entity_id.into());
        self.touch(SamlConfigField::RpEntityId)
    }

    /// Set the relying party callback URL.
    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = FieldChange::touch(url.into());
        self.touch(SamlConfigField::CallbackUrl)
    }

    /// Fields touched so far, in setter call order.
    pub fn touched_fields(&self) -> &[SamlConfigField] {
        &self.touched
    }

    /// Mask for the fields touched so far.
    pub fn update_mask(&self) -> UpdateMask {
        UpdateMask::from_fields(&self.touched)
    }

    /// Validate the touched fields, stopping at the first failure.
    pub fn validate(&self) -> ProviderConfigResult<()> {
        if self.touched.is_empty() {
            return Err(ProviderConfigError::invalid_argument(
                "no parameters specified in the update request",
            ));
        }

        check_string("IDPEntityID", &self.idp_entity_id, require_non_empty)?;
        check_string("SSOURL", &self.sso_url, require_url)?;
        match &self.x509_certificates {
            FieldChange::Untouched => {}
            FieldChange::Cleared => return Err(empty("X509Certificates")),
            FieldChange::Set(certs) => require_certificates("X509Certificates", certs)?,
        }
        check_string("RPEntityID", &self.rp_entity_id, require_non_empty)?;
        check_string("CallbackURL", &self.callback_url, require_url)?;

        Ok(())
    }

    /// Validate and produce the request payload with its update mask.
    pub(crate) fn build(&self) -> ProviderConfigResult<(SamlConfigPayload, UpdateMask)> {
        self.validate()?;

        let mut payload = SamlConfigPayload::default();
        let mut idp = IdpConfigPayload::default();
        let mut sp = SpConfigPayload::default();

        for field in &self.touched {
            match field {
                SamlConfigField::DisplayName => {
                    payload.display_name = Some(self.display_name.value().cloned());
                }
                SamlConfigField::Enabled => {
                    payload.enabled = Some(self.enabled.value().copied().unwrap_or(false));
                }
                SamlConfigField::IdpEntityId => {
                    idp.idp_entity_id = self.idp_entity_id.value().cloned();
                }
                SamlConfigField::SsoUrl => {
                    idp.sso_url = self.sso_url.value().cloned();
                }
                SamlConfigField::RequestSigningEnabled => {
                    idp.sign_request = Some(
                        self.request_signing_enabled
                            .value()
                            .copied()
                            .unwrap_or(false),
                    );
                }
                SamlConfigField::X509Certificates => {
                    idp.idp_certificates = self
                        .x509_certificates
                        .value()
                        .map(|certs| IdpCertificate::wrap_all(certs));
                }
                SamlConfigField::RpEntityId => {
                    sp.sp_entity_id = self.rp_entity_id.value().cloned();
                }
                SamlConfigField::CallbackUrl => {
                    sp.callback_uri = self.callback_url.value().cloned();
                }
            }
        }

        Ok((payload.with_groups(idp, sp), self.update_mask()))
    }
}

/// Touched string fields that may be changed but never cleared.
fn check_string(
    field: &str,
    change: &FieldChange<String>,
    check: fn(&str, &str) -> ProviderConfigResult<()>,
) -> ProviderConfigResult<()> {
    match change {
        FieldChange::Untouched => Ok(()),
        FieldChange::Cleared => Err(empty(field)),
        FieldChange::Set(value) => check(field, value),
    }
}
