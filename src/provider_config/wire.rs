//! Wire representation of inbound SAML configurations.
//!
//! The management API groups identity-provider settings under `idpConfig` and
//! service-provider settings under `spConfig`, and wraps each certificate in
//! its own object. Request payloads only ever carry the fields a builder set;
//! responses are decoded leniently with every field defaulted.

use serde::{Deserialize, Serialize};

/// Request body for create and update calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SamlConfigPayload {
    /// `Some(None)` serializes as an explicit `null` (cleared display name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_config: Option<IdpConfigPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sp_config: Option<SpConfigPayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IdpConfigPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sso_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_request: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_certificates: Option<Vec<IdpCertificate>>,
}

impl IdpConfigPayload {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SpConfigPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sp_entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_uri: Option<String>,
}

impl SpConfigPayload {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A single wrapped certificate, `{"x509Certificate": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IdpCertificate {
    #[serde(default)]
    pub x509_certificate: String,
}

impl IdpCertificate {
    pub fn wrap_all(certificates: &[String]) -> Vec<Self> {
        certificates
            .iter()
            .map(|cert| Self {
                x509_certificate: cert.clone(),
            })
            .collect()
    }
}

impl SamlConfigPayload {
    /// Attach the nested groups, dropping any that ended up empty.
    pub fn with_groups(mut self, idp: IdpConfigPayload, sp: SpConfigPayload) -> Self {
        self.idp_config = (!idp.is_empty()).then_some(idp);
        self.sp_config = (!sp.is_empty()).then_some(sp);
        self
    }
}

/// Inbound SAML configuration resource as returned by the service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct SamlConfigResource {
    pub name: String,
    pub display_name: String,
    pub enabled: bool,
    pub idp_config: IdpConfigResource,
    pub sp_config: SpConfigResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct IdpConfigResource {
    pub idp_entity_id: String,
    pub sso_url: String,
    pub sign_request: bool,
    pub idp_certificates: Vec<IdpCertificate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct SpConfigResource {
    pub sp_entity_id: String,
    pub callback_uri: String,
}
