//! SamlProviderId value object for SAML provider configuration identifiers.
//!
//! Provider configurations of different families share one namespace on the
//! management API and are told apart by an identifier prefix. SAML
//! configurations always start with `saml.`; anything else (an OIDC `oidc.`
//! identifier, for instance) is rejected before it reaches the network.

use crate::error::{ProviderConfigError, ProviderConfigResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Prefix carried by every SAML-family provider identifier.
pub const SAML_PROVIDER_ID_PREFIX: &str = "saml.";

/// Characters that would split an identifier out of its URL path segment.
pub(crate) const PATH_RESERVED_CHARS: [char; 3] = ['/', '?', '#'];

/// A validated SAML provider configuration identifier.
///
/// ## Validation Rules
///
/// - Must not be empty
/// - Must start with `saml.`
/// - Must not contain `/`, `?` or `#`, so it stays a single path segment
///
/// ## Examples
///
/// ```rust
/// use saml_provider_config::SamlProviderId;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let id = SamlProviderId::new("saml.provider")?;
///     assert_eq!(id.as_str(), "saml.provider");
///
///     let err = SamlProviderId::new("oidc.provider").unwrap_err();
///     assert!(err.to_string().starts_with("invalid SAML provider id: "));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SamlProviderId(String);

impl SamlProviderId {
    /// Create a new SamlProviderId with validation.
    pub fn new(value: impl Into<String>) -> ProviderConfigResult<Self> {
        let value = value.into();
        Self::validate_format(&value)?;
        Ok(Self(value))
    }

    /// Check an identifier without taking ownership of it.
    pub fn validate(value: &str) -> ProviderConfigResult<()> {
        Self::validate_format(value)
    }

    /// Get the string representation of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier and return the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }

    fn validate_format(value: &str) -> ProviderConfigResult<()> {
        // The bare prefix is not an identifier either.
        if value.len() <= SAML_PROVIDER_ID_PREFIX.len()
            || !value.starts_with(SAML_PROVIDER_ID_PREFIX)
            || value.contains(PATH_RESERVED_CHARS)
        {
            return Err(ProviderConfigError::invalid_argument(format!(
                "invalid SAML provider id: {value}"
            )));
        }

        Ok(())
    }
}

impl fmt::Display for SamlProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SamlProviderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SamlProviderId {
    type Error = ProviderConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SamlProviderId {
    type Error = ProviderConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for SamlProviderId {
    type Err = ProviderConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for SamlProviderId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SamlProviderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
