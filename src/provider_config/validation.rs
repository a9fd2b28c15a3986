//! Field validation shared by the create and update builders.
//!
//! Messages carry the caller-facing field name and a stable prefix per
//! failure so callers can match on them.

use crate::error::{ProviderConfigError, ProviderConfigResult};
use url::Url;

pub(crate) fn require_non_empty(field: &str, value: &str) -> ProviderConfigResult<()> {
    if value.is_empty() {
        return Err(empty(field));
    }
    Ok(())
}

/// Require a non-empty absolute URL.
pub(crate) fn require_url(field: &str, value: &str) -> ProviderConfigResult<()> {
    require_non_empty(field, value)?;
    Url::parse(value).map_err(|e| {
        ProviderConfigError::invalid_argument(format!("failed to parse {field}: {e}"))
    })?;
    Ok(())
}

pub(crate) fn require_certificates(field: &str, certificates: &[String]) -> ProviderConfigResult<()> {
    if certificates.is_empty() {
        return Err(empty(field));
    }
    if certificates.iter().any(String::is_empty) {
        return Err(ProviderConfigError::invalid_argument(format!(
            "{field} must not contain empty strings"
        )));
    }
    Ok(())
}

pub(crate) fn empty(field: &str) -> ProviderConfigError {
    ProviderConfigError::invalid_argument(format!("{field} must not be empty"))
}
