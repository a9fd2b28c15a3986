//! SAML provider configuration types.
//!
//! This module holds the caller-facing configuration value object, the two
//! request builders, and the wire representation they serialize to.
//!
//! # Key Types
//!
//! - [`SamlProviderConfig`] - Decoded configuration returned by the service
//! - [`SamlProviderConfigToCreate`] - Parameters for a new configuration
//! - [`SamlProviderConfigToUpdate`] - Sparse changes with field-mask tracking
//! - [`FieldChange`] - Untouched / set / cleared state of an update field

pub mod config;
pub mod create;
pub mod field;
pub mod update;
mod validation;
pub(crate) mod wire;

pub use config::SamlProviderConfig;
pub use create::SamlProviderConfigToCreate;
pub use field::{FieldChange, ZeroValue};
pub use update::{SamlConfigField, SamlProviderConfigToUpdate, UpdateMask};
