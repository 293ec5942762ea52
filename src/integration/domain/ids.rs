//! Identifier type for integrations.

use super::IntegrationDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable slug identifying an integration, e.g. `vision-dealer`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntegrationId(String);

impl IntegrationId {
    /// Creates a validated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationDomainError::EmptyIntegrationId`] for blank input
    /// or [`IntegrationDomainError::InvalidIntegrationId`] when the trimmed
    /// value contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, IntegrationDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IntegrationDomainError::EmptyIntegrationId);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(IntegrationDomainError::InvalidIntegrationId(raw));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Derives an identifier from a display name.
    ///
    /// The name is lowercased and each run of whitespace becomes a single `-`.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationDomainError::EmptyIntegrationId`] when the name is
    /// blank.
    pub fn from_name(name: &str) -> Result<Self, IntegrationDomainError> {
        let slug = name
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-");
        Self::new(slug)
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IntegrationId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for IntegrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
