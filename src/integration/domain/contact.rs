//! Partner contacts attached to an integration.

use super::IntegrationDomainError;
use serde::{Deserialize, Serialize};

/// A person at the partner company. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    name: String,
    email: String,
    role: Option<String>,
    phone: Option<String>,
}

impl Contact {
    /// Creates a contact with the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationDomainError::EmptyContactName`] for a blank name
    /// or [`IntegrationDomainError::InvalidContactEmail`] when the email has
    /// no non-empty local part and domain around a single `@`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, IntegrationDomainError> {
        let raw_name = name.into();
        let raw_email = email.into();
        if raw_name.trim().is_empty() {
            return Err(IntegrationDomainError::EmptyContactName);
        }
        let normalized_email = raw_email.trim();
        let is_valid_email = normalized_email
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            });
        if !is_valid_email {
            return Err(IntegrationDomainError::InvalidContactEmail(raw_email));
        }

        Ok(Self {
            name: raw_name.trim().to_owned(),
            email: normalized_email.to_owned(),
            role: None,
            phone: None,
        })
    }

    /// Sets the contact's role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Sets the contact's phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Returns the contact name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the contact role, if any.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Returns the contact phone number, if any.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}
