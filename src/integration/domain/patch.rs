//! Partial integration updates.

use std::collections::BTreeMap;

/// Explicit optional-field patch for an integration's descriptive data.
///
/// Stage changes and contacts have dedicated operations and are not part of
/// the patch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegrationPatch {
    pub(crate) name: Option<String>,
    pub(crate) company: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) next_steps: Option<Vec<String>>,
    pub(crate) blockers: Option<Vec<String>>,
    pub(crate) current_sprint: Option<String>,
    pub(crate) metadata: Option<BTreeMap<String, serde_json::Value>>,
}

impl IntegrationPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the display name. The identifier is unaffected.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the company name.
    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the next steps list.
    #[must_use]
    pub fn with_next_steps(mut self, steps: impl IntoIterator<Item = String>) -> Self {
        self.next_steps = Some(steps.into_iter().collect());
        self
    }

    /// Replaces the blockers list.
    #[must_use]
    pub fn with_blockers(mut self, blockers: impl IntoIterator<Item = String>) -> Self {
        self.blockers = Some(blockers.into_iter().collect());
        self
    }

    /// Sets or clears (with blank text) the current sprint label.
    #[must_use]
    pub fn with_current_sprint(mut self, sprint: impl Into<String>) -> Self {
        self.current_sprint = Some(sprint.into());
        self
    }

    /// Replaces the free-form metadata map.
    #[must_use]
    pub fn with_metadata(mut self, metadata: BTreeMap<String, serde_json::Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
