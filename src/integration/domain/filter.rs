//! Listing filters for integrations.

use super::{Integration, WorkflowStage};

/// Criteria for listing integrations. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrationFilter {
    stage: Option<WorkflowStage>,
    company: Option<String>,
}

impl IntegrationFilter {
    /// Creates a filter matching every integration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to one workflow stage.
    #[must_use]
    pub const fn with_stage(mut self, stage: WorkflowStage) -> Self {
        self.stage = Some(stage);
        self
    }

    /// Restricts results to companies containing `company`, ignoring case.
    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into().to_lowercase());
        self
    }

    /// Whether `integration` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, integration: &Integration) -> bool {
        let stage_matches = self.stage.is_none_or(|stage| integration.stage() == stage);
        let company_matches = self
            .company
            .as_deref()
            .is_none_or(|needle| integration.company().to_lowercase().contains(needle));
        stage_matches && company_matches
    }
}
