//! Integration aggregate root.

use super::{
    Contact, IntegrationDomainError, IntegrationId, IntegrationPatch, IntegrationProgress,
    WorkflowStage,
};
use crate::task::domain::{NewTask, Task, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A tracked partner engagement that exclusively owns its tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integration {
    id: IntegrationId,
    name: String,
    company: String,
    stage: WorkflowStage,
    description: String,
    contacts: Vec<Contact>,
    tasks: Vec<Task>,
    next_steps: Vec<String>,
    blockers: Vec<String>,
    current_sprint: Option<String>,
    metadata: BTreeMap<String, serde_json::Value>,
    task_sequence: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for creating an integration.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIntegration {
    /// Unique identifier.
    pub id: IntegrationId,
    /// Display name.
    pub name: String,
    /// Partner company.
    pub company: String,
    /// Free-text description.
    pub description: String,
    /// Initial workflow stage.
    pub stage: WorkflowStage,
    /// Partner contacts.
    pub contacts: Vec<Contact>,
    /// Planned next steps.
    pub next_steps: Vec<String>,
    /// Known blockers.
    pub blockers: Vec<String>,
    /// Sprint the integration is currently working in.
    pub current_sprint: Option<String>,
    /// Free-form metadata.
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Integration {
    /// Creates an integration with no tasks.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationDomainError::EmptyName`] or
    /// [`IntegrationDomainError::EmptyCompany`] for blank values.
    pub fn new(draft: NewIntegration, clock: &impl Clock) -> Result<Self, IntegrationDomainError> {
        let name = required_text(draft.name, IntegrationDomainError::EmptyName)?;
        let company = required_text(draft.company, IntegrationDomainError::EmptyCompany)?;
        let timestamp = clock.utc();

        Ok(Self {
            id: draft.id,
            name,
            company,
            stage: draft.stage,
            description: draft.description,
            contacts: draft.contacts,
            tasks: Vec::new(),
            next_steps: draft.next_steps,
            blockers: draft.blockers,
            current_sprint: draft.current_sprint.and_then(optional_text),
            metadata: draft.metadata,
            task_sequence: 0,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> &IntegrationId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the partner company.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Returns the workflow stage.
    #[must_use]
    pub const fn stage(&self) -> WorkflowStage {
        self.stage
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns contacts in insertion order.
    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Returns tasks in creation order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the planned next steps.
    #[must_use]
    pub fn next_steps(&self) -> &[String] {
        &self.next_steps
    }

    /// Returns the known blockers.
    #[must_use]
    pub fn blockers(&self) -> &[String] {
        &self.blockers
    }

    /// Returns the current sprint label, if any.
    #[must_use]
    pub fn current_sprint(&self) -> Option<&str> {
        self.current_sprint.as_deref()
    }

    /// Returns the metadata map.
    #[must_use]
    pub const fn metadata(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.metadata
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the most recent task update, falling back to the
    /// integration's own timestamp when it has no tasks.
    #[must_use]
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.tasks
            .iter()
            .map(Task::updated_at)
            .max()
            .unwrap_or(self.updated_at)
    }

    /// Computes progress over the owned tasks.
    #[must_use]
    pub fn progress(&self) -> IntegrationProgress {
        IntegrationProgress::from_tasks(&self.tasks)
    }

    /// Looks up an owned task.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationDomainError::TaskNotFound`] when the task does not
    /// belong to this integration.
    pub fn task(&self, task_id: &TaskId) -> Result<&Task, IntegrationDomainError> {
        self.tasks
            .iter()
            .find(|task| task.id() == task_id)
            .ok_or_else(|| self.task_not_found(task_id))
    }

    /// Creates a task with the next identifier in this integration's sequence
    /// and returns a copy of it.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationDomainError::Task`] when the task fails
    /// validation. The sequence is only advanced on success.
    pub fn add_task(
        &mut self,
        draft: NewTask,
        clock: &impl Clock,
    ) -> Result<Task, IntegrationDomainError> {
        let sequence = self
            .task_sequence
            .checked_add(1)
            .ok_or_else(|| IntegrationDomainError::TaskSequenceExhausted(self.id.clone()))?;
        let task = Task::new(TaskId::from_sequence(self.id.as_str(), sequence), draft, clock)?;

        self.task_sequence = sequence;
        self.tasks.push(task.clone());
        self.touch(clock);
        Ok(task)
    }

    /// Runs `mutation` against an owned task and records the modification.
    ///
    /// The integration's timestamp only changes when `mutation` succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationDomainError::TaskNotFound`] (converted into `E`)
    /// when the task is not owned by this integration, or the error produced
    /// by `mutation`.
    pub fn modify_task<T, E>(
        &mut self,
        task_id: &TaskId,
        clock: &impl Clock,
        mutation: impl FnOnce(&mut Task) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<IntegrationDomainError>,
    {
        let not_found = self.task_not_found(task_id);
        let task = self
            .tasks
            .iter_mut()
            .find(|candidate| candidate.id() == task_id)
            .ok_or(not_found)?;
        let outcome = mutation(task)?;
        self.touch(clock);
        Ok(outcome)
    }

    /// Removes an owned task and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationDomainError::TaskNotFound`] when the task is not
    /// owned by this integration.
    pub fn remove_task(
        &mut self,
        task_id: &TaskId,
        clock: &impl Clock,
    ) -> Result<Task, IntegrationDomainError> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id() == task_id)
            .ok_or_else(|| self.task_not_found(task_id))?;
        let removed = self.tasks.remove(position);
        self.touch(clock);
        Ok(removed)
    }

    /// Applies a partial update to the descriptive fields.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationDomainError::EmptyName`] or
    /// [`IntegrationDomainError::EmptyCompany`] when a provided value is
    /// blank; nothing is changed in that case.
    pub fn apply_patch(
        &mut self,
        patch: IntegrationPatch,
        clock: &impl Clock,
    ) -> Result<(), IntegrationDomainError> {
        let name = patch
            .name
            .map(|text| required_text(text, IntegrationDomainError::EmptyName))
            .transpose()?;
        let company = patch
            .company
            .map(|text| required_text(text, IntegrationDomainError::EmptyCompany))
            .transpose()?;

        if let Some(value) = name {
            self.name = value;
        }
        if let Some(value) = company {
            self.company = value;
        }
        if let Some(value) = patch.description {
            self.description = value;
        }
        if let Some(value) = patch.next_steps {
            self.next_steps = value;
        }
        if let Some(value) = patch.blockers {
            self.blockers = value;
        }
        if let Some(value) = patch.current_sprint {
            self.current_sprint = optional_text(value);
        }
        if let Some(value) = patch.metadata {
            self.metadata = value;
        }
        self.touch(clock);
        Ok(())
    }

    /// Moves the integration to another workflow stage.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationDomainError::StageRegression`] when `stage` is
    /// earlier than the current stage and `allow_regression` is `false`.
    pub fn change_stage(
        &mut self,
        stage: WorkflowStage,
        allow_regression: bool,
        clock: &impl Clock,
    ) -> Result<(), IntegrationDomainError> {
        if self.stage.is_regression_to(stage) && !allow_regression {
            return Err(IntegrationDomainError::StageRegression {
                from: self.stage,
                to: stage,
            });
        }
        self.stage = stage;
        self.touch(clock);
        Ok(())
    }

    /// Appends a contact.
    pub fn add_contact(&mut self, contact: Contact, clock: &impl Clock) {
        self.contacts.push(contact);
        self.touch(clock);
    }

    fn task_not_found(&self, task_id: &TaskId) -> IntegrationDomainError {
        IntegrationDomainError::TaskNotFound {
            integration_id: self.id.clone(),
            task_id: task_id.clone(),
        }
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

fn required_text(
    value: String,
    error: IntegrationDomainError,
) -> Result<String, IntegrationDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(error);
    }
    Ok(trimmed.to_owned())
}

fn optional_text(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
