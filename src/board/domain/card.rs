//! Card aggregate and its validated field set.

use super::{CardId, Checklist, InvariantViolation, Stage, Task, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validated card fields, everything except the identifier and checklist.
///
/// Produced by [`CardForm::validate`](super::CardForm::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFields {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) assignee_count: u32,
    pub(crate) stage: Stage,
    pub(crate) due_date: NaiveDate,
}

impl CardFields {
    /// Returns the trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the trimmed description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the number of assignees.
    #[must_use]
    pub const fn assignee_count(&self) -> u32 {
        self.assignee_count
    }

    /// Returns the stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}

/// A trackable unit of work with a stage and a checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    id: CardId,
    title: String,
    description: String,
    assignee_count: u32,
    #[serde(rename = "status")]
    stage: Stage,
    due_date: NaiveDate,
    tasks: Checklist,
}

/// Parameter object for reconstructing a persisted card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCardData {
    /// Persisted card identifier.
    pub id: CardId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted assignee count.
    pub assignee_count: u32,
    /// Persisted stage.
    pub stage: Stage,
    /// Persisted due date.
    pub due_date: NaiveDate,
    /// Persisted checklist in order.
    pub tasks: Vec<Task>,
}

impl Card {
    /// Creates a card with an empty checklist.
    #[must_use]
    pub fn new(id: CardId, fields: CardFields) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            assignee_count: fields.assignee_count,
            stage: fields.stage,
            due_date: fields.due_date,
            tasks: Checklist::new(),
        }
    }

    /// Reconstructs a card from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCardData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            assignee_count: data.assignee_count,
            stage: data.stage,
            due_date: data.due_date,
            tasks: Checklist::from(data.tasks),
        }
    }

    /// Returns the card identifier.
    #[must_use]
    pub const fn id(&self) -> &CardId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the number of assignees.
    #[must_use]
    pub const fn assignee_count(&self) -> u32 {
        self.assignee_count
    }

    /// Returns the stage, which is also the card's lane.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the checklist.
    #[must_use]
    pub const fn tasks(&self) -> &Checklist {
        &self.tasks
    }

    /// Returns the number of completed checklist tasks.
    #[must_use]
    pub fn completed_task_count(&self) -> usize {
        self.tasks.completed_count()
    }

    /// Returns a copy of the editable fields.
    #[must_use]
    pub fn fields(&self) -> CardFields {
        CardFields {
            title: self.title.clone(),
            description: self.description.clone(),
            assignee_count: self.assignee_count,
            stage: self.stage,
            due_date: self.due_date,
        }
    }

    /// Replaces every field except the identifier and checklist.
    pub(crate) fn apply_fields(&mut self, fields: CardFields) {
        self.title = fields.title;
        self.description = fields.description;
        self.assignee_count = fields.assignee_count;
        self.stage = fields.stage;
        self.due_date = fields.due_date;
    }

    pub(crate) const fn set_stage(&mut self, stage: Stage) {
        self.stage = stage;
    }

    /// Appends a task to the checklist.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation::DuplicateTaskId`] if the checklist
    /// already holds a task with the same identifier.
    pub(crate) fn add_task(&mut self, task: Task) -> Result<(), InvariantViolation> {
        if self.tasks.contains(task.id()) {
            return Err(InvariantViolation::DuplicateTaskId {
                card_id: self.id.clone(),
                task_id: task.id().clone(),
            });
        }
        self.tasks.push(task);
        Ok(())
    }

    pub(crate) fn toggle_task(&mut self, task_id: &TaskId) -> bool {
        self.tasks.toggle(task_id)
    }

    pub(crate) fn delete_task(&mut self, task_id: &TaskId) -> bool {
        self.tasks.remove(task_id)
    }

    /// Checks that task identifiers are unique within this card.
    pub(crate) fn check_task_ids(&self) -> Result<(), InvariantViolation> {
        self.tasks.first_duplicate().map_or(Ok(()), |task_id| {
            Err(InvariantViolation::DuplicateTaskId {
                card_id: self.id.clone(),
                task_id: task_id.clone(),
            })
        })
    }
}
