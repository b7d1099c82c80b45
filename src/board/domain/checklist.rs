//! Checklist tasks owned by a single card.

use super::{TaskId, ValidationError};
use serde::{Deserialize, Serialize};

/// One checklist entry on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    completed: bool,
}

impl Task {
    /// Creates an incomplete task with a trimmed title.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTaskTitle`] if the title is empty
    /// after trimming.
    pub fn new(id: TaskId, title: &str) -> Result<Self, ValidationError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTaskTitle);
        }
        Ok(Self {
            id,
            title: trimmed.to_owned(),
            completed: false,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(id: TaskId, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the task has been ticked off.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    const fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Ordered checklist of tasks.
///
/// The completed count is derived on demand and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checklist(Vec<Task>);

impl Checklist {
    /// Creates an empty checklist.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the tasks in checklist order.
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.0
    }

    /// Returns an iterator over the tasks in checklist order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the checklist has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.0.iter().filter(|task| task.is_completed()).count()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.0.iter().find(|task| task.id() == id)
    }

    /// Returns `true` if a task with the identifier exists.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the first identifier that appears more than once, if any.
    pub(crate) fn first_duplicate(&self) -> Option<&TaskId> {
        self.0.iter().enumerate().find_map(|(position, task)| {
            self.0
                .iter()
                .skip(position + 1)
                .any(|other| other.id() == task.id())
                .then_some(task.id())
        })
    }

    pub(crate) fn push(&mut self, task: Task) {
        self.0.push(task);
    }

    /// Flips completion of the matching task. Returns `false` if absent.
    pub(crate) fn toggle(&mut self, id: &TaskId) -> bool {
        self.0
            .iter_mut()
            .find(|task| task.id() == id)
            .map(Task::toggle)
            .is_some()
    }

    /// Removes exactly one matching task. Returns `false` if absent.
    pub(crate) fn remove(&mut self, id: &TaskId) -> bool {
        self.0
            .iter()
            .position(|task| task.id() == id)
            .map(|position| self.0.remove(position))
            .is_some()
    }
}

impl From<Vec<Task>> for Checklist {
    fn from(tasks: Vec<Task>) -> Self {
        Self(tasks)
    }
}

impl<'a> IntoIterator for &'a Checklist {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
