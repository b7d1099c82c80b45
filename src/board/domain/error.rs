//! Error types for board validation, lookup, and invariant checks.
//!
//! Uses `thiserror` for typed variants that callers can inspect. Field-level
//! problems are [`ValidationError`]s, an absent identifier is
//! [`BoardError::CardNotFound`], and anything that would corrupt the board
//! is an [`InvariantViolation`].

use super::{CardId, Stage, TaskId};
use std::fmt;
use thiserror::Error;

/// Form field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Card title.
    Title,
    /// Card description.
    Description,
    /// Number of people assigned to the card.
    AssigneeCount,
    /// Card stage (lane).
    Stage,
    /// Card due date.
    DueDate,
    /// Checklist task title.
    TaskTitle,
    /// Position within a lane.
    LaneIndex,
}

impl FormField {
    /// Returns the field name used when reporting per-field messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::AssigneeCount => "assigneeCount",
            Self::Stage => "status",
            Self::DueDate => "dueDate",
            Self::TaskTitle => "taskTitle",
            Self::LaneIndex => "laneIndex",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned while parsing a stage from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown stage: {0}")]
pub struct ParseStageError(pub String);

/// Errors returned when user-supplied values fail validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The card title is empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The card description is empty after trimming.
    #[error("description must not be empty")]
    EmptyDescription,

    /// The due date is empty after trimming.
    #[error("due date must not be empty")]
    MissingDueDate,

    /// The due date is not a `YYYY-MM-DD` calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),

    /// Fewer than one assignee was requested.
    #[error("assignee count must be at least 1, got {0}")]
    InvalidAssigneeCount(u32),

    /// The stage value is not one of the board lanes.
    #[error(transparent)]
    UnknownStage(#[from] ParseStageError),

    /// A checklist task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// A title exceeds the configured character limit.
    #[error("{field} exceeds {limit} character limit")]
    TooLong {
        /// Field that is too long.
        field: FormField,
        /// Configured maximum length in characters.
        limit: usize,
    },

    /// A drop position lies past the end of its lane.
    #[error("drop index {index} is beyond the end of lane {stage} ({len} cards)")]
    DropIndexOutOfRange {
        /// Destination lane.
        stage: Stage,
        /// Requested position within the lane.
        index: usize,
        /// Current lane length.
        len: usize,
    },

    /// Multiple validation errors occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Combines collected validation errors.
    ///
    /// Returns `Ok(())` when nothing was collected, the single error when one
    /// was collected, and [`ValidationError::Multiple`] otherwise.
    ///
    /// # Errors
    ///
    /// Returns the combined error whenever `errors` is non-empty.
    pub fn collect(mut errors: Vec<Self>) -> Result<(), Self> {
        if errors.len() > 1 {
            return Err(Self::Multiple(errors));
        }
        errors.pop().map_or(Ok(()), Err)
    }

    /// Returns the individual errors, flattening [`ValidationError::Multiple`].
    #[must_use]
    pub fn errors(&self) -> &[Self] {
        match self {
            Self::Multiple(errors) => errors,
            single => std::slice::from_ref(single),
        }
    }

    /// Returns the form field this error refers to.
    ///
    /// Returns `None` for [`ValidationError::Multiple`].
    #[must_use]
    pub const fn field(&self) -> Option<FormField> {
        match self {
            Self::EmptyTitle => Some(FormField::Title),
            Self::EmptyDescription => Some(FormField::Description),
            Self::MissingDueDate | Self::InvalidDueDate(_) => Some(FormField::DueDate),
            Self::InvalidAssigneeCount(_) => Some(FormField::AssigneeCount),
            Self::UnknownStage(_) => Some(FormField::Stage),
            Self::EmptyTaskTitle => Some(FormField::TaskTitle),
            Self::TooLong { field, .. } => Some(*field),
            Self::DropIndexOutOfRange { .. } => Some(FormField::LaneIndex),
            Self::Multiple(_) => None,
        }
    }

    /// Returns one `(field, message)` pair per individual error.
    #[must_use]
    pub fn field_messages(&self) -> Vec<(FormField, String)> {
        self.errors()
            .iter()
            .filter_map(|error| error.field().map(|field| (field, error.to_string())))
            .collect()
    }
}

/// Internal consistency failures that must never be silently repaired.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Two cards share an identifier.
    #[error("duplicate card identifier: {0}")]
    DuplicateCardId(CardId),

    /// Two tasks on the same card share an identifier.
    #[error("duplicate task identifier {task_id} on card {card_id}")]
    DuplicateTaskId {
        /// Owning card.
        card_id: CardId,
        /// Repeated task identifier.
        task_id: TaskId,
    },
}

/// Errors returned by board operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Input failed validation; the board is unchanged.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No card exists with the given identifier.
    #[error("card not found: {0}")]
    CardNotFound(CardId),

    /// The operation would break a board invariant and was rejected.
    #[error("invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),
}

impl From<ParseStageError> for BoardError {
    fn from(err: ParseStageError) -> Self {
        Self::Validation(ValidationError::UnknownStage(err))
    }
}
