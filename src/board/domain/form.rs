//! Raw card form input and its validation.

use super::{Card, CardFields, FormField, Stage, ValidationError};
use crate::board::config::BoardConfig;
use chrono::NaiveDate;

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Unvalidated card fields as entered in the create/edit form.
///
/// Every field is kept as the user typed it so a rejected submission can be
/// shown again with per-field messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardForm {
    /// Card title.
    pub title: String,
    /// Card description.
    pub description: String,
    /// Number of people assigned.
    pub assignee_count: u32,
    /// Stage in wire form, for example `in-progress`.
    pub stage: String,
    /// Due date in `YYYY-MM-DD` form.
    pub due_date: String,
}

impl CardForm {
    /// Creates a form with the required text fields, one assignee and the
    /// `todo` stage.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            assignee_count: 1,
            stage: Stage::Todo.as_str().to_owned(),
            due_date: due_date.into(),
        }
    }

    /// Creates the blank form shown when a new card is started.
    #[must_use]
    pub fn blank(stage: Stage, assignee_count: u32, due_date: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            assignee_count,
            stage: stage.as_str().to_owned(),
            due_date: due_date.format(DUE_DATE_FORMAT).to_string(),
        }
    }

    /// Sets the stage.
    #[must_use]
    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = stage.into();
        self
    }

    /// Sets the assignee count.
    #[must_use]
    pub const fn with_assignee_count(mut self, assignee_count: u32) -> Self {
        self.assignee_count = assignee_count;
        self
    }

    /// Validates every field and returns the typed card fields.
    ///
    /// Text fields are trimmed. All problems are reported together.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming each invalid field, combined
    /// with [`ValidationError::Multiple`] when more than one field fails.
    pub fn validate(&self, config: &BoardConfig) -> Result<CardFields, ValidationError> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push(ValidationError::EmptyTitle);
        } else if title.chars().count() > config.max_title_chars {
            errors.push(ValidationError::TooLong {
                field: FormField::Title,
                limit: config.max_title_chars,
            });
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.push(ValidationError::EmptyDescription);
        }

        if self.assignee_count < 1 {
            errors.push(ValidationError::InvalidAssigneeCount(self.assignee_count));
        }

        let stage = Stage::try_from(self.stage.as_str()).map_err(ValidationError::from);
        errors.extend(stage.as_ref().err().cloned());

        let due_date = parse_due_date(&self.due_date);
        errors.extend(due_date.as_ref().err().cloned());

        ValidationError::collect(errors)?;

        Ok(CardFields {
            title: title.to_owned(),
            description: description.to_owned(),
            assignee_count: self.assignee_count,
            stage: stage?,
            due_date: due_date?,
        })
    }
}

impl From<&CardFields> for CardForm {
    fn from(fields: &CardFields) -> Self {
        Self {
            title: fields.title.clone(),
            description: fields.description.clone(),
            assignee_count: fields.assignee_count,
            stage: fields.stage.as_str().to_owned(),
            due_date: fields.due_date.format(DUE_DATE_FORMAT).to_string(),
        }
    }
}

impl From<&Card> for CardForm {
    fn from(card: &Card) -> Self {
        Self::from(&card.fields())
    }
}

fn parse_due_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingDueDate);
    }
    NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDueDate(trimmed.to_owned()))
}
