//! Pipeline stages a card moves through.

use super::ParseStageError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of pipeline stages. Each stage is also a board lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// Work is being scoped.
    Planning,
    /// Work is ready to be picked up.
    Todo,
    /// Work is underway.
    InProgress,
    /// Work is waiting on client sign-off.
    ClientReview,
    /// Work is finished.
    Completed,
}

impl Stage {
    /// Every stage in canonical board order.
    pub const ALL: [Self; 5] = [
        Self::Planning,
        Self::Todo,
        Self::InProgress,
        Self::ClientReview,
        Self::Completed,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::ClientReview => "client-review",
            Self::Completed => "completed",
        }
    }

    /// Returns the lane heading shown to users.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::ClientReview => "Client Review",
            Self::Completed => "Completed",
        }
    }
}

/// Parses a canonical wire name such as `in-progress`.
///
/// Matching is exact: surrounding whitespace or other casing is rejected.
impl TryFrom<&str> for Stage {
    type Error = ParseStageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "planning" => Ok(Self::Planning),
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "client-review" => Ok(Self::ClientReview),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseStageError(value.to_owned())),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
