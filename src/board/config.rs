//! Configuration for board validation limits and form defaults.

use crate::board::domain::Stage;

/// Configuration for board validation and new-card defaults.
///
/// # Examples
///
/// ```
/// use cardwall::board::{config::BoardConfig, domain::Stage};
///
/// let config = BoardConfig::default();
/// assert_eq!(config.default_stage, Stage::Todo);
/// assert_eq!(config.default_assignee_count, 1);
///
/// let strict = BoardConfig::strict();
/// assert!(strict.max_title_chars < config.max_title_chars);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Stage preselected when a new card is opened without a lane.
    pub default_stage: Stage,
    /// Assignee count preselected for new cards.
    pub default_assignee_count: u32,
    /// Maximum card title length in characters.
    pub max_title_chars: usize,
    /// Maximum checklist task title length in characters.
    pub max_task_title_chars: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_stage: Stage::Todo,
            default_assignee_count: 1,
            max_title_chars: 200,
            max_task_title_chars: 200,
        }
    }
}

impl BoardConfig {
    /// Creates a strict configuration with reduced title limits.
    ///
    /// Useful for compact displays where long titles are truncated.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            default_stage: Stage::Todo,
            default_assignee_count: 1,
            max_title_chars: 80,
            max_task_title_chars: 80,
        }
    }

    /// Returns a copy of this configuration with a different default stage.
    #[must_use]
    pub const fn with_default_stage(mut self, stage: Stage) -> Self {
        self.default_stage = stage;
        self
    }
}
