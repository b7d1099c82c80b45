//! Derived read-only views over the board.

use super::{Board, Card, CardId, Stage};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Compact card view with derived checklist progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSummary {
    /// Card identifier.
    pub id: CardId,
    /// Card title.
    pub title: String,
    /// Card stage.
    pub stage: Stage,
    /// Card due date.
    pub due_date: NaiveDate,
    /// Number of assignees.
    pub assignee_count: u32,
    /// Number of checklist tasks.
    pub task_count: usize,
    /// Number of completed checklist tasks.
    pub completed_task_count: usize,
}

impl From<&Card> for CardSummary {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id().clone(),
            title: card.title().to_owned(),
            stage: card.stage(),
            due_date: card.due_date(),
            assignee_count: card.assignee_count(),
            task_count: card.tasks().len(),
            completed_task_count: card.completed_task_count(),
        }
    }
}

impl CardSummary {
    /// Returns `true` when the card has tasks and all are completed.
    #[must_use]
    pub const fn is_checklist_done(&self) -> bool {
        self.task_count > 0 && self.completed_task_count == self.task_count
    }
}

/// Counts cards per stage in canonical stage order.
#[must_use]
pub fn lane_counts(board: &Board) -> Vec<(Stage, usize)> {
    Stage::ALL
        .iter()
        .map(|stage| {
            let count = board
                .cards()
                .iter()
                .filter(|card| card.stage() == *stage)
                .count();
            (*stage, count)
        })
        .collect()
}

/// Groups cards due in the given month by day of month.
///
/// Board order is preserved within each day. Returns an empty map for an
/// invalid month.
#[must_use]
pub fn due_in_month(board: &Board, year: i32, month: u32) -> BTreeMap<u32, Vec<&Card>> {
    let mut days: BTreeMap<u32, Vec<&Card>> = BTreeMap::new();
    for card in board {
        let due = card.due_date();
        if due.year() == year && due.month() == month {
            days.entry(due.day()).or_default().push(card);
        }
    }
    days
}
