//! Domain model for the board and checklist state engine.
//!
//! The board domain models cards, their checklists, lane derivation, and
//! drag reordering while keeping persistence and identifier generation
//! outside of the domain boundary.

mod board;
mod card;
mod checklist;
mod error;
mod form;
mod ids;
mod lane;
mod reorder;
mod stage;
mod views;

pub use board::Board;
pub use card::{Card, CardFields, PersistedCardData};
pub use checklist::{Checklist, Task};
pub use error::{BoardError, FormField, InvariantViolation, ParseStageError, ValidationError};
pub use form::CardForm;
pub use ids::{CardId, TaskId};
pub use lane::{Lane, lane_of, lane_position, lanes};
pub use reorder::{DropGesture, LaneSlot, ReorderOutcome};
pub use stage::Stage;
pub use views::{CardSummary, due_in_month, lane_counts};

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
