//! Drag reordering: translating a drop gesture into a new board order.

use super::{Board, BoardError, Card, CardId, Stage, ValidationError};

/// A position within a lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LaneSlot {
    /// Lane the position belongs to.
    pub stage: Stage,
    /// Zero-based index within the lane.
    pub index: usize,
}

impl LaneSlot {
    /// Creates a lane slot.
    #[must_use]
    pub const fn new(stage: Stage, index: usize) -> Self {
        Self { stage, index }
    }

    /// Creates a lane slot from a lane name supplied by the drop source.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownStage`] if `lane` is not a stage.
    pub fn parse(lane: &str, index: usize) -> Result<Self, ValidationError> {
        Ok(Self::new(Stage::try_from(lane)?, index))
    }
}

/// A completed drop gesture.
///
/// A gesture without a destination represents a drag released outside any
/// lane and is always a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropGesture {
    card_id: CardId,
    source: LaneSlot,
    destination: Option<LaneSlot>,
}

impl DropGesture {
    /// Creates a drop gesture.
    #[must_use]
    pub const fn new(card_id: CardId, source: LaneSlot, destination: Option<LaneSlot>) -> Self {
        Self {
            card_id,
            source,
            destination,
        }
    }

    /// Returns the dragged card.
    #[must_use]
    pub const fn card_id(&self) -> &CardId {
        &self.card_id
    }

    /// Returns where the drag started.
    #[must_use]
    pub const fn source(&self) -> LaneSlot {
        self.source
    }

    /// Returns where the card was dropped, if anywhere.
    #[must_use]
    pub const fn destination(&self) -> Option<LaneSlot> {
        self.destination
    }

    /// Returns the destination when the gesture would move the card.
    #[must_use]
    pub fn effective_destination(&self) -> Option<LaneSlot> {
        self.destination
            .filter(|destination| *destination != self.source)
    }
}

/// Result of applying a drop gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// The gesture had no destination or dropped the card where it started.
    Unchanged,
    /// The card now sits at `to` within its destination lane.
    Moved {
        /// Moved card.
        card_id: CardId,
        /// Lane and index the drag started from.
        from: LaneSlot,
        /// Lane and index the card now occupies.
        to: LaneSlot,
    },
}

impl Board {
    /// Applies a drop gesture.
    ///
    /// The card is removed, given the destination stage, and reinserted in
    /// front of the card that currently holds `destination.index` in the
    /// destination lane, or at the end of the board when the index equals
    /// the lane length. This places the card at exactly that lane-relative
    /// index regardless of how other lanes are interleaved in the board.
    ///
    /// The board is unchanged when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CardNotFound`] if the dragged card is absent and
    /// [`ValidationError::DropIndexOutOfRange`] if the index lies past the
    /// end of the destination lane.
    pub fn apply_drop(&mut self, gesture: &DropGesture) -> Result<ReorderOutcome, BoardError> {
        let Some(destination) = gesture.effective_destination() else {
            return Ok(ReorderOutcome::Unchanged);
        };
        let position = self
            .position(gesture.card_id())
            .ok_or_else(|| BoardError::CardNotFound(gesture.card_id().clone()))?;

        let mut cards = self.cards().to_vec();
        let mut card = cards.remove(position);
        card.set_stage(destination.stage);

        let insert_at = insertion_index(&cards, destination)?;
        cards.insert(insert_at, card);
        self.replace_cards(cards);

        Ok(ReorderOutcome::Moved {
            card_id: gesture.card_id().clone(),
            from: gesture.source(),
            to: destination,
        })
    }
}

/// Maps a lane-relative destination onto a board index.
fn insertion_index(cards: &[Card], destination: LaneSlot) -> Result<usize, ValidationError> {
    let mut lane_len = 0;
    for (board_index, card) in cards.iter().enumerate() {
        if card.stage() != destination.stage {
            continue;
        }
        if lane_len == destination.index {
            return Ok(board_index);
        }
        lane_len += 1;
    }

    if destination.index == lane_len {
        Ok(cards.len())
    } else {
        Err(ValidationError::DropIndexOutOfRange {
            stage: destination.stage,
            index: destination.index,
            len: lane_len,
        })
    }
}
