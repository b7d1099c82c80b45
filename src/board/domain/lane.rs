//! Lane derivation: a read-only partition of the board by stage.
//!
//! Lanes are never stored. They are recomputed from the board on every read,
//! so reordering a lane always goes through a board mutation.

use super::{Board, Card, CardId, LaneSlot, Stage};

/// Cards of one stage in board order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane<'a> {
    stage: Stage,
    cards: Vec<&'a Card>,
}

impl<'a> Lane<'a> {
    /// Returns the lane's stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the lane members in board order.
    #[must_use]
    pub fn cards(&self) -> &[&'a Card] {
        &self.cards
    }

    /// Returns the member identifiers in board order.
    #[must_use]
    pub fn ids(&self) -> Vec<&'a CardId> {
        self.cards.iter().map(|card| card.id()).collect()
    }

    /// Returns the number of cards in the lane.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` when the lane has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the lane-relative position of a card.
    #[must_use]
    pub fn index_of(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == id)
    }
}

/// Derives the lane for `stage`, preserving board order.
#[must_use]
pub fn lane_of(board: &Board, stage: Stage) -> Lane<'_> {
    Lane {
        stage,
        cards: board
            .cards()
            .iter()
            .filter(|card| card.stage() == stage)
            .collect(),
    }
}

/// Derives every lane in canonical stage order.
///
/// Every card appears in exactly one lane, so the lane lengths always sum to
/// the board length.
#[must_use]
pub fn lanes(board: &Board) -> Vec<Lane<'_>> {
    Stage::ALL
        .iter()
        .map(|stage| lane_of(board, *stage))
        .collect()
}

/// Returns the stage and lane-relative index of a card.
#[must_use]
pub fn lane_position(board: &Board, id: &CardId) -> Option<LaneSlot> {
    let card = board.get(id)?;
    let stage = card.stage();
    lane_of(board, stage)
        .index_of(id)
        .map(|index| LaneSlot::new(stage, index))
}
