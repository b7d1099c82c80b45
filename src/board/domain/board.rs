//! The ordered card collection.

use super::{Card, CardId, InvariantViolation};
use serde::{Deserialize, Serialize};

/// Ordered sequence of cards.
///
/// Board order is the within-lane display order once cards are filtered by
/// stage. Card identifiers are unique; deserializing or constructing a board
/// with repeated identifiers fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Builds a board from cards in board order.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation`] when two cards share an identifier or a
    /// card holds two tasks with the same identifier.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, InvariantViolation> {
        for (position, card) in cards.iter().enumerate() {
            if cards
                .iter()
                .skip(position + 1)
                .any(|other| other.id() == card.id())
            {
                return Err(InvariantViolation::DuplicateCardId(card.id().clone()));
            }
            card.check_task_ids()?;
        }
        Ok(Self { cards })
    }

    /// Returns the cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` when the board has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Finds a card by identifier.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id() == id)
    }

    /// Returns `true` if a card with the identifier exists.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the board position of a card.
    #[must_use]
    pub fn position(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == id)
    }

    /// Consumes the board and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    pub(crate) fn get_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id() == id)
    }

    /// Appends a card at the end of the board.
    pub(crate) fn push(&mut self, card: Card) -> Result<(), InvariantViolation> {
        if self.contains(card.id()) {
            return Err(InvariantViolation::DuplicateCardId(card.id().clone()));
        }
        self.cards.push(card);
        Ok(())
    }

    pub(crate) fn remove(&mut self, id: &CardId) -> Option<Card> {
        self.position(id).map(|position| self.cards.remove(position))
    }

    pub(crate) fn replace_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }
}

impl TryFrom<Vec<Card>> for Board {
    type Error = InvariantViolation;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::from_cards(cards)
    }
}

impl From<Board> for Vec<Card> {
    fn from(board: Board) -> Self {
        board.cards
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
