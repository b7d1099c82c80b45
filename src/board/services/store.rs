//! Authoritative board store with checklist operations and the detail
//! projection.

use crate::board::{
    config::BoardConfig,
    domain::{
        Board, BoardError, BoardResult, Card, CardForm, CardId, DropGesture, FormField,
        InvariantViolation, Lane, ReorderOutcome, Stage, Task, TaskId, ValidationError, lane_of,
        lanes,
    },
    ports::IdGenerator,
};
use std::sync::Arc;

/// The single mutator of a board.
///
/// Every mutation is synchronous and atomic: on error the board is left in
/// its previous state. The detail projection stores only the open card's
/// identifier and is resolved against the board on every read, so it always
/// mirrors the board's current entry.
pub struct BoardStore<G>
where
    G: IdGenerator,
{
    board: Board,
    ids: Arc<G>,
    config: BoardConfig,
    open_card: Option<CardId>,
}

/// Board and detail projection captured before a persisted operation.
#[derive(Debug, Clone)]
pub(crate) struct Checkpoint {
    board: Board,
    open_card: Option<CardId>,
}

impl<G> BoardStore<G>
where
    G: IdGenerator,
{
    /// Creates a store with an empty board.
    #[must_use]
    pub fn new(ids: Arc<G>, config: BoardConfig) -> Self {
        Self::with_board(Board::new(), ids, config)
    }

    /// Creates a store over an existing board, for example one loaded from
    /// persistence.
    #[must_use]
    pub const fn with_board(board: Board, ids: Arc<G>, config: BoardConfig) -> Self {
        Self {
            board,
            ids,
            config,
            open_card: None,
        }
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cards in board order.
    #[must_use]
    pub fn list(&self) -> &[Card] {
        self.board.cards()
    }

    /// Finds a card by identifier.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.board.get(id)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.board.len()
    }

    /// Returns `true` when the board has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    /// Derives the lane for `stage`.
    #[must_use]
    pub fn lane(&self, stage: Stage) -> Lane<'_> {
        lane_of(&self.board, stage)
    }

    /// Derives every lane in canonical stage order.
    #[must_use]
    pub fn lanes(&self) -> Vec<Lane<'_>> {
        lanes(&self.board)
    }

    /// Validates the form and appends a new card with an empty checklist.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] when the form is invalid, or
    /// [`BoardError::Invariant`] when the generated identifier is already in
    /// use.
    pub fn create(&mut self, form: &CardForm) -> BoardResult<CardId> {
        let fields = form.validate(&self.config)?;
        let id = CardId::new(self.ids.next_id());
        let card = Card::new(id.clone(), fields);
        self.board.push(card).map_err(log_violation)?;
        tracing::debug!(card_id = %id, "created card");
        Ok(id)
    }

    /// Validates the form and replaces every field of the card except its
    /// identifier and checklist.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] when the form is invalid, or
    /// [`BoardError::CardNotFound`] when no card has the identifier.
    pub fn update(&mut self, id: &CardId, form: &CardForm) -> BoardResult<()> {
        let fields = form.validate(&self.config)?;
        let card = self
            .board
            .get_mut(id)
            .ok_or_else(|| BoardError::CardNotFound(id.clone()))?;
        card.apply_fields(fields);
        tracing::debug!(card_id = %id, "updated card");
        Ok(())
    }

    /// Deletes a card, closing the detail projection if it shows that card.
    ///
    /// Returns the removed card, or `None` if no card had the identifier.
    pub fn remove(&mut self, id: &CardId) -> Option<Card> {
        let removed = self.board.remove(id)?;
        if self.open_card.as_ref() == Some(id) {
            self.open_card = None;
        }
        tracing::debug!(card_id = %id, "removed card");
        Some(removed)
    }

    /// Applies a drop gesture.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CardNotFound`] if the dragged card is absent, or
    /// [`BoardError::Validation`] if the drop index is past the end of the
    /// destination lane. The board is unchanged in both cases.
    pub fn reorder(&mut self, gesture: &DropGesture) -> BoardResult<ReorderOutcome> {
        let outcome = self.board.apply_drop(gesture).inspect_err(|err| {
            tracing::warn!(card_id = %gesture.card_id(), error = %err, "rejected drop gesture");
        })?;
        if let ReorderOutcome::Moved { card_id, to, .. } = &outcome {
            tracing::debug!(
                card_id = %card_id,
                stage = %to.stage,
                index = to.index,
                "moved card"
            );
        }
        Ok(outcome)
    }

    /// Appends an incomplete task with a trimmed title to a card's checklist.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTaskTitle`] or
    /// [`ValidationError::TooLong`] for a bad title,
    /// [`BoardError::CardNotFound`] for an unknown card, or
    /// [`BoardError::Invariant`] when the generated identifier is already in
    /// use on the card.
    pub fn add_task(&mut self, card_id: &CardId, title: &str) -> BoardResult<TaskId> {
        let limit = self.config.max_task_title_chars;
        if title.trim().chars().count() > limit {
            return Err(ValidationError::TooLong {
                field: FormField::TaskTitle,
                limit,
            }
            .into());
        }
        let card = self
            .board
            .get_mut(card_id)
            .ok_or_else(|| BoardError::CardNotFound(card_id.clone()))?;
        let task_id = TaskId::new(self.ids.next_id());
        let task = Task::new(task_id.clone(), title)?;
        card.add_task(task).map_err(log_violation)?;
        tracing::debug!(card_id = %card_id, task_id = %task_id, "added task");
        Ok(task_id)
    }

    /// Flips a task's completion.
    ///
    /// Returns `false`, leaving the board unchanged, if either identifier is
    /// absent.
    pub fn toggle_task(&mut self, card_id: &CardId, task_id: &TaskId) -> bool {
        self.board
            .get_mut(card_id)
            .is_some_and(|card| card.toggle_task(task_id))
    }

    /// Removes one task from a card's checklist.
    ///
    /// Returns `false`, leaving the board unchanged, if either identifier is
    /// absent.
    pub fn delete_task(&mut self, card_id: &CardId, task_id: &TaskId) -> bool {
        self.board
            .get_mut(card_id)
            .is_some_and(|card| card.delete_task(task_id))
    }

    /// Opens the detail projection on a card and returns the card.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CardNotFound`] if no card has the identifier.
    pub fn open_detail(&mut self, id: &CardId) -> BoardResult<&Card> {
        let card = self
            .board
            .get(id)
            .ok_or_else(|| BoardError::CardNotFound(id.clone()))?;
        self.open_card = Some(id.clone());
        Ok(card)
    }

    /// Closes the detail projection.
    pub fn close_detail(&mut self) {
        self.open_card = None;
    }

    /// Returns the card shown in the detail projection, if one is open.
    #[must_use]
    pub fn detail(&self) -> Option<&Card> {
        self.open_card.as_ref().and_then(|id| self.board.get(id))
    }

    /// Returns the identifier of the card the detail projection is open on.
    #[must_use]
    pub const fn open_card_id(&self) -> Option<&CardId> {
        self.open_card.as_ref()
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            board: self.board.clone(),
            open_card: self.open_card.clone(),
        }
    }

    pub(crate) fn changed_since(&self, checkpoint: &Checkpoint) -> bool {
        self.board != checkpoint.board
    }

    /// Puts the board and detail projection back to `checkpoint`.
    pub(crate) fn rollback(&mut self, checkpoint: Checkpoint) {
        self.board = checkpoint.board;
        self.open_card = checkpoint.open_card;
    }

    /// Consumes the store and returns the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }
}

fn log_violation(violation: InvariantViolation) -> BoardError {
    tracing::error!(error = %violation, "rejected operation that would break a board invariant");
    BoardError::Invariant(violation)
}
