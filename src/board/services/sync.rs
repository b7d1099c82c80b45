//! Service layer wiring the board store to the persistence port.

use super::{BoardStore, LifecycleController, SubmitOutcome};
use crate::board::{
    config::BoardConfig,
    domain::{
        Board, BoardError, BoardResult, Card, CardForm, CardId, DropGesture, LaneSlot,
        ReorderOutcome, Stage, TaskId, ValidationError,
    },
    ports::{BoardRepository, BoardRepositoryError, IdGenerator},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Request payload for a drop gesture as reported by a drag source.
///
/// Lanes arrive as strings and are validated when the request is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderCardRequest {
    card_id: CardId,
    source_lane: String,
    source_index: usize,
    destination: Option<(String, usize)>,
}

impl ReorderCardRequest {
    /// Creates a request for a drag released outside any lane.
    #[must_use]
    pub fn new(card_id: CardId, source_lane: impl Into<String>, source_index: usize) -> Self {
        Self {
            card_id,
            source_lane: source_lane.into(),
            source_index,
            destination: None,
        }
    }

    /// Sets the lane and index the card was dropped on.
    #[must_use]
    pub fn with_destination(mut self, lane: impl Into<String>, index: usize) -> Self {
        self.destination = Some((lane.into(), index));
        self
    }
}

impl TryFrom<ReorderCardRequest> for DropGesture {
    type Error = ValidationError;

    fn try_from(request: ReorderCardRequest) -> Result<Self, Self::Error> {
        let source = LaneSlot::parse(&request.source_lane, request.source_index)?;
        let destination = request
            .destination
            .map(|(lane, index)| LaneSlot::parse(&lane, index))
            .transpose()?;
        Ok(Self::new(request.card_id, source, destination))
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// The board engine rejected the operation.
    #[error(transparent)]
    Board(#[from] BoardError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
}

impl From<ValidationError> for BoardServiceError {
    fn from(err: ValidationError) -> Self {
        Self::Board(BoardError::Validation(err))
    }
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board orchestration service that persists after every change.
///
/// All operations are serialized through one lock, so the store keeps a
/// single mutator even when the service is shared between tasks. An
/// operation that fails, including a failed save, leaves the board and the
/// detail projection as they were before the call.
pub struct BoardSyncService<R, G>
where
    R: BoardRepository,
    G: IdGenerator,
{
    repository: Arc<R>,
    store: Mutex<BoardStore<G>>,
}

impl<R, G> BoardSyncService<R, G>
where
    R: BoardRepository,
    G: IdGenerator,
{
    /// Loads the board from the repository and builds the service.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when loading fails or the
    /// stored board is corrupt.
    pub async fn load(
        repository: Arc<R>,
        ids: Arc<G>,
        config: BoardConfig,
    ) -> BoardServiceResult<Self> {
        let board = repository.load_board().await?;
        tracing::debug!(cards = board.len(), "loaded board");
        Ok(Self {
            repository,
            store: Mutex::new(BoardStore::with_board(board, ids, config)),
        })
    }

    /// Runs `operation` on the locked store and saves the board if it
    /// changed.
    ///
    /// When `operation` fails or the save fails, the store is rolled back to
    /// its state before the call.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use cardwall::board::{
    ///     adapters::{ids::SequentialIdGenerator, memory::InMemoryBoardRepository},
    ///     config::BoardConfig,
    ///     domain::CardForm,
    ///     services::BoardSyncService,
    /// };
    ///
    /// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
    /// let repository = InMemoryBoardRepository::new();
    /// let service = BoardSyncService::load(
    ///     Arc::new(repository.clone()),
    ///     Arc::new(SequentialIdGenerator::new()),
    ///     BoardConfig::default(),
    /// )
    /// .await
    /// .expect("load");
    ///
    /// let form = CardForm::new("Launch", "Ship it", "2024-02-15");
    /// let id = service
    ///     .apply(|store| store.create(&form))
    ///     .await
    ///     .expect("create");
    ///
    /// assert!(repository.stored_board().expect("stored").contains(&id));
    /// # });
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Board`] with the error of `operation`,
    /// or [`BoardServiceError::Repository`] when saving fails.
    pub async fn apply<T, F>(&self, operation: F) -> BoardServiceResult<T>
    where
        F: FnOnce(&mut BoardStore<G>) -> BoardResult<T>,
    {
        let mut store = self.store.lock().await;
        let checkpoint = store.checkpoint();
        let value = match operation(&mut *store) {
            Ok(value) => value,
            Err(err) => {
                store.rollback(checkpoint);
                return Err(err.into());
            }
        };
        if !store.changed_since(&checkpoint) {
            return Ok(value);
        }
        if let Err(err) = self.repository.save_board(store.board()).await {
            tracing::warn!(error = %err, "save failed, restoring previous board");
            store.rollback(checkpoint);
            return Err(err.into());
        }
        Ok(value)
    }

    /// Returns a copy of the board.
    pub async fn board(&self) -> Board {
        self.store.lock().await.board().clone()
    }

    /// Returns a copy of a card.
    pub async fn get(&self, id: &CardId) -> Option<Card> {
        self.store.lock().await.get(id).cloned()
    }

    /// Creates a card and saves the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Board`] when the store rejects the form
    /// and [`BoardServiceError::Repository`] when saving fails.
    pub async fn create(&self, form: &CardForm) -> BoardServiceResult<CardId> {
        self.apply(|store| store.create(form)).await
    }

    /// Updates a card and saves the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Board`] when the form is invalid or the
    /// card is absent, and [`BoardServiceError::Repository`] when saving
    /// fails.
    pub async fn update(&self, id: &CardId, form: &CardForm) -> BoardServiceResult<()> {
        self.apply(|store| store.update(id, form)).await
    }

    /// Removes a card and saves the board if anything was removed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when saving fails.
    pub async fn remove(&self, id: &CardId) -> BoardServiceResult<Option<Card>> {
        self.apply(|store| Ok(store.remove(id))).await
    }

    /// Applies a drop gesture and saves the board if the card moved.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Board`] when a lane name is unknown, the
    /// card is absent, or the index is out of range, and
    /// [`BoardServiceError::Repository`] when saving fails.
    pub async fn reorder(
        &self,
        request: ReorderCardRequest,
    ) -> BoardServiceResult<ReorderOutcome> {
        let gesture = DropGesture::try_from(request)?;
        self.apply(|store| store.reorder(&gesture)).await
    }

    /// Adds a checklist task and saves the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Board`] when the title is empty or the
    /// card is absent, and [`BoardServiceError::Repository`] when saving
    /// fails.
    pub async fn add_task(&self, card_id: &CardId, title: &str) -> BoardServiceResult<TaskId> {
        self.apply(|store| store.add_task(card_id, title)).await
    }

    /// Toggles a checklist task and saves the board if it changed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when saving fails.
    pub async fn toggle_task(
        &self,
        card_id: &CardId,
        task_id: &TaskId,
    ) -> BoardServiceResult<bool> {
        self.apply(|store| Ok(store.toggle_task(card_id, task_id))).await
    }

    /// Deletes a checklist task and saves the board if it changed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when saving fails.
    pub async fn delete_task(
        &self,
        card_id: &CardId,
        task_id: &TaskId,
    ) -> BoardServiceResult<bool> {
        self.apply(|store| Ok(store.delete_task(card_id, task_id))).await
    }

    /// Opens the detail projection on a card and returns a copy of it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Board`] when the card is absent.
    pub async fn open_detail(&self, id: &CardId) -> BoardServiceResult<Card> {
        self.apply(|store| store.open_detail(id).cloned()).await
    }

    /// Returns a copy of the card shown in the detail projection.
    pub async fn detail(&self) -> Option<Card> {
        self.store.lock().await.detail().cloned()
    }

    /// Closes the detail projection.
    pub async fn close_detail(&self) {
        self.store.lock().await.close_detail();
    }

    /// Opens a blank form on `controller` for a new card.
    pub async fn open_new<C>(&self, controller: &mut LifecycleController<C>, lane: Option<Stage>)
    where
        C: Clock,
    {
        controller.open_new(&*self.store.lock().await, lane);
    }

    /// Opens the form on `controller` for an existing card.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Board`] when the card is absent.
    pub async fn open_edit<C>(
        &self,
        controller: &mut LifecycleController<C>,
        card_id: &CardId,
    ) -> BoardServiceResult<()>
    where
        C: Clock,
    {
        Ok(controller.open_edit(&*self.store.lock().await, card_id)?)
    }

    /// Submits the form open on `controller` and saves the board.
    ///
    /// A failed save leaves the form open with its contents.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Board`] when the store rejects the form
    /// and [`BoardServiceError::Repository`] when saving fails.
    pub async fn submit<C>(
        &self,
        controller: &mut LifecycleController<C>,
    ) -> BoardServiceResult<Option<SubmitOutcome>>
    where
        C: Clock,
    {
        let snapshot = controller.snapshot();
        let result = self.apply(|store| controller.submit(store)).await;
        if result.is_err() {
            controller.restore(snapshot);
        }
        result
    }

    /// Marks a card as awaiting delete confirmation on `controller`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Board`] when the card is absent.
    pub async fn request_delete<C>(
        &self,
        controller: &mut LifecycleController<C>,
        card_id: &CardId,
    ) -> BoardServiceResult<()>
    where
        C: Clock,
    {
        Ok(controller.request_delete(&*self.store.lock().await, card_id)?)
    }

    /// Deletes the card awaiting confirmation on `controller` and saves the
    /// board.
    ///
    /// A failed save keeps the card and the pending confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when saving fails.
    pub async fn confirm_delete<C>(
        &self,
        controller: &mut LifecycleController<C>,
    ) -> BoardServiceResult<Option<Card>>
    where
        C: Clock,
    {
        let snapshot = controller.snapshot();
        let result = self.apply(|store| Ok(controller.confirm_delete(store))).await;
        if result.is_err() {
            controller.restore(snapshot);
        }
        result
    }
}
