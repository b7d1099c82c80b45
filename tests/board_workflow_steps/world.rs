//! Shared world state for board workflow BDD scenarios.

use std::sync::Arc;

use cardwall::board::{
    adapters::{ids::SequentialIdGenerator, memory::InMemoryBoardRepository},
    config::BoardConfig,
    domain::{Board, CardId, ReorderOutcome, TaskId},
    services::{BoardServiceError, BoardStore, BoardSyncService, LifecycleController},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Store type used by the BDD world.
pub type TestStore = BoardStore<SequentialIdGenerator>;

/// Service type used by the BDD world.
pub type TestService = BoardSyncService<InMemoryBoardRepository, SequentialIdGenerator>;

/// Scenario world for board workflow behaviour tests.
pub struct BoardWorld {
    pub store: TestStore,
    pub controller: LifecycleController<DefaultClock>,
    pub repository: InMemoryBoardRepository,
    pub service: Option<TestService>,
    pub last_task: Option<(CardId, TaskId)>,
    pub last_drop_result: Option<Result<ReorderOutcome, BoardServiceError>>,
}

impl BoardWorld {
    /// Creates a world with an empty board and no service.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: new_store(Board::new()),
            controller: LifecycleController::new(Arc::new(DefaultClock)),
            repository: InMemoryBoardRepository::new(),
            service: None,
            last_task: None,
            last_drop_result: None,
        }
    }

    /// Returns the current board, read through the service once one is
    /// loaded.
    #[must_use]
    pub fn current_board(&self) -> Board {
        self.service.as_ref().map_or_else(
            || self.store.board().clone(),
            |service| run_async(service.board()),
        )
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a store over `board` with deterministic identifiers.
#[must_use]
pub fn new_store(board: Board) -> TestStore {
    BoardStore::with_board(
        board,
        Arc::new(SequentialIdGenerator::with_prefix("task-")),
        BoardConfig::default(),
    )
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
