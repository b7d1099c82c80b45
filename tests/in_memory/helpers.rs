//! Shared test helpers for in-memory board integration tests.

use std::sync::Arc;

use cardwall::board::{
    adapters::{ids::SequentialIdGenerator, memory::InMemoryBoardRepository},
    config::BoardConfig,
    domain::{Board, Card, CardForm, CardId, PersistedCardData, Stage, Task, TaskId},
    services::{BoardStore, BoardSyncService},
};
use chrono::NaiveDate;
use rstest::fixture;

/// Store type used across integration tests.
pub type TestStore = BoardStore<SequentialIdGenerator>;

/// Service type used across integration tests.
pub type TestService = BoardSyncService<InMemoryBoardRepository, SequentialIdGenerator>;

/// Builds a persisted card with a fixed due date.
#[must_use]
pub fn seeded_card(id: &str, stage: Stage, tasks: &[(&str, bool)]) -> Card {
    Card::from_persisted(PersistedCardData {
        id: CardId::new(id),
        title: format!("Project {id}"),
        description: format!("Work for project {id}"),
        assignee_count: 2,
        stage,
        due_date: NaiveDate::from_ymd_opt(2024, 2, 15).expect("valid date"),
        tasks: tasks
            .iter()
            .enumerate()
            .map(|(index, (title, completed))| {
                Task::from_persisted(TaskId::new(format!("{id}-{index}")), *title, *completed)
            })
            .collect(),
    })
}

/// Provides the four-lane board used by most integration tests.
///
/// Lanes interleave in board order so lane-relative indices differ from
/// board indices.
#[fixture]
pub fn seeded_board() -> Board {
    Board::from_cards(vec![
        seeded_card("1", Stage::InProgress, &[("Design mockups", true), ("Build", false)]),
        seeded_card("2", Stage::Todo, &[]),
        seeded_card("3", Stage::InProgress, &[]),
        seeded_card("4", Stage::Planning, &[("Scope", false)]),
        seeded_card("5", Stage::Todo, &[]),
    ])
    .expect("seeded cards have unique ids")
}

/// Provides a store over the seeded board.
#[fixture]
pub fn store(seeded_board: Board) -> TestStore {
    BoardStore::with_board(
        seeded_board,
        Arc::new(SequentialIdGenerator::with_prefix("card-")),
        BoardConfig::default(),
    )
}

/// Provides a repository holding the seeded board.
#[fixture]
pub fn repository(seeded_board: Board) -> InMemoryBoardRepository {
    InMemoryBoardRepository::with_board(seeded_board)
}

/// Loads a sync service over `repository`.
///
/// # Errors
///
/// Returns an error if the repository cannot be loaded.
pub async fn load_service(repository: &InMemoryBoardRepository) -> eyre::Result<TestService> {
    let service = BoardSyncService::load(
        Arc::new(repository.clone()),
        Arc::new(SequentialIdGenerator::with_prefix("card-")),
        BoardConfig::default(),
    )
    .await?;
    Ok(service)
}

/// Returns a valid form for a new card.
#[must_use]
pub fn form(title: &str, stage: &str) -> CardForm {
    CardForm::new(title, "Integration test card", "2024-03-01").with_stage(stage)
}

/// Lists card identifiers in the order given.
#[must_use]
pub fn ids<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Vec<String> {
    cards
        .into_iter()
        .map(|card| card.id().as_str().to_owned())
        .collect()
}

/// Lists a lane's card identifiers in display order.
#[must_use]
pub fn lane(store: &TestStore, stage: Stage) -> Vec<String> {
    ids(store.lane(stage).cards().iter().copied())
}
