//! Given steps for board workflow BDD scenarios.

use std::sync::Arc;

use super::world::{BoardWorld, new_store, run_async};
use cardwall::board::{
    adapters::{ids::SequentialIdGenerator, memory::InMemoryBoardRepository},
    config::BoardConfig,
    domain::{Board, Card, CardId, PersistedCardData, Stage},
    services::BoardSyncService,
};
use chrono::NaiveDate;
use eyre::WrapErr;
use rstest_bdd_macros::given;

fn seed_card(world: &mut BoardWorld, lane: &str, id: String) -> Result<(), eyre::Report> {
    let stage = Stage::try_from(lane).map_err(|err| eyre::eyre!("invalid stage: {err}"))?;
    let due_date = NaiveDate::from_ymd_opt(2024, 2, 15)
        .ok_or_else(|| eyre::eyre!("invalid fixture date"))?;
    let mut cards = world.store.list().to_vec();
    cards.push(Card::from_persisted(PersistedCardData {
        title: format!("Card {id}"),
        description: format!("Scenario card {id}"),
        id: CardId::new(id),
        assignee_count: 1,
        stage,
        due_date,
        tasks: Vec::new(),
    }));
    let board = Board::from_cards(cards).wrap_err("seed scenario board")?;
    world.store = new_store(board);
    Ok(())
}

#[given(r#"a "{stage}" card "{id}""#)]
fn a_card(world: &mut BoardWorld, stage: String, id: String) -> Result<(), eyre::Report> {
    seed_card(world, &stage, id)
}

#[given(r#"an "{stage}" card "{id}""#)]
fn an_card(world: &mut BoardWorld, stage: String, id: String) -> Result<(), eyre::Report> {
    seed_card(world, &stage, id)
}

#[given("the board is loaded by the sync service")]
fn board_loaded_by_service(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.repository = InMemoryBoardRepository::with_board(world.store.board().clone());
    let service = run_async(BoardSyncService::load(
        Arc::new(world.repository.clone()),
        Arc::new(SequentialIdGenerator::with_prefix("card-")),
        BoardConfig::default(),
    ))
    .wrap_err("load board into sync service")?;
    world.service = Some(service);
    Ok(())
}

#[given(r#"the detail view is open on card "{id}""#)]
fn detail_view_open(world: &mut BoardWorld, id: String) -> Result<(), eyre::Report> {
    world
        .store
        .open_detail(&CardId::new(id))
        .wrap_err("open detail view")?;
    Ok(())
}
