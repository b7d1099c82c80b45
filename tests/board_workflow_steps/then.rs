//! Then steps for board workflow BDD scenarios.

use super::world::BoardWorld;
use cardwall::board::{
    domain::{BoardError, CardId, Stage, ValidationError, lane_of},
    services::BoardServiceError,
};
use rstest_bdd_macros::then;

fn split_ids(expected: &str) -> Vec<String> {
    expected
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .collect()
}

#[then(r#"the board order is "{expected}""#)]
fn board_order_is(world: &BoardWorld, expected: String) -> Result<(), eyre::Report> {
    let actual: Vec<String> = world
        .current_board()
        .cards()
        .iter()
        .map(|card| card.id().to_string())
        .collect();
    eyre::ensure!(
        actual == split_ids(&expected),
        "expected board order {expected}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"the "{lane}" lane is "{expected}""#)]
fn lane_is(world: &BoardWorld, lane: String, expected: String) -> Result<(), eyre::Report> {
    let stage = Stage::try_from(lane.as_str())
        .map_err(|err| eyre::eyre!("invalid expected stage in scenario: {err}"))?;
    let board = world.current_board();
    let actual: Vec<String> = lane_of(&board, stage)
        .ids()
        .into_iter()
        .map(ToString::to_string)
        .collect();
    eyre::ensure!(
        actual == split_ids(&expected),
        "expected {stage} lane {expected}, found {actual:?}"
    );
    Ok(())
}

#[then("the board has been saved {count:usize} times")]
fn board_saved(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let saves = world.repository.save_count()?;
    eyre::ensure!(saves == count, "expected {count} saves, found {saves}");
    Ok(())
}

#[then("the drop is rejected as out of range")]
fn drop_rejected_out_of_range(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_drop_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing drop result"))?;
    if !matches!(
        result,
        Err(BoardServiceError::Board(BoardError::Validation(
            ValidationError::DropIndexOutOfRange { .. }
        )))
    ) {
        return Err(eyre::eyre!("expected DropIndexOutOfRange, got {result:?}"));
    }
    Ok(())
}

#[then("the drop is rejected as an unknown lane")]
fn drop_rejected_unknown_lane(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_drop_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing drop result"))?;
    if !matches!(
        result,
        Err(BoardServiceError::Board(BoardError::Validation(
            ValidationError::UnknownStage(_)
        )))
    ) {
        return Err(eyre::eyre!("expected UnknownStage, got {result:?}"));
    }
    Ok(())
}

#[then("the board has {count:usize} cards")]
fn board_has_cards(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.current_board().len();
    eyre::ensure!(actual == count, "expected {count} cards, found {actual}");
    Ok(())
}

#[then("no deletion is pending")]
fn no_deletion_pending(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.controller.pending_delete().is_none(),
        "expected no pending deletion"
    );
    Ok(())
}

#[then(r#"card "{id}" has {total:usize} tasks with {completed:usize} completed"#)]
fn card_has_tasks(
    world: &BoardWorld,
    id: String,
    total: usize,
    completed: usize,
) -> Result<(), eyre::Report> {
    let card_id = CardId::new(id);
    let card = world
        .store
        .get(&card_id)
        .ok_or_else(|| eyre::eyre!("card {card_id} missing"))?;
    eyre::ensure!(
        card.tasks().len() == total && card.completed_task_count() == completed,
        "expected {total} tasks with {completed} completed, found {} with {}",
        card.tasks().len(),
        card.completed_task_count()
    );
    Ok(())
}

#[then("the detail view shows {total:usize} tasks with {completed:usize} completed")]
fn detail_shows_tasks(
    world: &BoardWorld,
    total: usize,
    completed: usize,
) -> Result<(), eyre::Report> {
    let card = world
        .store
        .detail()
        .ok_or_else(|| eyre::eyre!("detail view is closed"))?;
    eyre::ensure!(
        card.tasks().len() == total && card.completed_task_count() == completed,
        "expected {total} tasks with {completed} completed in detail, found {} with {}",
        card.tasks().len(),
        card.completed_task_count()
    );
    Ok(())
}
