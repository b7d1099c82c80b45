//! When steps for board workflow BDD scenarios.

use super::world::{BoardWorld, run_async};
use cardwall::board::{domain::CardId, services::ReorderCardRequest};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(
    r#"card "{id}" is dropped from "{source}" {source_index:usize} onto "{destination}" {destination_index:usize}"#
)]
fn card_dropped(
    world: &mut BoardWorld,
    id: String,
    source: String,
    source_index: usize,
    destination: String,
    destination_index: usize,
) -> Result<(), eyre::Report> {
    let service = world
        .service
        .as_ref()
        .ok_or_else(|| eyre::eyre!("scenario must load the sync service before dropping"))?;
    let request = ReorderCardRequest::new(CardId::new(id), source, source_index)
        .with_destination(destination, destination_index);
    world.last_drop_result = Some(run_async(service.reorder(request)));
    Ok(())
}

#[when(r#"deletion of card "{id}" is requested"#)]
fn deletion_requested(world: &mut BoardWorld, id: String) -> Result<(), eyre::Report> {
    let card_id = CardId::new(id);
    if let Some(service) = world.service.as_ref() {
        run_async(service.request_delete(&mut world.controller, &card_id))
            .wrap_err("request deletion through the service")?;
    } else {
        world
            .controller
            .request_delete(&world.store, &card_id)
            .wrap_err("request deletion")?;
    }
    Ok(())
}

#[when("the deletion is confirmed")]
fn deletion_confirmed(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let removed = match world.service.as_ref() {
        Some(service) => run_async(service.confirm_delete(&mut world.controller))
            .wrap_err("confirm deletion through the service")?,
        None => world.controller.confirm_delete(&mut world.store),
    };
    removed.ok_or_else(|| eyre::eyre!("no card was deleted"))?;
    Ok(())
}

#[when("the deletion is cancelled")]
fn deletion_cancelled(world: &mut BoardWorld) {
    world.controller.cancel_delete();
}

#[when(r#"task "{title}" is added to card "{id}""#)]
fn task_added(world: &mut BoardWorld, title: String, id: String) -> Result<(), eyre::Report> {
    let card_id = CardId::new(id);
    let task_id = world
        .store
        .add_task(&card_id, &title)
        .wrap_err("add checklist task")?;
    world.last_task = Some((card_id, task_id));
    Ok(())
}

#[when("the new task is toggled {times:usize} times")]
fn task_toggled(world: &mut BoardWorld, times: usize) -> Result<(), eyre::Report> {
    let (card_id, task_id) = world
        .last_task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing added task in scenario world"))?;
    for _ in 0..times {
        eyre::ensure!(
            world.store.toggle_task(&card_id, &task_id),
            "task {task_id} not found on card {card_id}"
        );
    }
    Ok(())
}
