//! In-memory integration tests for card lifecycle and drag reordering.

use std::sync::Arc;

use super::helpers::{TestStore, form, ids, lane, store};
use cardwall::board::{
    domain::{BoardError, CardId, DropGesture, LaneSlot, ReorderOutcome, Stage, lanes},
    services::{LifecycleController, SubmitOutcome},
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
fn cards_created_from_a_lane_land_at_the_end_of_that_lane(mut store: TestStore) {
    let mut controller = LifecycleController::new(Arc::new(DefaultClock));
    controller.open_new(&store, Some(Stage::Todo));
    if let Some(open) = controller.form_mut() {
        open.title = "Marketing Campaign".to_owned();
        open.description = "Q1 digital push".to_owned();
    }

    let outcome = controller.submit(&mut store).expect("submit should succeed");

    assert_eq!(
        outcome,
        Some(SubmitOutcome::Created(CardId::new("card-1")))
    );
    assert_eq!(lane(&store, Stage::Todo), ["2", "5", "card-1"]);
    assert_eq!(store.len(), 6);
}

#[rstest]
fn lanes_cover_the_board_in_canonical_order(store: TestStore) {
    let derived = lanes(store.board());
    let stages: Vec<Stage> = derived.iter().map(|derived_lane| derived_lane.stage()).collect();
    let total: usize = derived.iter().map(|derived_lane| derived_lane.len()).sum();

    assert_eq!(stages, Stage::ALL);
    assert_eq!(total, store.len());
    assert_eq!(lane(&store, Stage::InProgress), ["1", "3"]);
    assert_eq!(lane(&store, Stage::Planning), ["4"]);
}

#[rstest]
fn dragging_between_interleaved_lanes_uses_lane_positions(mut store: TestStore) {
    let gesture = DropGesture::new(
        CardId::new("5"),
        LaneSlot::new(Stage::Todo, 1),
        Some(LaneSlot::new(Stage::InProgress, 1)),
    );

    let outcome = store.reorder(&gesture).expect("drop should succeed");

    assert!(matches!(outcome, ReorderOutcome::Moved { .. }));
    assert_eq!(lane(&store, Stage::InProgress), ["1", "5", "3"]);
    assert_eq!(lane(&store, Stage::Todo), ["2"]);
    assert_eq!(ids(store.list()), ["1", "2", "5", "3", "4"]);
}

#[rstest]
fn repeated_drags_keep_every_card_exactly_once(mut store: TestStore) {
    let moves = [
        ("1", (Stage::InProgress, 0), (Stage::Completed, 0)),
        ("4", (Stage::Planning, 0), (Stage::Completed, 1)),
        ("2", (Stage::Todo, 0), (Stage::Completed, 0)),
        ("3", (Stage::InProgress, 0), (Stage::Todo, 1)),
    ];

    for (id, from, to) in moves {
        store
            .reorder(&DropGesture::new(
                CardId::new(id),
                LaneSlot::new(from.0, from.1),
                Some(LaneSlot::new(to.0, to.1)),
            ))
            .expect("drop should succeed");
    }

    let mut all = ids(store.list());
    all.sort_unstable();
    assert_eq!(all, ["1", "2", "3", "4", "5"]);
    assert_eq!(lane(&store, Stage::Completed), ["2", "1", "4"]);
    assert_eq!(lane(&store, Stage::Todo), ["5", "3"]);
    assert!(lane(&store, Stage::InProgress).is_empty());
}

#[rstest]
fn confirmed_delete_removes_card_and_closes_its_detail(mut store: TestStore) {
    let mut controller = LifecycleController::new(Arc::new(DefaultClock));
    let id = CardId::new("3");
    store.open_detail(&id).expect("card exists");

    controller.request_delete(&store, &id).expect("card exists");
    assert!(store.detail().is_some());
    let removed = controller.confirm_delete(&mut store);

    assert!(removed.is_some());
    assert!(store.detail().is_none());
    assert_eq!(ids(store.list()), ["1", "2", "4", "5"]);
}

#[rstest]
fn editing_a_missing_card_reports_not_found(mut store: TestStore) {
    let result = store.update(&CardId::new("99"), &form("Ghost", "todo"));

    assert_eq!(result, Err(BoardError::CardNotFound(CardId::new("99"))));
}
