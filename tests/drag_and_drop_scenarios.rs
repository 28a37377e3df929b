//! Behaviour tests for drag-and-drop reordering.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod drag_and_drop_steps;

use drag_and_drop_steps::world::{BoardWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/drag_and_drop.feature",
    name = "Dragging a task over a task in another column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn task_over_task_in_other_column(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/drag_and_drop.feature",
    name = "Dropping a column onto the first column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn column_onto_first_column(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/drag_and_drop.feature",
    name = "Dragging a task onto an empty column area"
)]
#[tokio::test(flavor = "multi_thread")]
async fn task_onto_empty_column_area(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/drag_and_drop.feature",
    name = "Cancelling a drag keeps live hover moves"
)]
#[tokio::test(flavor = "multi_thread")]
async fn cancel_keeps_hover_moves(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/drag_and_drop.feature",
    name = "Releasing a drag outside any target changes nothing"
)]
#[tokio::test(flavor = "multi_thread")]
async fn release_outside_target(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/drag_and_drop.feature",
    name = "Hovering a task over itself is ignored"
)]
#[tokio::test(flavor = "multi_thread")]
async fn self_hover_ignored(world: BoardWorld) {
    let _ = world;
}
