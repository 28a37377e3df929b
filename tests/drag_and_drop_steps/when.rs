//! When steps for drag-and-drop BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::when;
use ticketboard::board::domain::{ColumnId, Draggable, TaskId};

fn task(id: &str) -> Draggable {
    Draggable::task(&TaskId::new(id))
}

fn column(id: &str) -> Draggable {
    Draggable::column(&ColumnId::new(id))
}

#[when(r#"task "{id}" is picked up"#)]
fn task_picked_up(world: &mut BoardWorld, id: String) {
    world.last_report = Some(world.controller.pick_up(&mut world.store, &task(&id)));
}

#[when(r#"column "{id}" is picked up"#)]
fn column_picked_up(world: &mut BoardWorld, id: String) {
    world.last_report = Some(world.controller.pick_up(&mut world.store, &column(&id)));
}

#[when(r#"the drag moves over task "{id}""#)]
fn drag_over_task(world: &mut BoardWorld, id: String) {
    world.last_report = Some(world.controller.hover(&mut world.store, Some(&task(&id))));
}

#[when(r#"the drag moves over column "{id}""#)]
fn drag_over_column(world: &mut BoardWorld, id: String) {
    world.last_report = Some(world.controller.hover(&mut world.store, Some(&column(&id))));
}

#[when(r#"the drag is released over task "{id}""#)]
fn released_over_task(world: &mut BoardWorld, id: String) {
    world.last_report = Some(world.controller.release(&mut world.store, Some(&task(&id))));
}

#[when(r#"the drag is released over column "{id}""#)]
fn released_over_column(world: &mut BoardWorld, id: String) {
    world.last_report = Some(world.controller.release(&mut world.store, Some(&column(&id))));
}

#[when("the drag is released outside any target")]
fn released_outside(world: &mut BoardWorld) {
    world.last_report = Some(world.controller.release(&mut world.store, None));
}

#[when("the drag is cancelled")]
fn drag_cancelled(world: &mut BoardWorld) {
    world.last_report = Some(world.controller.cancel(&mut world.store));
}
