//! Then steps for drag-and-drop BDD scenarios.

use super::world::BoardWorld;
use eyre::eyre;
use rstest_bdd_macros::then;
use ticketboard::board::domain::TaskId;

fn split_list(list: &str) -> Vec<&str> {
    list.split(',').map(str::trim).collect()
}

#[then(r#"the task order is "{order}""#)]
fn task_order(world: &BoardWorld, order: String) -> Result<(), eyre::Report> {
    let actual: Vec<&str> = world
        .store
        .tasks()
        .iter()
        .map(|task| task.id().as_str())
        .collect();
    if actual != split_list(&order) {
        return Err(eyre!("expected task order {order}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the column order is "{order}""#)]
fn column_order(world: &BoardWorld, order: String) -> Result<(), eyre::Report> {
    let actual: Vec<&str> = world
        .store
        .columns()
        .iter()
        .map(|column| column.id().as_str())
        .collect();
    if actual != split_list(&order) {
        return Err(eyre!("expected column order {order}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"task "{id}" is in column "{column}""#)]
fn task_in_column(world: &BoardWorld, id: String, column: String) -> Result<(), eyre::Report> {
    let task = world
        .store
        .task(&TaskId::new(id.as_str()))
        .ok_or_else(|| eyre!("task {id} is not on the board"))?;
    if task.column_id().as_str() != column {
        return Err(eyre!(
            "expected task {id} in column {column}, found {}",
            task.column_id()
        ));
    }
    Ok(())
}

#[then(r#"the announcement is "{text}""#)]
fn announcement(world: &BoardWorld, text: String) -> Result<(), eyre::Report> {
    let actual = world
        .last_report
        .as_ref()
        .and_then(|report| report.announcement.as_deref());
    if actual != Some(text.as_str()) {
        return Err(eyre!("expected announcement {text:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("no drag is in progress")]
fn no_drag(world: &BoardWorld) -> Result<(), eyre::Report> {
    if world.controller.is_active() {
        return Err(eyre!("controller is still active"));
    }
    if world.store.active_task().is_some() || world.store.active_column().is_some() {
        return Err(eyre!("store still records an active drag entity"));
    }
    Ok(())
}

#[then(r#"{count:usize} sync intent was emitted for task "{id}""#)]
fn intents_for_task(world: &BoardWorld, count: usize, id: String) -> Result<(), eyre::Report> {
    let emitted = world
        .sink
        .intents()
        .iter()
        .filter(|intent| intent.task.id().as_str() == id)
        .count();
    if emitted != count {
        return Err(eyre!("expected {count} intents for {id}, found {emitted}"));
    }
    Ok(())
}

#[then("no sync intent was emitted")]
fn no_intents(world: &BoardWorld) -> Result<(), eyre::Report> {
    let emitted = world.sink.intents().len();
    if emitted != 0 {
        return Err(eyre!("expected no intents, found {emitted}"));
    }
    Ok(())
}
