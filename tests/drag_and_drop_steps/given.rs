//! Given steps for drag-and-drop BDD scenarios.

use super::world::BoardWorld;
use eyre::{WrapErr, eyre};
use rstest_bdd_macros::given;
use ticketboard::board::domain::{ColumnId, Task, TaskId, TicketStatus};

#[given(r#"the default board with tasks "{tasks}""#)]
fn default_board_with_tasks(world: &mut BoardWorld, tasks: String) -> Result<(), eyre::Report> {
    let parsed = tasks
        .split(',')
        .map(|entry| {
            let (id, column) = entry
                .trim()
                .split_once(':')
                .ok_or_else(|| eyre!("task entry '{entry}' is not id:column"))?;
            Ok(Task::new(TaskId::new(id), ColumnId::new(column), TicketStatus::NEW).with_name(id))
        })
        .collect::<Result<Vec<_>, eyre::Report>>()?;
    world
        .store
        .load(parsed)
        .wrap_err("load scenario tasks")?;
    Ok(())
}
