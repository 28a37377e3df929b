//! Pure reorder engine for drag-over and drag-end events.
//!
//! Every function here reads a snapshot and returns the next sequence, or
//! `None` when the event leaves the board unchanged. Nothing is mutated in
//! place, so a move is either applied in full by the caller or not at all.
//!
//! Four interactions are recognised:
//!
//! 1. Column over column, on drag end only: move the dragged column to the
//!    index of the target column.
//! 2. Task over task in the same column, on every hover change: move the
//!    dragged task to the index of the hovered task.
//! 3. Task over task in another column: adopt the hovered task's column and
//!    move to the index just before the hovered task's index.
//! 4. Task over an empty column area: adopt the column and keep the global
//!    position.

use super::{BoardView, Column, ColumnId, DragKind, Draggable, Task, TaskId};
use tracing::trace;

/// Result of a reorder computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reorder {
    /// New global task sequence.
    Tasks(Vec<Task>),
    /// New column sequence.
    Columns(Vec<Column>),
}

/// Moves the element at `from` to index `to`, shifting the elements in
/// between by one.
///
/// `to` is clamped to the last index. Out-of-range `from` leaves the
/// sequence untouched, as does `from == to`.
pub fn move_to_index<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() {
        return;
    }
    let target = to.min(items.len().saturating_sub(1));
    if from == target {
        return;
    }
    let element = items.remove(from);
    items.insert(target, element);
}

/// Moves column `source` to the index currently held by `target`.
///
/// Returns `None` when the ids are equal or either id is unknown.
#[must_use]
pub fn reorder_columns(columns: &[Column], source: &ColumnId, target: &ColumnId) -> Option<Vec<Column>> {
    if source == target {
        return None;
    }
    let source_index = columns.iter().position(|column| column.id() == source)?;
    let target_index = columns.iter().position(|column| column.id() == target)?;

    let mut next = columns.to_vec();
    move_to_index(&mut next, source_index, target_index);
    Some(next)
}

/// Repositions task `active` relative to hovered task `over`.
///
/// Within one column the dragged task takes the hovered task's index. Across
/// columns it adopts the hovered task's column and lands at one index
/// earlier, clamped at zero.
#[must_use]
pub fn reorder_task_over_task(tasks: &[Task], active: &TaskId, over: &TaskId) -> Option<Vec<Task>> {
    if active == over {
        return None;
    }
    let active_index = tasks.iter().position(|task| task.id() == active)?;
    let over_index = tasks.iter().position(|task| task.id() == over)?;
    let over_column = tasks.get(over_index)?.column_id().clone();

    let mut next = tasks.to_vec();
    let dragged = next.get_mut(active_index)?;
    if *dragged.column_id() == over_column {
        move_to_index(&mut next, active_index, over_index);
    } else {
        dragged.reassign(over_column);
        move_to_index(&mut next, active_index, over_index.saturating_sub(1));
    }
    Some(next)
}

/// Moves task `active` into `column` without changing its global position.
///
/// Returns `None` when the task is unknown, the column is not on the board,
/// or the task already belongs to the column.
#[must_use]
pub fn reorder_task_over_column(
    tasks: &[Task],
    columns: &[Column],
    active: &TaskId,
    column: &ColumnId,
) -> Option<Vec<Task>> {
    if !columns.iter().any(|candidate| candidate.id() == column) {
        return None;
    }
    let active_index = tasks.iter().position(|task| task.id() == active)?;
    if tasks.get(active_index)?.column_id() == column {
        return None;
    }

    let mut next = tasks.to_vec();
    next.get_mut(active_index)?.reassign(column.clone());
    Some(next)
}

/// Computes the live reorder for a hover-target change.
///
/// Only dragged tasks reorder while hovering; column order is recomputed on
/// drag end.
#[must_use]
pub fn plan_drag_over(board: BoardView<'_>, active: &Draggable, over: Option<&Draggable>) -> Option<Reorder> {
    let over = over?;
    let (active_kind, over_kind) = recognised_kinds(active, over)?;
    match (active_kind, over_kind) {
        (DragKind::Task, DragKind::Task) => reorder_task_over_task(
            board.tasks(),
            &TaskId::new(active.id()),
            &TaskId::new(over.id()),
        )
        .map(Reorder::Tasks),
        (DragKind::Task, DragKind::Column) => reorder_task_over_column(
            board.tasks(),
            board.columns(),
            &TaskId::new(active.id()),
            &ColumnId::new(over.id()),
        )
        .map(Reorder::Tasks),
        (DragKind::Column, _) => None,
    }
}

/// Computes the reorder applied when a drag is released over `over`.
///
/// A release without a target is a cancellation. Tasks were already placed
/// by hover events, so only column drops produce a reorder here.
#[must_use]
pub fn plan_drag_end(board: BoardView<'_>, active: &Draggable, over: Option<&Draggable>) -> Option<Reorder> {
    let over = over?;
    let (active_kind, over_kind) = recognised_kinds(active, over)?;
    match (active_kind, over_kind) {
        (DragKind::Column, DragKind::Column) => reorder_columns(
            board.columns(),
            &ColumnId::new(active.id()),
            &ColumnId::new(over.id()),
        )
        .map(Reorder::Columns),
        _ => None,
    }
}

/// Applies the self-hover and metadata guards shared by both events.
fn recognised_kinds(active: &Draggable, over: &Draggable) -> Option<(DragKind, DragKind)> {
    if active.id() == over.id() {
        return None;
    }
    let (Some(active_kind), Some(over_kind)) = (active.kind(), over.kind()) else {
        trace!(
            active = active.id(),
            over = over.id(),
            "ignoring drag event without recognised metadata"
        );
        return None;
    };
    Some((active_kind, over_kind))
}
