//! Unit tests for the board store.

use std::sync::{Arc, Mutex};

use eyre::{Result, ensure};
use rstest::rstest;

use super::fixtures::{column_ids, ids, store, task};
use crate::board::{
    domain::{
        BoardError, Column, ColumnId, DragEntity, ParticipantRole, TaskEdit, TaskId, User, UserId,
    },
    services::{BoardEvent, BoardStore},
};

fn record_events(store: &mut BoardStore) -> Arc<Mutex<Vec<BoardEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    store.subscribe(move |event| {
        if let Ok(mut recorded) = sink.lock() {
            recorded.push(event.clone());
        }
    });
    events
}

fn recorded(events: &Arc<Mutex<Vec<BoardEvent>>>) -> Vec<BoardEvent> {
    events.lock().map(|guard| guard.clone()).unwrap_or_default()
}

#[rstest]
fn new_rejects_empty_column_set() {
    let result = BoardStore::new(Vec::new());
    assert!(matches!(result, Err(BoardError::NoColumns)));
}

#[rstest]
fn new_rejects_duplicate_column_ids() {
    let result = BoardStore::new(vec![Column::new("todo", "To do"), Column::new("todo", "Again")]);
    assert!(matches!(result, Err(BoardError::DuplicateColumn(id)) if id.as_str() == "todo"));
}

#[rstest]
fn load_rejects_tasks_in_unknown_columns(mut store: BoardStore) {
    let result = store.load(vec![task("Z", "archive", "Zulu")]);

    assert!(matches!(result, Err(BoardError::UnknownColumn { .. })));
    assert_eq!(ids(store.tasks()), ["A", "B", "C"]);
}

#[rstest]
fn load_rejects_duplicate_task_ids(mut store: BoardStore) {
    let result = store.load(vec![
        task("A", ColumnId::TODO, "Alpha"),
        task("A", ColumnId::DONE, "Alpha again"),
    ]);

    assert!(matches!(result, Err(BoardError::DuplicateTask(id)) if id.as_str() == "A"));
}

#[rstest]
fn load_clears_active_task_that_disappeared(mut store: BoardStore) -> Result<()> {
    ensure!(store.set_active_drag_entity(&DragEntity::Task(TaskId::new("A"))));
    store.load(vec![task("B", ColumnId::TODO, "Bravo")])?;

    ensure!(store.active_task().is_none());
    Ok(())
}

#[rstest]
fn move_column_commits_and_notifies(mut store: BoardStore) {
    let events = record_events(&mut store);

    assert!(store.move_column(&ColumnId::new("done"), &ColumnId::new("todo")));

    assert_eq!(column_ids(store.columns()), ["done", "todo", "in-progress"]);
    assert_eq!(recorded(&events), [BoardEvent::ColumnsReordered]);
}

#[rstest]
fn move_task_over_task_reassigns_and_notifies(mut store: BoardStore) {
    let events = record_events(&mut store);

    assert!(store.move_task(&TaskId::new("A"), "C", false));

    assert_eq!(ids(store.tasks()), ["B", "A", "C"]);
    let moved = store.task(&TaskId::new("A")).map(|task| task.column_id().as_str());
    assert_eq!(moved, Some(ColumnId::IN_PROGRESS));
    assert_eq!(recorded(&events), [BoardEvent::TasksReordered]);
}

#[rstest]
fn move_task_over_column_keeps_position(mut store: BoardStore) {
    assert!(store.move_task(&TaskId::new("B"), ColumnId::DONE, true));

    assert_eq!(ids(store.tasks()), ["A", "B", "C"]);
    let moved = store.task(&TaskId::new("B")).map(|task| task.column_id().as_str());
    assert_eq!(moved, Some(ColumnId::DONE));
}

#[rstest]
#[case("A", "A", false)]
#[case("A", "missing", false)]
#[case("missing", "A", false)]
#[case("A", "archive", true)]
fn no_op_moves_do_not_notify(
    mut store: BoardStore,
    #[case] active: &str,
    #[case] over: &str,
    #[case] over_is_column: bool,
) {
    let events = record_events(&mut store);

    assert!(!store.move_task(&TaskId::new(active), over, over_is_column));

    assert_eq!(ids(store.tasks()), ["A", "B", "C"]);
    assert!(recorded(&events).is_empty());
}

#[rstest]
fn self_column_move_is_a_no_op(mut store: BoardStore) {
    let events = record_events(&mut store);

    assert!(!store.move_column(&ColumnId::new("todo"), &ColumnId::new("todo")));
    assert!(recorded(&events).is_empty());
}

#[rstest]
fn commit_rejects_reorders_that_lose_tasks(mut store: BoardStore) {
    let shorter = store.tasks().iter().take(2).cloned().collect();

    assert!(!store.commit(crate::board::domain::Reorder::Tasks(shorter)));
    assert_eq!(store.tasks().len(), 3);
}

#[rstest]
fn delete_task_is_idempotent(mut store: BoardStore) {
    let events = record_events(&mut store);
    let id = TaskId::new("B");

    assert!(store.delete_task(&id));
    assert!(!store.delete_task(&id));

    assert_eq!(ids(store.tasks()), ["A", "C"]);
    assert_eq!(recorded(&events), [BoardEvent::TaskDeleted(id)]);
}

#[rstest]
fn active_drag_entity_tracks_task_and_column(mut store: BoardStore) {
    assert!(store.set_active_drag_entity(&DragEntity::Task(TaskId::new("C"))));
    assert!(store.set_active_drag_entity(&DragEntity::Column(ColumnId::new("done"))));
    assert!(!store.set_active_drag_entity(&DragEntity::Task(TaskId::new("missing"))));

    assert_eq!(store.active_task().map(|task| task.id().as_str()), Some("C"));
    assert_eq!(
        store.active_column().map(|column| column.id().as_str()),
        Some("done")
    );

    store.clear_active_drag_entity();
    assert!(store.active_task().is_none());
    assert!(store.active_column().is_none());
}

#[rstest]
fn clearing_idle_drag_state_does_not_notify(mut store: BoardStore) {
    let events = record_events(&mut store);
    store.clear_active_drag_entity();
    assert!(recorded(&events).is_empty());
}

#[rstest]
fn update_task_replaces_text_and_participants_only(mut store: BoardStore) -> Result<()> {
    let events = record_events(&mut store);
    let ada = User::new(UserId::new(7), "ada");
    let edit = TaskEdit::new(TaskId::new("C"))
        .with_name("Charlie, revised")
        .with_description("<p>Now with details</p>")
        .with_participants(ParticipantRole::Assignee, [ada.clone()]);

    let updated = store.update_task(edit)?;

    ensure!(updated.name() == "Charlie, revised");
    ensure!(updated.participants(ParticipantRole::Assignee) == [ada]);
    ensure!(updated.column_id().as_str() == ColumnId::IN_PROGRESS);
    ensure!(ids(store.tasks()) == ["A", "B", "C"]);
    ensure!(recorded(&events) == [BoardEvent::TaskUpdated(TaskId::new("C"))]);
    Ok(())
}

#[rstest]
fn update_task_rejects_unknown_task(mut store: BoardStore) {
    let result = store.update_task(TaskEdit::new(TaskId::new("missing")).with_name("ghost"));
    assert!(matches!(result, Err(BoardError::UnknownTask(_))));
}

#[rstest]
fn unsubscribed_callbacks_stop_receiving_events(mut store: BoardStore) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let id = store.subscribe(move |event| {
        if let Ok(mut recorded) = sink.lock() {
            recorded.push(event.clone());
        }
    });

    assert!(store.delete_task(&TaskId::new("A")));
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    assert!(store.delete_task(&TaskId::new("B")));

    assert_eq!(recorded(&events), [BoardEvent::TaskDeleted(TaskId::new("A"))]);
}
