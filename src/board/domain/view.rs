//! Read-only lookups over a board snapshot.

use super::{Column, ColumnId, Task, TaskId};

/// One-based position of an entity within its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// One-based index.
    pub index: usize,
    /// Number of entities in the container.
    pub total: usize,
}

/// Borrowed snapshot of the task and column sequences.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    tasks: &'a [Task],
    columns: &'a [Column],
}

impl<'a> BoardView<'a> {
    /// Creates a view over the given sequences.
    #[must_use]
    pub const fn new(tasks: &'a [Task], columns: &'a [Column]) -> Self {
        Self { tasks, columns }
    }

    /// Returns the global task sequence.
    #[must_use]
    pub const fn tasks(&self) -> &'a [Task] {
        self.tasks
    }

    /// Returns the column sequence.
    #[must_use]
    pub const fn columns(&self) -> &'a [Column] {
        self.columns
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&'a Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Finds a column by identifier.
    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&'a Column> {
        self.columns.iter().find(|column| column.id() == id)
    }

    /// Returns the index of a task in the global sequence.
    #[must_use]
    pub fn task_index(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    /// Returns the index of a column in the column sequence.
    #[must_use]
    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| column.id() == id)
    }

    /// Returns the tasks rendered in `column`, in sequence order.
    pub fn tasks_in_column(&self, column: &ColumnId) -> impl Iterator<Item = &'a Task> {
        self.tasks
            .iter()
            .filter(move |task| task.column_id() == column)
    }

    /// Returns the position of a task among the tasks of `column`.
    ///
    /// Hidden seed tasks occupy a slot like any other task.
    #[must_use]
    pub fn task_position(&self, task: &TaskId, column: &ColumnId) -> Option<Position> {
        let members: Vec<&Task> = self.tasks_in_column(column).collect();
        let offset = members.iter().position(|candidate| candidate.id() == task)?;
        Some(Position {
            index: offset + 1,
            total: members.len(),
        })
    }

    /// Returns the position of a column in the column sequence.
    #[must_use]
    pub fn column_position(&self, column: &ColumnId) -> Option<Position> {
        let offset = self.column_index(column)?;
        Some(Position {
            index: offset + 1,
            total: self.columns.len(),
        })
    }
}
