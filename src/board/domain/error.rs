//! Error types for board construction and task edits.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Errors returned while building or loading board state.
///
/// Reorder operations never produce these; an unrecognised move is a no-op.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The board was given an empty column set.
    #[error("board must define at least one column")]
    NoColumns,

    /// Two columns share the same identifier.
    #[error("duplicate column identifier: {0}")]
    DuplicateColumn(ColumnId),

    /// Two tasks share the same identifier.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// A task points at a column that is not on the board.
    #[error("task {task} references unknown column {column}")]
    UnknownColumn {
        /// Task holding the dangling reference.
        task: TaskId,
        /// Column identifier that was not found.
        column: ColumnId,
    },

    /// The task was not found on the board.
    #[error("task not found: {0}")]
    UnknownTask(TaskId),
}
