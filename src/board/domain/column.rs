//! Column records.

use super::ColumnId;
use serde::{Deserialize, Serialize};

/// A named bucket of tasks.
///
/// Display order is the position of the column in the board's column
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    title: String,
}

impl Column {
    /// Creates a column.
    #[must_use]
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Returns the three predefined columns in display order.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(ColumnId::TODO, "To do"),
            Self::new(ColumnId::IN_PROGRESS, "In progress"),
            Self::new(ColumnId::DONE, "Done"),
        ]
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the display label.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}
