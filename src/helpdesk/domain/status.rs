//! Mapping between helpdesk ticket statuses and board columns.

use crate::board::domain::{ColumnId, TicketStatus};
use serde::{Deserialize, Serialize};

/// Statuses shown in one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRule {
    /// Column the statuses map to.
    pub column: ColumnId,
    /// Incoming statuses that place a ticket in the column.
    pub statuses: Vec<TicketStatus>,
    /// Status written back when a task lands in the column.
    pub outbound: TicketStatus,
}

impl StatusRule {
    /// Creates a rule.
    #[must_use]
    pub fn new(
        column: impl Into<ColumnId>,
        statuses: impl IntoIterator<Item = TicketStatus>,
        outbound: TicketStatus,
    ) -> Self {
        Self {
            column: column.into(),
            statuses: statuses.into_iter().collect(),
            outbound,
        }
    }
}

/// Many-to-one table from ticket status to column.
///
/// Statuses not covered by any rule fall into the first rule's column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusMap {
    rules: Vec<StatusRule>,
}

impl Default for StatusMap {
    fn default() -> Self {
        Self::new(vec![
            StatusRule::new(
                ColumnId::TODO,
                [TicketStatus::NEW, TicketStatus::ASSIGNED],
                TicketStatus::ASSIGNED,
            ),
            StatusRule::new(
                ColumnId::IN_PROGRESS,
                [TicketStatus::PLANNED, TicketStatus::PENDING],
                TicketStatus::PLANNED,
            ),
            StatusRule::new(
                ColumnId::DONE,
                [TicketStatus::SOLVED, TicketStatus::CLOSED],
                TicketStatus::CLOSED,
            ),
        ])
    }
}

impl StatusMap {
    /// Creates a table from rules in priority order.
    #[must_use]
    pub const fn new(rules: Vec<StatusRule>) -> Self {
        Self { rules }
    }

    /// Returns the rules.
    #[must_use]
    pub fn rules(&self) -> &[StatusRule] {
        &self.rules
    }

    /// Returns the column for an incoming status.
    #[must_use]
    pub fn column_for(&self, status: TicketStatus) -> Option<&ColumnId> {
        self.rules
            .iter()
            .find(|rule| rule.statuses.contains(&status))
            .or_else(|| self.rules.first())
            .map(|rule| &rule.column)
    }

    /// Returns the status written back for tasks in `column`.
    #[must_use]
    pub fn status_for(&self, column: &ColumnId) -> Option<TicketStatus> {
        self.rules
            .iter()
            .find(|rule| rule.column == *column)
            .map(|rule| rule.outbound)
    }
}
