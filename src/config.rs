//! Board configuration.
//!
//! A board is described by its columns, the status table that places
//! tickets in them, whether empty columns get a hidden seed task, and the
//! narration templates. Every field has a default, so an empty JSON object
//! yields the stock three-column board.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{
    domain::{BoardError, Column, ColumnId},
    services::{BoardStore, NarrationError, NarrationTemplates, Narrator},
};
use crate::helpdesk::domain::StatusMap;

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or has the wrong shape.
    #[error("failed to parse board configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// No columns are configured.
    #[error("board configuration has no columns")]
    NoColumns,

    /// Two columns share an identifier.
    #[error("column '{0}' is configured twice")]
    DuplicateColumn(ColumnId),

    /// A status rule names a column that is not configured.
    #[error("status rule references unknown column '{0}'")]
    UnknownStatusColumn(ColumnId),

    /// A column has no outbound status, or more than one.
    #[error("column '{column}' needs exactly one outbound status, found {found}")]
    OutboundStatus {
        /// Offending column.
        column: ColumnId,
        /// Number of rules naming the column.
        found: usize,
    },

    /// A narration template does not compile.
    #[error(transparent)]
    Narration(#[from] NarrationError),
}

/// Board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Columns in display order.
    pub columns: Vec<Column>,
    /// Ticket status table.
    pub statuses: StatusMap,
    /// Whether each column gets a hidden seed task on load.
    pub seed_placeholders: bool,
    /// Announcement templates.
    pub narration: NarrationTemplates,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: Column::defaults(),
            statuses: StatusMap::default(),
            seed_placeholders: true,
            narration: NarrationTemplates::default(),
        }
    }
}

impl BoardConfig {
    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed input and the errors of
    /// [`Self::validate`] for inconsistent settings.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the settings describe a usable board.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns.is_empty() {
            return Err(ConfigError::NoColumns);
        }
        let mut ids = HashSet::new();
        if let Some(duplicate) = self.columns.iter().find(|column| !ids.insert(column.id())) {
            return Err(ConfigError::DuplicateColumn(duplicate.id().clone()));
        }
        if let Some(rule) = self
            .statuses
            .rules()
            .iter()
            .find(|rule| !ids.contains(&rule.column))
        {
            return Err(ConfigError::UnknownStatusColumn(rule.column.clone()));
        }
        for column in &self.columns {
            let found = self
                .statuses
                .rules()
                .iter()
                .filter(|rule| rule.column == *column.id())
                .count();
            if found != 1 {
                return Err(ConfigError::OutboundStatus {
                    column: column.id().clone(),
                    found,
                });
            }
        }
        Narrator::new(self.narration.clone())?;
        Ok(())
    }

    /// Creates an empty store with the configured columns.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] for an invalid column set.
    pub fn store(&self) -> Result<BoardStore, BoardError> {
        BoardStore::new(self.columns.clone())
    }

    /// Creates a narrator from the configured templates.
    ///
    /// # Errors
    ///
    /// Returns [`NarrationError::InvalidTemplate`] for a template that does
    /// not compile.
    pub fn narrator(&self) -> Result<Narrator, NarrationError> {
        Narrator::new(self.narration.clone())
    }
}
