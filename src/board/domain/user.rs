//! Users and the roles they hold on a ticket.

use super::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user record from the helpdesk user directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// Directory identifier.
    pub id: UserId,
    /// Login name.
    pub name: String,
    /// Family name, empty when unknown.
    #[serde(default)]
    pub realname: String,
    /// Given name, empty when unknown.
    #[serde(default)]
    pub firstname: String,
}

impl User {
    /// Creates a user with only a login name.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            realname: String::new(),
            firstname: String::new(),
        }
    }

    /// Sets the given and family names.
    #[must_use]
    pub fn with_full_name(mut self, firstname: impl Into<String>, realname: impl Into<String>) -> Self {
        self.firstname = firstname.into();
        self.realname = realname.into();
        self
    }

    /// Returns the character shown on the user's avatar.
    #[must_use]
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

/// Role a user holds on a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    /// The user asked for the work.
    Requester,
    /// The user is assigned to the work.
    Assignee,
    /// The user follows the work.
    Observer,
}

impl ParticipantRole {
    /// All roles in helpdesk relation-code order.
    pub const ALL: [Self; 3] = [Self::Requester, Self::Assignee, Self::Observer];

    /// All roles in the order their sets are merged for display.
    pub const DISPLAY_ORDER: [Self; 3] = [Self::Requester, Self::Observer, Self::Assignee];

    /// Returns the helpdesk relation code for the role.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Requester => 1,
            Self::Assignee => 2,
            Self::Observer => 3,
        }
    }

    /// Parses a helpdesk relation code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Requester),
            2 => Some(Self::Assignee),
            3 => Some(Self::Observer),
            _ => None,
        }
    }

    /// Returns the canonical lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Requester => "requester",
            Self::Assignee => "assignee",
            Self::Observer => "observer",
        }
    }
}

impl fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
