//! Participant helpers shared by avatars, pickers and filters.

use super::{ParticipantRole, Task, User, UserId};
use std::collections::HashSet;

/// Selections longer than this are summarised instead of listed.
const SUMMARY_LIMIT: usize = 3;

/// A user shown on a task card together with the role they are shown as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participant<'a> {
    /// The user.
    pub user: &'a User,
    /// Role that introduced the user first.
    pub role: ParticipantRole,
}

/// Returns the union of a task's requesters, observers and assignees keyed
/// by user id.
///
/// Order follows [`ParticipantRole::DISPLAY_ORDER`] and the order within each
/// set; the first role a user is seen in wins.
#[must_use]
pub fn unique_participants(task: &Task) -> Vec<Participant<'_>> {
    let mut seen = HashSet::new();
    ParticipantRole::DISPLAY_ORDER
        .into_iter()
        .flat_map(|role| {
            task.participants(role)
                .iter()
                .map(move |user| Participant { user, role })
        })
        .filter(|participant| seen.insert(participant.user.id))
        .collect()
}

/// Returns the users whose login name contains `query`.
///
/// Matching ignores case and whitespace on both sides. An empty query
/// matches everyone.
#[must_use]
pub fn search_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let needle = normalise(query);
    users
        .iter()
        .filter(|user| needle.is_empty() || normalise(&user.name).contains(&needle))
        .collect()
}

/// Renders a picker selection as a short string.
///
/// Up to three names are joined with commas. Longer selections show the
/// first name and how many others follow.
#[must_use]
pub fn summarize_selection(users: &[User]) -> String {
    match users {
        [first, rest @ ..] if users.len() > SUMMARY_LIMIT => {
            format!("{}, and {} others", first.name, rest.len())
        }
        _ => users
            .iter()
            .map(|user| user.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn normalise(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Filters tasks down to those involving a set of selected users.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantFilter {
    selected: HashSet<UserId>,
}

impl ParticipantFilter {
    /// Creates a filter over the given user ids.
    #[must_use]
    pub fn new(selected: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            selected: selected.into_iter().collect(),
        }
    }

    /// Returns `true` when no user is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns `true` when `task` should stay on screen.
    ///
    /// Hidden seed tasks always match so every column keeps a drop target.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.is_empty()
            || task.is_placeholder()
            || unique_participants(task)
                .iter()
                .any(|participant| self.selected.contains(&participant.user.id))
    }

    /// Returns the matching tasks in their original order.
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> impl Iterator<Item = &'a Task> {
        tasks.iter().filter(|task| self.matches(task))
    }
}
