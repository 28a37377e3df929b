//! Kanban board state and drag-and-drop handling.
//!
//! The board keeps a single ordered task sequence and a single ordered column
//! sequence. A column's rendered tasks are the subsequence of tasks whose
//! column id matches it. All reordering goes through the pure functions in
//! [`domain::reorder`] and is committed by [`services::BoardStore`]. The
//! module follows hexagonal architecture:
//!
//! - Domain types and the reorder engine in [`domain`]
//! - Port contracts in [`ports`]
//! - Store, drag controller and narrator in [`services`]

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
