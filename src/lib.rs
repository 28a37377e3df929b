//! Ticketboard: a Kanban board core that mirrors helpdesk tickets.
//!
//! This crate holds the board state, the drag-and-drop reorder engine, the
//! drag session state machine, and the accessibility narration that a
//! rendering layer needs to present helpdesk tickets as draggable cards
//! across status columns.
//!
//! # Architecture
//!
//! Ticketboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external collaborators
//! - **Adapters**: Concrete implementations of ports (in-memory, channels)
//!
//! # Modules
//!
//! - [`board`]: Tasks, columns, reorder engine, store, drag controller
//! - [`helpdesk`]: Ticket store, user directory, and session synchronization
//! - [`config`]: Board configuration loading and validation

pub mod board;
pub mod config;
pub mod helpdesk;
