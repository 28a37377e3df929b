//! Synchronization between the board and the helpdesk ticket system.
//!
//! Tickets are loaded into board tasks and dropped or edited tasks are pushed
//! back. Local board state is always updated first; a failed push is logged
//! and never rolled back. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
