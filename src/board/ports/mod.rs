//! Port contracts for the board.
//!
//! Ports define infrastructure-agnostic interfaces the board hands work to.

pub mod sync_intent;

pub use sync_intent::{SyncIntent, SyncIntentSink, SyncReason};
