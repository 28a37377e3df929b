//! Adapter implementations of the helpdesk ports.

pub mod channel;
pub mod memory;
