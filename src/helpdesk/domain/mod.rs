//! Domain model for helpdesk synchronization.

mod session;
mod status;
mod ticket;

pub use session::SessionToken;
pub use status::{StatusMap, StatusRule};
pub use ticket::{ParticipantLink, TicketRecord, TicketUpdate};
