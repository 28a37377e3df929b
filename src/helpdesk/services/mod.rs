//! Application services for helpdesk synchronization.

mod sync;

pub use sync::{BoardSyncService, SyncError, SyncResult};
