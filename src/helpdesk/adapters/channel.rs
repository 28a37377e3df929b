//! Fire-and-forget delivery of sync intents over a tokio channel.
//!
//! The board side holds a [`ChannelSyncSink`] and never waits on the
//! helpdesk. A [`SyncWorker`] drains the channel on the runtime and pushes
//! each task; failures are logged and the board is not rolled back.

use std::sync::Arc;

use mockable::Clock;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use crate::board::ports::{SyncIntent, SyncIntentSink};
use crate::helpdesk::{
    ports::{SessionProvider, TicketStore, UserDirectory},
    services::BoardSyncService,
};

/// Sink that queues intents on an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelSyncSink {
    sender: UnboundedSender<SyncIntent>,
}

impl SyncIntentSink for ChannelSyncSink {
    fn emit(&self, intent: SyncIntent) {
        let task = intent.task.id().clone();
        if self.sender.send(intent).is_err() {
            warn!(%task, "sync worker stopped, dropping intent");
        }
    }
}

/// Creates a connected sink and receiver.
#[must_use]
pub fn sync_channel() -> (ChannelSyncSink, UnboundedReceiver<SyncIntent>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (ChannelSyncSink { sender }, receiver)
}

/// Pushes queued intents through a [`BoardSyncService`].
pub struct SyncWorker<T, U, S, C>
where
    T: TicketStore,
    U: UserDirectory,
    S: SessionProvider,
    C: Clock + Send + Sync,
{
    service: Arc<BoardSyncService<T, U, S, C>>,
    receiver: UnboundedReceiver<SyncIntent>,
}

impl<T, U, S, C> SyncWorker<T, U, S, C>
where
    T: TicketStore,
    U: UserDirectory,
    S: SessionProvider,
    C: Clock + Send + Sync,
{
    /// Creates a worker draining `receiver`.
    #[must_use]
    pub const fn new(
        service: Arc<BoardSyncService<T, U, S, C>>,
        receiver: UnboundedReceiver<SyncIntent>,
    ) -> Self {
        Self { service, receiver }
    }

    /// Runs until every sink is dropped.
    ///
    /// Returns the number of intents pushed successfully.
    pub async fn run(mut self) -> usize {
        let mut pushed = 0;
        while let Some(intent) = self.receiver.recv().await {
            let task = intent.task.id().clone();
            match self.service.push_task(&intent.task).await {
                Ok(()) => {
                    pushed += 1;
                    debug!(%task, reason = ?intent.reason, "synchronized task");
                }
                Err(error) => {
                    warn!(%task, reason = ?intent.reason, %error, "task synchronization failed");
                }
            }
        }
        pushed
    }
}
