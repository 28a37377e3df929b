//! End-to-end flows over the in-memory helpdesk adapters.
//!
//! A board is configured, loaded from the ticket store, rearranged through
//! the drag controller, and the resulting intents are delivered to the
//! helpdesk by the channel worker.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use mockable::DefaultClock;
use ticketboard::{
    board::{
        domain::{
            ColumnId, Draggable, ParticipantRole, TaskEdit, TaskId, TicketStatus, User, UserId,
        },
        ports::{SyncIntent, SyncIntentSink, SyncReason},
        services::DragController,
    },
    config::BoardConfig,
    helpdesk::{
        adapters::{
            channel::{SyncWorker, sync_channel},
            memory::{InMemorySessionProvider, InMemoryTicketStore, InMemoryUserDirectory},
        },
        domain::{ParticipantLink, SessionToken, TicketRecord},
        ports::SessionProvider,
        services::BoardSyncService,
    },
};

const ADA: UserId = UserId::new(1);
const GRACE: UserId = UserId::new(2);

fn ticket_store() -> InMemoryTicketStore {
    let store = InMemoryTicketStore::new();
    for ticket in [
        TicketRecord::new("11", "Reset password", "", TicketStatus::NEW)
            .with_participant(ADA, ParticipantRole::Requester),
        TicketRecord::new("12", "Replace monitor", "", TicketStatus::ASSIGNED),
        TicketRecord::new("13", "Audit licences", "", TicketStatus::PLANNED),
    ] {
        store.insert_ticket(ticket).expect("tickets are unique");
    }
    store
}

#[tokio::test(flavor = "multi_thread")]
async fn dragging_a_ticket_across_columns_updates_the_helpdesk() {
    let config = BoardConfig::from_json(r#"{ "seed_placeholders": true }"#)
        .expect("configuration is valid");
    let tickets = Arc::new(ticket_store());
    let users = Arc::new(InMemoryUserDirectory::new([
        User::new(ADA, "ada"),
        User::new(GRACE, "grace"),
    ]));
    let session = Arc::new(InMemorySessionProvider::signed_in(SessionToken::new("s")));
    let service = Arc::new(
        BoardSyncService::new(
            Arc::clone(&tickets),
            users,
            session,
            Arc::new(DefaultClock),
        )
        .with_status_map(config.statuses.clone())
        .with_placeholders(config.seed_placeholders),
    );

    let mut store = config.store().expect("columns are valid");
    let loaded = service.refresh(&mut store).await.expect("tickets load");
    assert_eq!(loaded, 6);

    let (sink, receiver) = sync_channel();
    let worker = tokio::spawn(SyncWorker::new(Arc::clone(&service), receiver).run());
    let sink: Arc<dyn SyncIntentSink> = Arc::new(sink);
    let mut controller =
        DragController::new(config.narrator().expect("templates compile")).with_sync(Arc::clone(&sink));

    let dragged = Draggable::task(&TaskId::new("11"));
    let target = Draggable::task(&TaskId::new("13"));
    let pickup = controller.pick_up(&mut store, &dragged);
    assert_eq!(
        pickup.announcement.as_deref(),
        Some("Picked up Task Reset password at position: 2 of 3 in column To do")
    );
    assert!(controller.hover(&mut store, Some(&target)).changed);
    controller.release(&mut store, Some(&target));

    let moved = store.task(&TaskId::new("11")).expect("task is on the board");
    assert_eq!(moved.column_id().as_str(), ColumnId::IN_PROGRESS);

    let edit = TaskEdit::new(TaskId::new("11"))
        .with_participants(ParticipantRole::Assignee, [User::new(GRACE, "grace")]);
    let edited = store.update_task(edit).expect("task exists");
    sink.emit(SyncIntent::new(edited, SyncReason::Edited));

    drop(controller);
    drop(sink);
    let pushed = worker.await.expect("worker completes");
    assert_eq!(pushed, 2);

    let ticket = tickets
        .ticket(&TaskId::new("11"))
        .expect("store is readable")
        .expect("ticket exists");
    assert_eq!(ticket.status, TicketStatus::PLANNED);
    assert_eq!(
        ticket.participants,
        [
            ParticipantLink::new(ADA, ParticipantRole::Requester),
            ParticipantLink::new(GRACE, ParticipantRole::Assignee),
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn expired_session_leaves_the_board_untouched() {
    let tickets = Arc::new(ticket_store().requiring_session(SessionToken::new("fresh")));
    let session = Arc::new(InMemorySessionProvider::signed_in(SessionToken::new("old")));
    let service = BoardSyncService::new(
        tickets,
        Arc::new(InMemoryUserDirectory::default()),
        Arc::clone(&session),
        Arc::new(DefaultClock),
    );
    let mut store = BoardConfig::default().store().expect("columns are valid");

    let result = service.refresh(&mut store).await;

    assert!(result.is_err());
    assert!(store.tasks().is_empty());
    assert!(session.token().is_none());
}
