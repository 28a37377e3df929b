//! Domain model for the Kanban board.
//!
//! Tasks and columns are plain records. Ordering lives in the position of a
//! record within its sequence, never in a field, so every reorder is a pure
//! sequence transformation computed by [`reorder`].

mod column;
mod drag;
mod error;
mod ids;
mod participants;
pub mod reorder;
mod task;
mod text;
mod user;
mod view;

pub use column::Column;
pub use drag::{DragEntity, DragKind, Draggable};
pub use error::BoardError;
pub use ids::{ColumnId, TaskId, UserId};
pub use participants::{
    Participant, ParticipantFilter, search_users, summarize_selection, unique_participants,
};
pub use reorder::Reorder;
pub use task::{Task, TaskEdit, TicketStatus};
pub use text::plain_text;
pub use user::{ParticipantRole, User};
pub use view::{BoardView, Position};
