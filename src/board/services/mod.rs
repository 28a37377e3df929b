//! Board services: state store, drag session controller, and narration.

mod drag;
mod narrator;
mod store;

pub use drag::{DragController, DragReport, DragSession, DragState};
pub use narrator::{NarrationError, NarrationTemplates, Narrator};
pub use store::{BoardEvent, BoardStore, SubscriptionId};
