//! Change events broadcast by the post store.

use uuid::Uuid;

/// Published after every effective store mutation.
///
/// Events carry only the affected post id; no delta is specified, so
/// subscribers re-derive their projections from store state rather than
/// patching incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    PostAdded(Uuid),
    PostUpdated(Uuid),
    PostDeleted(Uuid),
}

impl StoreEvent {
    /// Id of the post this event refers to.
    pub fn post_id(&self) -> Uuid {
        match self {
            StoreEvent::PostAdded(id) | StoreEvent::PostUpdated(id) | StoreEvent::PostDeleted(id) => {
                *id
            }
        }
    }
}
