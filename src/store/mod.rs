//! In-memory post store.
//!
//! Single authoritative collection of all posts, with change notification.
//! The store is an explicit instance - construct it once at startup and
//! pass clones of the handle to every consumer. All operations are total:
//! delete/update of an unknown id is a no-op, never an error, and content
//! is not validated at this layer (that is a presentation concern).

mod events;

pub use events::StoreEvent;

use crate::domain::models::Post;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

/// Capacity of the change-event channel. A subscriber that falls further
/// behind than this misses events and should re-derive from a fresh read.
const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
struct Entry {
    /// Store-assigned insertion sequence. The stable tie-break for posts
    /// sharing a timestamp; survives `update`.
    seq: u64,
    post: Post,
}

#[derive(Debug, Default)]
struct State {
    entries: Vec<Entry>,
    next_seq: u64,
}

#[derive(Debug)]
struct Inner {
    state: RwLock<State>,
    events: broadcast::Sender<StoreEvent>,
}

/// Cheaply cloneable handle to the shared post collection.
#[derive(Debug, Clone)]
pub struct PostStore {
    inner: Arc<Inner>,
}

impl PostStore {
    /// Create an empty store.
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(State::default()),
                events,
            }),
        }
    }

    /// Insert a post at the front of the collection.
    ///
    /// Newest-first ordering is a store-level convention held for callers
    /// that skip the explicit sort in [`PostStore::all_sorted`].
    pub fn add(&self, post: Post) {
        let id = post.id;
        {
            let mut state = self.inner.state.write();
            let seq = state.next_seq;
            state.next_seq += 1;
            state.entries.insert(0, Entry { seq, post });
        }
        debug!(post_id = %id, "post added");
        self.publish(StoreEvent::PostAdded(id));
    }

    /// Remove the post with the given id, comments included.
    ///
    /// Returns whether a post was removed. Idempotent: a missing id is a
    /// no-op and publishes no event.
    pub fn delete(&self, post_id: Uuid) -> bool {
        let removed = {
            let mut state = self.inner.state.write();
            let before = state.entries.len();
            state.entries.retain(|entry| entry.post.id != post_id);
            state.entries.len() != before
        };
        if removed {
            debug!(post_id = %post_id, "post deleted");
            self.publish(StoreEvent::PostDeleted(post_id));
        }
        removed
    }

    /// Replace the stored post with the same id wholesale, keeping its
    /// position and insertion sequence.
    ///
    /// Returns whether a post was replaced; a missing id is a no-op.
    pub fn update(&self, post: Post) -> bool {
        let id = post.id;
        let replaced = {
            let mut state = self.inner.state.write();
            match state.entries.iter_mut().find(|entry| entry.post.id == id) {
                Some(entry) => {
                    entry.post = post;
                    true
                }
                None => false,
            }
        };
        if replaced {
            debug!(post_id = %id, "post updated");
            self.publish(StoreEvent::PostUpdated(id));
        }
        replaced
    }

    /// Snapshot of a single post by id.
    pub fn get(&self, post_id: Uuid) -> Option<Post> {
        let state = self.inner.state.read();
        state
            .entries
            .iter()
            .find(|entry| entry.post.id == post_id)
            .map(|entry| entry.post.clone())
    }

    /// Snapshot of all posts, newest first.
    ///
    /// Ordered by `(timestamp desc, insertion sequence desc)`: posts sharing
    /// a timestamp come back newest-inserted first, deterministically.
    pub fn all_sorted(&self) -> Vec<Post> {
        let state = self.inner.state.read();
        let mut entries: Vec<&Entry> = state.entries.iter().collect();
        entries.sort_by(|a, b| {
            b.post
                .timestamp
                .cmp(&a.post.timestamp)
                .then_with(|| b.seq.cmp(&a.seq))
        });
        entries.into_iter().map(|entry| entry.post.clone()).collect()
    }

    /// Snapshot of the posts authored by `user_id`, newest first.
    pub fn posts_by_author(&self, user_id: Uuid) -> Vec<Post> {
        self.all_sorted()
            .into_iter()
            .filter(|post| post.author.id == user_id)
            .collect()
    }

    /// Number of stored posts.
    pub fn len(&self) -> usize {
        self.inner.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.state.read().entries.is_empty()
    }

    /// Subscribe to change events. Dropping the receiver unsubscribes.
    ///
    /// Events are published synchronously after a mutation commits and the
    /// write lock is released, so a subscriber reading the store in response
    /// always observes the fully applied mutation.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.inner.events.subscribe()
    }

    fn publish(&self, event: StoreEvent) {
        // Send only fails when nobody is subscribed, which is fine.
        let _ = self.inner.events.send(event);
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}
