//! Thin orchestration over the post store.
//!
//! Presenters hold a store handle plus the current user, expose derived
//! newest-first lists, and forward user intents to store operations. The
//! load methods simulate a fixed network-style delay purely for UI
//! perception - it is not a real I/O boundary and never fails.

mod feed;
mod profile;

pub use feed::{FeedPresenter, DEFAULT_FEED_LOAD_DELAY};
pub use profile::{ProfilePresenter, DEFAULT_PROFILE_LOAD_DELAY};
