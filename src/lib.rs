//! Bailanysta core: the in-process data layer for a single-device demo
//! social client.
//!
//! The [`store::PostStore`] is the single source of truth for all posts.
//! The feed and profile presenters are thin read-projections over it: they
//! hold no state of their own and re-derive their lists from the store on
//! every read. Mutations flow the other way — presenters forward user
//! intents (create, like, comment, delete, bio edit) to the store, which
//! broadcasts a change event after each effective mutation.
//!
//! There is no network and no database; the only persisted state is the
//! onboarding-seen flag in [`prefs`].

pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod prefs;
pub mod presenters;
pub mod store;

pub use config::Config;
pub use domain::models::{Comment, Post, User};
pub use error::{ServiceError, ServiceResult};
pub use presenters::{FeedPresenter, ProfilePresenter};
pub use store::{PostStore, StoreEvent};
