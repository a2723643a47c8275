//! Profile presenter: one author's posts, plus profile editing.

use crate::domain::models::{Post, User};
use crate::error::{ServiceError, ServiceResult};
use crate::store::PostStore;
use parking_lot::RwLock;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

/// Simulated profile load latency of the original client.
pub const DEFAULT_PROFILE_LOAD_DELAY: Duration = Duration::from_millis(500);

pub struct ProfilePresenter {
    store: PostStore,
    current_user: RwLock<User>,
    load_delay: Duration,
}

impl ProfilePresenter {
    pub fn new(store: PostStore, current_user: User) -> Self {
        Self::with_load_delay(store, current_user, DEFAULT_PROFILE_LOAD_DELAY)
    }

    pub fn with_load_delay(store: PostStore, current_user: User, load_delay: Duration) -> Self {
        Self {
            store,
            current_user: RwLock::new(current_user),
            load_delay,
        }
    }

    /// Snapshot of the current profile.
    pub fn current_user(&self) -> User {
        self.current_user.read().clone()
    }

    /// Simulated refresh: sleep the configured delay, then re-derive the
    /// current user's posts from the store.
    pub async fn load_posts(&self) -> Vec<Post> {
        tokio::time::sleep(self.load_delay).await;
        let posts = self.posts();
        debug!(count = posts.len(), "profile posts loaded");
        posts
    }

    /// Always-current derived list of the current user's posts, newest
    /// first.
    pub fn posts(&self) -> Vec<Post> {
        let user_id = self.current_user.read().id;
        self.store.posts_by_author(user_id)
    }

    /// Create a post authored by the current user.
    ///
    /// Same presentation-boundary validation as the feed: content that
    /// trims to empty is rejected.
    pub fn create_post(&self, content: &str) -> ServiceResult<Post> {
        if content.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "post content must not be empty".to_string(),
            ));
        }
        let author = self.current_user();
        let post = Post::new(&author, content);
        self.store.add(post.clone());
        info!(post_id = %post.id, author = %author.username, "post created");
        Ok(post)
    }

    /// Delete one of the user's posts. A missing id is silently ignored,
    /// matching the store's permissive contract.
    pub fn delete_post(&self, post_id: Uuid) {
        if !self.store.delete(post_id) {
            debug!(post_id = %post_id, "delete of unknown post ignored");
        }
    }

    /// Replace the profile bio and return the updated profile.
    ///
    /// Only the live profile changes; author snapshots embedded in
    /// existing posts and comments are untouched, so older posts may show
    /// the bio as it was when they were written.
    pub fn edit_bio(&self, bio: &str) -> User {
        let mut user = self.current_user.write();
        let updated = user.with_bio(bio);
        *user = updated.clone();
        info!(user = %updated.username, "profile bio updated");
        updated
    }
}
