//! Feed presenter: all posts, newest first.

use crate::domain::models::{Post, User};
use crate::error::{ServiceError, ServiceResult};
use crate::store::PostStore;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

/// Simulated feed load latency of the original client.
pub const DEFAULT_FEED_LOAD_DELAY: Duration = Duration::from_millis(1000);

pub struct FeedPresenter {
    store: PostStore,
    current_user: User,
    load_delay: Duration,
}

impl FeedPresenter {
    pub fn new(store: PostStore, current_user: User) -> Self {
        Self::with_load_delay(store, current_user, DEFAULT_FEED_LOAD_DELAY)
    }

    pub fn with_load_delay(store: PostStore, current_user: User, load_delay: Duration) -> Self {
        Self {
            store,
            current_user,
            load_delay,
        }
    }

    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    /// Simulated refresh: sleep the configured delay, then re-derive the
    /// full feed from the store.
    pub async fn load_posts(&self) -> Vec<Post> {
        tokio::time::sleep(self.load_delay).await;
        let posts = self.store.all_sorted();
        debug!(count = posts.len(), "feed loaded");
        posts
    }

    /// Always-current derived feed, no simulated delay.
    pub fn posts(&self) -> Vec<Post> {
        self.store.all_sorted()
    }

    /// Create a post authored by the current user.
    ///
    /// Content that trims to empty is rejected here, at the presentation
    /// boundary; the store itself accepts anything.
    pub fn create_post(&self, content: &str) -> ServiceResult<Post> {
        if content.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "post content must not be empty".to_string(),
            ));
        }
        let post = Post::new(&self.current_user, content);
        self.store.add(post.clone());
        info!(post_id = %post.id, author = %self.current_user.username, "post created");
        Ok(post)
    }

    /// Toggle the current user's like on a post and persist the result.
    pub fn like_post(&self, post_id: Uuid) -> ServiceResult<Post> {
        let mut post = self
            .store
            .get(post_id)
            .ok_or_else(|| ServiceError::NotFound(format!("post {post_id}")))?;
        post.toggle_like(self.current_user.id);
        self.store.update(post.clone());
        debug!(post_id = %post_id, likes = post.likes, "like toggled");
        Ok(post)
    }

    /// Append a comment by the current user to a post and persist it.
    pub fn add_comment(&self, post_id: Uuid, content: &str) -> ServiceResult<Post> {
        if content.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "comment content must not be empty".to_string(),
            ));
        }
        let mut post = self
            .store
            .get(post_id)
            .ok_or_else(|| ServiceError::NotFound(format!("post {post_id}")))?;
        post.add_comment(&self.current_user, content);
        self.store.update(post.clone());
        debug!(post_id = %post_id, comments = post.comments.len(), "comment added");
        Ok(post)
    }
}
