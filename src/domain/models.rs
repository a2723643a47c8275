//! Domain entities: users, posts, and comments.
//!
//! Posts and comments embed a value snapshot of their author taken at
//! creation time, not a live reference. This is deliberate: a later bio
//! edit changes the live profile only, never historical posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// User entity - a profile in the demo client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub join_date: DateTime<Utc>,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    pub profile_image_name: Option<String>,
}

impl User {
    /// Create a new user with a fresh id and the current time as join date.
    pub fn new(
        username: impl Into<String>,
        display_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            display_name: display_name.into(),
            email: email.into(),
            join_date: Utc::now(),
            bio: None,
            profile_image_url: None,
            profile_image_name: None,
        }
    }

    /// Return a copy with the bio replaced.
    ///
    /// Every other field is preserved verbatim, in particular `id` and
    /// `join_date` - a bio edit must never look like a re-registration.
    pub fn with_bio(&self, bio: impl Into<String>) -> Self {
        Self {
            bio: Some(bio.into()),
            ..self.clone()
        }
    }
}

/// Post entity - a user-authored content item with likes and comments.
///
/// Invariant: `likes == liked_by.len()` for every post reachable through
/// the store. [`Post::toggle_like`] maintains it on both transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    /// Author snapshot taken at creation time.
    pub author: User,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub likes: usize,
    /// Ids of the users that currently like this post. Unique membership.
    pub liked_by: HashSet<Uuid>,
    /// Append-only; comments are owned by the post and die with it.
    pub comments: Vec<Comment>,
    pub image_url: Option<String>,
}

impl Post {
    /// Create a new post authored by `author`, timestamped now, with no
    /// likes and no comments.
    pub fn new(author: &User, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: author.clone(),
            content: content.into(),
            timestamp: Utc::now(),
            likes: 0,
            liked_by: HashSet::new(),
            comments: Vec::new(),
            image_url: None,
        }
    }

    /// Whether `user_id` currently likes this post.
    pub fn is_liked_by(&self, user_id: Uuid) -> bool {
        self.liked_by.contains(&user_id)
    }

    /// Toggle the like state for `user_id`.
    ///
    /// Pure with respect to the store: the caller persists the mutated post
    /// via `PostStore::update`. The decrement saturates at zero so an
    /// externally corrupted count can never underflow.
    pub fn toggle_like(&mut self, user_id: Uuid) {
        if self.liked_by.remove(&user_id) {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.liked_by.insert(user_id);
            self.likes += 1;
        }
    }

    /// Append a comment by `author` and return it.
    ///
    /// The caller persists the mutated post via `PostStore::update`.
    pub fn add_comment(&mut self, author: &User, content: impl Into<String>) -> Comment {
        let comment = Comment::new(author, content);
        self.comments.push(comment.clone());
        comment
    }
}

/// Comment entity - immutable once created, never deleted independently of
/// its post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    /// Author snapshot taken at creation time.
    pub author: User,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: &User, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: author.clone(),
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}
