//! Integration tests for the feed and profile presenters.

use std::time::{Duration, Instant};

use bailanysta::data;
use bailanysta::domain::models::User;
use bailanysta::error::ServiceError;
use bailanysta::presenters::{FeedPresenter, ProfilePresenter};
use bailanysta::store::PostStore;
use uuid::Uuid;

const NO_DELAY: Duration = Duration::from_millis(0);

fn user(name: &str) -> User {
    User::new(name, name, format!("{name}@example.com"))
}

fn feed_for(store: &PostStore, user: &User) -> FeedPresenter {
    FeedPresenter::with_load_delay(store.clone(), user.clone(), NO_DELAY)
}

fn profile_for(store: &PostStore, user: &User) -> ProfilePresenter {
    ProfilePresenter::with_load_delay(store.clone(), user.clone(), NO_DELAY)
}

#[tokio::test]
async fn test_created_post_appears_in_feed_and_profile() {
    let store = PostStore::new();
    let alice = user("alice");
    let feed = feed_for(&store, &alice);
    let profile = profile_for(&store, &alice);

    let created = feed.create_post("hello feed").unwrap();

    let posts = feed.load_posts().await;
    assert_eq!(posts.first().map(|p| p.id), Some(created.id));
    assert_eq!(profile.load_posts().await.len(), 1);
}

#[tokio::test]
async fn test_blank_post_content_is_rejected() {
    let store = PostStore::new();
    let alice = user("alice");
    let feed = feed_for(&store, &alice);
    let profile = profile_for(&store, &alice);

    for presenter_result in [feed.create_post("   \n\t"), profile.create_post("")] {
        assert!(matches!(
            presenter_result,
            Err(ServiceError::InvalidInput(_))
        ));
    }
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_content_is_stored_untrimmed() {
    // Validation trims, storage does not: whitespace padding survives.
    let store = PostStore::new();
    let alice = user("alice");
    let feed = feed_for(&store, &alice);

    let created = feed.create_post("  padded  ").unwrap();
    assert_eq!(store.get(created.id).unwrap().content, "  padded  ");
}

#[tokio::test]
async fn test_like_toggles_through_the_presenter() {
    let store = PostStore::new();
    let alice = user("alice");
    let bob = user("bob");
    let alice_feed = feed_for(&store, &alice);
    let bob_feed = feed_for(&store, &bob);

    let created = alice_feed.create_post("like me").unwrap();

    let liked = bob_feed.like_post(created.id).unwrap();
    assert_eq!(liked.likes, 1);
    assert!(liked.is_liked_by(bob.id));
    assert_eq!(store.get(created.id).unwrap().likes, 1);

    let unliked = bob_feed.like_post(created.id).unwrap();
    assert_eq!(unliked.likes, 0);
    assert!(!unliked.is_liked_by(bob.id));
}

#[tokio::test]
async fn test_like_unknown_post_is_not_found() {
    let store = PostStore::new();
    let alice = user("alice");
    let feed = feed_for(&store, &alice);

    let result = feed.like_post(Uuid::new_v4());
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn test_comment_validation_and_append() {
    let store = PostStore::new();
    let alice = user("alice");
    let bob = user("bob");
    let alice_feed = feed_for(&store, &alice);
    let bob_feed = feed_for(&store, &bob);

    let created = alice_feed.create_post("comment on me").unwrap();

    assert!(matches!(
        bob_feed.add_comment(created.id, "   "),
        Err(ServiceError::InvalidInput(_))
    ));
    assert!(matches!(
        bob_feed.add_comment(Uuid::new_v4(), "orphan"),
        Err(ServiceError::NotFound(_))
    ));

    let commented = bob_feed.add_comment(created.id, "first!").unwrap();
    assert_eq!(commented.comments.len(), 1);
    assert_eq!(commented.comments[0].author.id, bob.id);
    assert_eq!(store.get(created.id).unwrap().comments.len(), 1);
}

#[tokio::test]
async fn test_profile_lists_only_own_posts_newest_first() {
    let store = PostStore::new();
    let a = user("a");
    let b = user("b");
    let a_profile = profile_for(&store, &a);
    let b_profile = profile_for(&store, &b);

    a_profile.create_post("a1").unwrap();
    a_profile.create_post("a2").unwrap();
    b_profile.create_post("b1").unwrap();
    a_profile.create_post("a3").unwrap();
    b_profile.create_post("b2").unwrap();

    let a_posts = a_profile.load_posts().await;
    assert_eq!(a_posts.len(), 3);
    assert!(a_posts.iter().all(|p| p.author.id == a.id));

    let b_posts = b_profile.posts();
    assert_eq!(b_posts.len(), 2);
}

#[tokio::test]
async fn test_delete_post_ignores_unknown_ids() {
    let store = PostStore::new();
    let alice = user("alice");
    let profile = profile_for(&store, &alice);

    let created = profile.create_post("short-lived").unwrap();
    profile.delete_post(created.id);
    assert!(store.is_empty());

    // Second delete and a random id: silent no-ops.
    profile.delete_post(created.id);
    profile.delete_post(Uuid::new_v4());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_edit_bio_preserves_identity_and_join_date() {
    let store = PostStore::new();
    let alice = user("alice");
    let profile = profile_for(&store, &alice);

    let updated = profile.edit_bio("new bio");

    assert_eq!(updated.id, alice.id);
    assert_eq!(updated.join_date, alice.join_date);
    assert_eq!(updated.username, alice.username);
    assert_eq!(updated.bio.as_deref(), Some("new bio"));
    assert_eq!(profile.current_user(), updated);
}

#[tokio::test]
async fn test_edit_bio_leaves_author_snapshots_untouched() {
    let store = PostStore::new();
    let users = data::seed(&store);
    let maksat = users[0].clone();
    let profile = profile_for(&store, &maksat);

    let bios_before: Vec<Option<String>> = profile
        .posts()
        .into_iter()
        .map(|p| p.author.bio)
        .collect();

    profile.edit_bio("совсем новая биография");

    // The live profile diverges from the historical snapshots.
    let bios_after: Vec<Option<String>> = profile
        .posts()
        .into_iter()
        .map(|p| p.author.bio)
        .collect();
    assert_eq!(bios_after, bios_before);
    assert_eq!(
        profile.current_user().bio.as_deref(),
        Some("совсем новая биография")
    );
}

#[tokio::test]
async fn test_load_posts_applies_configured_delay() {
    let store = PostStore::new();
    let alice = user("alice");
    let feed =
        FeedPresenter::with_load_delay(store.clone(), alice.clone(), Duration::from_millis(50));

    let started = Instant::now();
    feed.load_posts().await;
    assert!(started.elapsed() >= Duration::from_millis(50));
}
