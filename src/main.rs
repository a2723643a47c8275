use anyhow::{Context, Result};
use tracing::{debug, info};

use bailanysta::config::Config;
use bailanysta::data;
use bailanysta::prefs::Preferences;
use bailanysta::presenters::{FeedPresenter, ProfilePresenter};
use bailanysta::store::PostStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    info!(env = %config.env, "🔧 Starting bailanysta demo client");

    let mut prefs =
        Preferences::load(&config.prefs_path).context("failed to load preferences")?;
    if !prefs.has_seen_onboarding {
        info!("first launch, onboarding shown");
        prefs.has_seen_onboarding = true;
        prefs
            .save(&config.prefs_path)
            .context("failed to save preferences")?;
    }

    let store = PostStore::new();
    let users = data::seed(&store);
    info!(users = users.len(), posts = store.len(), "sample data loaded");

    let current_user = users
        .first()
        .cloned()
        .context("sample data has no users")?;

    // Watch store changes the way a UI would: each event triggers a full
    // re-derive of the projection.
    let mut events = store.subscribe();
    let watched = store.clone();
    let watcher = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            debug!(?event, feed_len = watched.len(), "store changed");
        }
    });

    let feed = FeedPresenter::with_load_delay(
        store.clone(),
        current_user.clone(),
        config.feed_load_delay(),
    );
    let profile = ProfilePresenter::with_load_delay(
        store.clone(),
        current_user.clone(),
        config.profile_load_delay(),
    );

    let posts = feed.load_posts().await;
    info!(count = posts.len(), "feed loaded");

    let created = feed.create_post("Первый пост из нового клиента! 🚀")?;
    let liked = feed.like_post(created.id)?;
    info!(post_id = %liked.id, likes = liked.likes, "liked the new post");

    let commented = feed.add_comment(created.id, "Комментарий для проверки ленты ✨")?;
    info!(post_id = %commented.id, comments = commented.comments.len(), "comment added");

    let mine = profile.load_posts().await;
    info!(
        count = mine.len(),
        user = %profile.current_user().username,
        "profile posts loaded"
    );

    let updated = profile.edit_bio("Обновленная биография ✈️");
    info!(bio = ?updated.bio, "profile updated");

    profile.delete_post(created.id);
    info!(posts = store.len(), "demo post removed");

    watcher.abort();
    Ok(())
}
