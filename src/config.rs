/// Configuration for the demo client
///
/// Loads configuration from environment variables. Every field has a
/// default, so a bare environment works out of the box.
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application environment (development, staging, prod)
    pub env: String,
    /// Simulated feed load latency in milliseconds
    pub feed_load_delay_ms: u64,
    /// Simulated profile load latency in milliseconds
    pub profile_load_delay_ms: u64,
    /// Path of the persisted preferences file
    pub prefs_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            feed_load_delay_ms: env_u64("FEED_LOAD_DELAY_MS", 1000),
            profile_load_delay_ms: env_u64("PROFILE_LOAD_DELAY_MS", 500),
            prefs_path: std::env::var("PREFS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("bailanysta_prefs.json")),
        }
    }

    pub fn feed_load_delay(&self) -> Duration {
        Duration::from_millis(self.feed_load_delay_ms)
    }

    pub fn profile_load_delay(&self) -> Duration {
        Duration::from_millis(self.profile_load_delay_ms)
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
