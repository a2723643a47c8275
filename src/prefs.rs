//! Persisted user preferences.
//!
//! The only state that survives a restart: a single flag recording whether
//! the onboarding carousel has been seen. Stored as a small JSON file; a
//! missing file means first launch.

use crate::error::ServiceResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub has_seen_onboarding: bool,
}

impl Preferences {
    /// Load preferences from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> ServiceResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no preferences file, using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write preferences to `path`, replacing any previous content.
    pub fn save(&self, path: &Path) -> ServiceResult<()> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        debug!(path = %path.display(), "preferences saved");
        Ok(())
    }
}
