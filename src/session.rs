//! Identity session: which learner the CLI acts as.
//!
//! A tiny JSON file next to the state blob. No credentials live here;
//! absence of a session means the guest identity.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Identity used when nobody is logged in
pub const GUEST_USER: &str = "guest";

/// The current login session
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Session {
    /// Session file location inside a data directory
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("session.json")
    }

    /// Load the session, defaulting to logged-out on any problem
    pub fn load(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        let content =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize session")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write session to {}", path.display()))?;
        Ok(())
    }

    /// The acting user id, falling back to guest
    pub fn current_user(&self) -> &str {
        self.user_id.as_deref().unwrap_or(GUEST_USER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_to_guest() {
        assert_eq!(Session::default().current_user(), GUEST_USER);
    }

    #[test]
    fn roundtrip() {
        let dir = tempdir().unwrap();
        let path = Session::path(dir.path());

        let session = Session {
            user_id: Some("amrita".into()),
        };
        session.save(&path).unwrap();

        assert_eq!(Session::load(&path).current_user(), "amrita");
    }

    #[test]
    fn missing_file_is_logged_out() {
        let dir = tempdir().unwrap();
        let session = Session::load(&Session::path(dir.path()));
        assert!(session.user_id.is_none());
    }
}
