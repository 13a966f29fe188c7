//! Configuration loading and management

mod io;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure (`~/.brainiac/config.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where the state blob and session file live.
    /// Defaults to the config directory itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// User the CLI acts as when nobody is logged in and no --user flag
    /// is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user: Option<String>,

    /// Restrict learning-path listings to one grade band (e.g. "6-7")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_filter: Option<String>,
}

impl Config {
    /// Resolve the effective data directory
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(Self::global_config_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.data_dir.is_none());
        assert!(config.default_user.is_none());
    }

    #[test]
    fn parses_full_config() {
        let config: Config = toml::from_str(
            r#"
            data_dir = "/tmp/brainiac"
            default_user = "amrita"
            grade_filter = "6-7"
            "#,
        )
        .unwrap();
        assert_eq!(config.data_dir.as_deref().unwrap().to_str(), Some("/tmp/brainiac"));
        assert_eq!(config.grade_filter.as_deref(), Some("6-7"));
    }
}
