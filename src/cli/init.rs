//! Init command implementation

use std::path::PathBuf;

use anyhow::{Result, bail};
use tracing::info;

use brainiac::config::Config;

/// Default configuration content for brainiac init
pub const DEFAULT_CONFIG: &str = r#"# Brainiac Configuration
# ======================
#
# All settings are optional; the defaults below match built-in behavior.

# Where the state blob (state.json) and the login session live.
# Defaults to the directory this config file is in.
#data_dir = "/home/me/.brainiac"

# User the CLI acts as when nobody is logged in and no --user flag is
# given. Without this, the guest identity is used.
#default_user = "amrita"

# Restrict learning-path listings to one grade band.
#grade_filter = "6-7"
"#;

/// Write a starter config file
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = config_path.unwrap_or_else(Config::global_config_path);

    if path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, DEFAULT_CONFIG)?;

    info!(path = %path.display(), "wrote starter config");
    println!("Created {}", path.display());
    Ok(())
}
