//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::output::Output;

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StoreConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            StoreConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<StoreConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match StoreConfig::load(config_path.to_str()?) {
                        Ok(config) => {
                            debug!(path = %config_path.display(), "loaded storefront config");
                            return Some(config);
                        }
                        Err(e) => {
                            let error = format!("{:#}", e);
                            warn!(path = %config_path.display(), %error, "skipping unreadable config");
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        debug!("no storefront config found, using defaults");
        None
    }
}
