//! Engine configuration for namecat
//!
//! Configuration is read from a TOML file (`namecat.toml` by default). Every
//! key is optional; missing keys fall back to the built-in scoring policy.
//!
//! ```toml
//! [similarity]
//! threshold = 60
//!
//! [tiers.category]
//! exact = 70
//! sibling = 40
//! parent_child = 30
//! cousin = 10
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

pub use types::{EngineConfig, SimilarityConfig, Taxonomy, TierConfig, DEFAULT_THRESHOLD};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "namecat.toml";

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;
        debug!(path = %path.display(), threshold = config.similarity.threshold, "config_loaded");
        Ok(config)
    }

    /// Load `path` when given, else `namecat.toml` under `dir` if present,
    /// else the defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}
