//! Engine configuration
//!
//! Configuration is stored as TOML. Every field is optional; missing fields
//! fall back to the defaults in [`types`].

pub mod global;
pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::graph::TraversalOptions;

pub use types::{EngineConfig, LoggingConfig, TraversalConfig, LOG_LEVELS};

impl EngineConfig {
    /// Per-call traversal options derived from this configuration
    pub fn traversal_options(&self) -> TraversalOptions {
        TraversalOptions {
            neighbor_order: self.traversal.neighbor_order,
            canonical_components: self.traversal.canonical_components,
        }
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.as_str();
        if !level.contains('=') && !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            crate::bail_invalid!("logging.level", level);
        }
        Ok(())
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
