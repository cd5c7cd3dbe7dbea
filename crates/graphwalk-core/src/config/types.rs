//! Configuration type definitions

use crate::graph::NeighborOrder;
use serde::{Deserialize, Serialize};

/// Log levels accepted in `[logging] level`
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Traversal defaults
    #[serde(default)]
    pub traversal: TraversalConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults applied to every traversal call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Adjacency scan order: "insertion" or "ascending"
    #[serde(default)]
    pub neighbor_order: NeighborOrder,

    /// Sort component members and order components by smallest member
    #[serde(default = "default_canonical_components")]
    pub canonical_components: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level for the graphwalk targets, or a full filter directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            neighbor_order: NeighborOrder::default(),
            canonical_components: default_canonical_components(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_canonical_components() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}
