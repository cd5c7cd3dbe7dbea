//! Per-user configuration (stored in ~/.config/graphwalk/config.toml)

use std::path::PathBuf;

use crate::config::EngineConfig;
use crate::error::{GraphError, Result};

const CONFIG_DIR: &str = "graphwalk";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHWALK_CONFIG_DIR";

/// Location of the per-user config file
pub fn config_path() -> Result<PathBuf> {
    // Allow environment variable override for testing
    let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        PathBuf::from(env_dir)
    } else {
        dirs::config_dir()
            .ok_or_else(|| GraphError::Other("unable to determine config directory".to_string()))?
            .join(CONFIG_DIR)
    };

    Ok(config_dir.join(CONFIG_FILE))
}

/// Load the per-user config, or defaults if the file does not exist
pub fn load_global() -> Result<EngineConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(EngineConfig::default());
    }
    EngineConfig::load(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NeighborOrder;
    use tempfile::tempdir;

    // Only test that touches GRAPHWALK_CONFIG_DIR
    #[test]
    fn test_load_global_from_env_dir() {
        let dir = tempdir().unwrap();
        std::env::set_var(CONFIG_DIR_ENV_VAR, dir.path());

        assert_eq!(load_global().unwrap(), EngineConfig::default());

        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[traversal]\nneighbor_order = \"ascending\"\n",
        )
        .unwrap();
        let loaded = load_global().unwrap();
        assert_eq!(loaded.traversal.neighbor_order, NeighborOrder::Ascending);

        std::env::remove_var(CONFIG_DIR_ENV_VAR);
    }
}
