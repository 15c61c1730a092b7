//! Settings loading functionality.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

impl EngineConfig {
    /// Loads engine settings from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the settings file (e.g., "./config/engine.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed settings on success, or an error if the file is
    /// missing or contains invalid YAML. Missing fields fall back to their
    /// defaults.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use worktime_engine::config::EngineConfig;
    ///
    /// let config = EngineConfig::load("./config/engine.yaml")?;
    /// # Ok::<(), worktime_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_repo_settings_file() {
        let config = EngineConfig::load("./config/engine.yaml").unwrap();
        assert_eq!(config.hours_per_day, 8);
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = EngineConfig::load("/nonexistent/engine.yaml");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("engine.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other.err()),
        }
    }
}
