//! Solver configuration

use std::path::Path;

pub use serde::{Deserialize, Serialize};

/// Iteration count used when none is configured.
pub const DEFAULT_ITERATIONS: u32 = 5;
/// Fraction of closing speed returned on impact.
pub const DEFAULT_RESTITUTION: f64 = 0.908;

/// Tuning for [`crate::world::CollisionSystem`]. Missing TOML keys take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Resolution passes over all pairs per frame
    pub iterations: u32,
    /// Restitution applied to the velocity impulse
    pub restitution: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            restitution: DEFAULT_RESTITUTION,
        }
    }
}

impl SolverConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.extension().and_then(|e| e.to_str()) != Some("toml") {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Serialize configuration to TOML text
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.iterations, 5);
        assert!((config.restitution - 0.908).abs() < 1e-12);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SolverConfig::from_toml_str("iterations = 12\n").unwrap();
        assert_eq!(config.iterations, 12);
        assert!((config.restitution - DEFAULT_RESTITUTION).abs() < 1e-12);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SolverConfig {
            iterations: 3,
            restitution: 0.5,
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(SolverConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_bad_input() {
        assert!(matches!(
            SolverConfig::from_toml_str("iterations = \"many\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SolverConfig::load("solver.ron"),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            SolverConfig::load("definitely/not/here.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
