//! Configuration loading for MargaNav

use serde::Deserialize;
use std::path::Path;

use crate::{MargaError, Result};

fn default_dim() -> usize {
    12
}

/// Episode configuration.
///
/// The maze dimension is fixed for the lifetime of an episode. The optional
/// seed makes the planner's tie-breaking reproducible; without it every run
/// draws from OS entropy.
#[derive(Clone, Debug, Deserialize)]
pub struct MazeConfig {
    /// Maze side length in cells (default: 12)
    #[serde(default = "default_dim")]
    pub dim: usize,

    /// RNG seed for reproducible tie-breaking (default: none)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            dim: default_dim(),
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn new(dim: usize) -> Self {
        Self { dim, seed: None }
    }

    /// Check the dimension supports a 2x2 center goal room.
    pub fn validate(&self) -> Result<()> {
        if self.dim < 4 {
            return Err(MargaError::Config(format!(
                "maze dimension {} is too small (minimum 4)",
                self.dim
            )));
        }
        if self.dim % 2 != 0 {
            return Err(MargaError::Config(format!(
                "maze dimension {} must be even for a centered goal room",
                self.dim
            )));
        }
        if self.dim > 256 {
            return Err(MargaError::Config(format!(
                "maze dimension {} exceeds the supported maximum of 256",
                self.dim
            )));
        }
        Ok(())
    }

    /// Load and validate a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: MazeConfig = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(MazeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_odd_and_tiny_dims() {
        assert!(MazeConfig::new(7).validate().is_err());
        assert!(MazeConfig::new(2).validate().is_err());
        assert!(MazeConfig::new(4).validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config: MazeConfig = toml::from_str("dim = 16\nseed = 9").unwrap();
        assert_eq!(config.dim, 16);
        assert_eq!(config.seed, Some(9));

        let config: MazeConfig = toml::from_str("").unwrap();
        assert_eq!(config.dim, 12);
        assert_eq!(config.seed, None);
    }
}
