//! Path configuration
//!
//! Stored as TOML:
//!
//! ```toml
//! backing = "immutable"   # or "mutable"
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{PathError, Result};
use crate::path::TraversalPath;

pub use types::{Backing, PathConfig};

impl PathConfig {
    /// Config selecting the given backing
    pub fn with_backing(backing: Backing) -> Self {
        PathConfig { backing }
    }

    /// An empty path using the configured backing
    pub fn new_path<T>(&self) -> TraversalPath<T> {
        TraversalPath::new(self.backing)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(backing = %config.backing, "loaded path config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| PathError::ConfigWrite {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Path as _;

    #[test]
    fn test_default_backing_is_immutable() {
        let config = PathConfig::default();
        assert_eq!(config.backing, Backing::Immutable);
    }

    #[test]
    fn test_from_toml_str() {
        let config = PathConfig::from_toml_str("backing = \"mutable\"").unwrap();
        assert_eq!(config.backing, Backing::Mutable);
    }

    #[test]
    fn test_from_toml_str_empty_uses_defaults() {
        let config = PathConfig::from_toml_str("").unwrap();
        assert_eq!(config, PathConfig::default());
    }

    #[test]
    fn test_from_toml_str_rejects_unknown_backing() {
        let err = PathConfig::from_toml_str("backing = \"linked\"").unwrap_err();
        assert_eq!(err.error_type(), "toml_error");
    }

    #[test]
    fn test_backing_from_str() {
        assert_eq!("mutable".parse::<Backing>().unwrap(), Backing::Mutable);
        assert_eq!(" Immutable ".parse::<Backing>().unwrap(), Backing::Immutable);

        let err = "linked".parse::<Backing>().unwrap_err();
        assert!(matches!(err, PathError::InvalidValue { .. }));
        assert!(err.to_string().contains("linked"));
    }

    #[test]
    fn test_backing_display_round_trips() {
        for backing in [Backing::Mutable, Backing::Immutable] {
            assert_eq!(backing.to_string().parse::<Backing>().unwrap(), backing);
        }
    }

    #[test]
    fn test_new_path_uses_backing() {
        let path = PathConfig::with_backing(Backing::Mutable).new_path::<u32>();
        assert_eq!(path.backing(), Backing::Mutable);
        assert!(path.is_empty());
    }
}
