//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::error::PathError;

/// Storage strategy for new paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backing {
    /// Contiguous vector, O(n) fork
    Mutable,
    /// Persistent list sharing its prefix between forks, O(1) fork
    #[default]
    Immutable,
}

impl Backing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backing::Mutable => "mutable",
            Backing::Immutable => "immutable",
        }
    }
}

impl std::fmt::Display for Backing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Backing {
    type Err = PathError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mutable" => Ok(Backing::Mutable),
            "immutable" => Ok(Backing::Immutable),
            other => crate::bail_invalid!("backing (expected: mutable, immutable)", other),
        }
    }
}

/// Path configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathConfig {
    /// Backing used for paths created from this config
    #[serde(default)]
    pub backing: Backing,
}
