//! Per-invocation limits for the folder-tree operations
//!
//! `max_depth` is the only recognised option. Callers usually embed
//! `TreeLimits` in their own configuration; missing keys fall back to the
//! defaults.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::rules::DEFAULT_MAX_DEPTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeLimits {
    /// Deepest allowed nesting, counting roots as depth 1
    pub max_depth: usize,
}

impl Default for TreeLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl TreeLimits {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Parse limits from a TOML fragment such as `max_depth = 6`
    ///
    /// # Errors
    /// * `InvalidConfig` - If the fragment is not valid TOML, has the wrong
    ///   value type, or names an unknown key
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FolderTreeError;

    #[test]
    fn test_default_depth_is_ten() {
        assert_eq!(TreeLimits::default().max_depth, 10);
    }

    #[test]
    fn test_from_toml() {
        let limits = TreeLimits::from_toml_str("max_depth = 4").unwrap();
        assert_eq!(limits, TreeLimits::new(4));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(TreeLimits::from_toml_str("").unwrap(), TreeLimits::default());
    }

    #[test]
    fn test_bad_toml_is_invalid_config() {
        assert!(matches!(
            TreeLimits::from_toml_str("max_depth = \"deep\""),
            Err(FolderTreeError::InvalidConfig { .. })
        ));
        assert!(matches!(
            TreeLimits::from_toml_str("max_width = 3"),
            Err(FolderTreeError::InvalidConfig { .. })
        ));
    }
}
