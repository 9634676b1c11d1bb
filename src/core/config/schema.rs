//! core::config::schema
//!
//! Configuration schema types.
//!
//! The same schema is used for the user-level file and the project file.
//! Every field is optional; unset fields fall through to the next scope
//! and finally to built-in defaults.
//!
//! # Validation
//!
//! Config values are validated after parsing (e.g., the default root must
//! be a valid node id, leader widths must be positive).

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::NodeId;

/// Contents of one configuration file.
///
/// # Example
///
/// ```toml
/// root = "ens"
///
/// [outline]
/// margin = 3
/// min_dots = 3
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Default root node for `outline` when `--root` is omitted
    pub root: Option<String>,

    /// Leader layout settings
    pub outline: Option<OutlineConfig>,
}

impl ConfigFile {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(root) = &self.root {
            NodeId::new(root.as_str())
                .map_err(|e| ConfigError::InvalidValue(format!("invalid root: {}", e)))?;
        }

        if let Some(outline) = &self.outline {
            outline.validate()?;
        }

        Ok(())
    }
}

/// Leader layout settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutlineConfig {
    /// Columns between the widest label and the end of every leader
    pub margin: Option<usize>,

    /// Dots printed when a label leaves no room for padding
    pub min_dots: Option<usize>,
}

impl OutlineConfig {
    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.margin == Some(0) {
            return Err(ConfigError::InvalidValue(
                "outline.margin must be at least 1".to_string(),
            ));
        }
        if self.min_dots == Some(0) {
            return Err(ConfigError::InvalidValue(
                "outline.min_dots must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
