//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! itgraph has two configuration scopes:
//! - **User**: Personal defaults
//! - **Project**: Overrides kept next to the graph documents
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. User config file
//! 3. Project config file
//! 4. CLI flags (not handled here)
//!
//! # User Config Locations
//!
//! Searched in order:
//! 1. The explicit `--config` path, if given (must exist)
//! 2. `$ITGRAPH_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/itgraph/config.toml`
//! 4. `~/.itgraph/config.toml`
//!
//! # Project Config Location
//!
//! `.itgraph.toml` in the project directory.
//!
//! # Example
//!
//! ```no_run
//! use itgraph::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(None, Some(Path::new("/path/to/project"))).unwrap();
//! let config = result.config;
//!
//! if let Some(root) = config.root() {
//!     println!("Default root: {}", root);
//! }
//! println!("Leader margin: {}", config.leader_style().margin);
//! ```

pub mod schema;

pub use schema::{ConfigFile, OutlineConfig};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::outline::LeaderStyle;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("config file not found: {0}")]
    NotFound(PathBuf),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence automatically: project values override user
/// values, which override defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// User configuration
    pub user: ConfigFile,
    /// Project configuration (if found)
    pub project: Option<ConfigFile>,
    user_path: Option<PathBuf>,
    project_path: Option<PathBuf>,
}

/// File name of the project config.
pub const PROJECT_CONFIG_FILE: &str = ".itgraph.toml";

impl Config {
    /// Load configuration.
    ///
    /// `explicit` replaces the user config search; `project_dir` enables the
    /// project scope.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed or hold
    /// invalid values, or if `explicit` does not exist. Missing config files
    /// are otherwise not an error (defaults are used).
    pub fn load(
        explicit: Option<&Path>,
        project_dir: Option<&Path>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let (user, user_path) = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                (Self::read_config(path)?, Some(path.to_path_buf()))
            }
            None => Self::load_user(&mut warnings)?,
        };

        let (project, project_path) = match project_dir {
            Some(dir) => {
                let path = dir.join(PROJECT_CONFIG_FILE);
                if path.exists() {
                    (Some(Self::read_config(&path)?), Some(path))
                } else {
                    (None, None)
                }
            }
            None => (None, None),
        };

        user.validate()?;
        if let Some(ref p) = project {
            p.validate()?;
        }

        debug!(
            user = ?user_path,
            project = ?project_path,
            "loaded configuration"
        );

        Ok(ConfigLoadResult {
            config: Config {
                user,
                project,
                user_path,
                project_path,
            },
            warnings,
        })
    }

    /// Load user configuration from standard locations.
    fn load_user(
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<(ConfigFile, Option<PathBuf>), ConfigError> {
        // 1. Check $ITGRAPH_CONFIG
        if let Ok(path) = std::env::var("ITGRAPH_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
            warnings.push(ConfigWarning {
                message: "ITGRAPH_CONFIG points to a missing file, ignoring it".to_string(),
                path,
            });
        }

        // 2. Check $XDG_CONFIG_HOME/itgraph/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("itgraph/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 3. Check ~/.itgraph/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".itgraph/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((ConfigFile::default(), None))
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<ConfigFile, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Get the default root node id.
    ///
    /// Returns `None` if not configured.
    pub fn root(&self) -> Option<&str> {
        self.project
            .as_ref()
            .and_then(|p| p.root.as_deref())
            .or(self.user.root.as_deref())
    }

    /// Get the leader margin. Defaults to 3.
    pub fn margin(&self) -> usize {
        self.outline_value(|o| o.margin)
            .unwrap_or(LeaderStyle::default().margin)
    }

    /// Get the minimum number of leader dots. Defaults to 3.
    pub fn min_dots(&self) -> usize {
        self.outline_value(|o| o.min_dots)
            .unwrap_or(LeaderStyle::default().min_dots)
    }

    /// Leader style with precedence applied.
    pub fn leader_style(&self) -> LeaderStyle {
        LeaderStyle {
            margin: self.margin(),
            min_dots: self.min_dots(),
        }
    }

    fn outline_value(&self, get: impl Fn(&OutlineConfig) -> Option<usize>) -> Option<usize> {
        self.project
            .as_ref()
            .and_then(|p| p.outline.as_ref())
            .and_then(&get)
            .or_else(|| self.user.outline.as_ref().and_then(&get))
    }

    /// The effective configuration as a single file.
    pub fn effective(&self) -> ConfigFile {
        ConfigFile {
            root: self.root().map(str::to_string),
            outline: Some(OutlineConfig {
                margin: Some(self.margin()),
                min_dots: Some(self.min_dots()),
            }),
        }
    }

    /// The effective configuration rendered as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(&self.effective())
            .map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    /// Get the path to the loaded user config file.
    pub fn user_config_loaded_from(&self) -> Option<&Path> {
        self.user_path.as_deref()
    }

    /// Get the path to the loaded project config file.
    pub fn project_config_loaded_from(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }
}
