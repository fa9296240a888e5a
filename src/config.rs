use crate::error::{Result, ScmVersionError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for scm-version.
///
/// Every key is optional; the defaults reproduce the stock behavior (tags
/// matching `v[0-9]*`, 9-character abbreviated hashes, a `version` file at
/// the repository root).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub candidate: CandidateConfig,
}

/// Returns the default tag glob for the describe query.
fn default_tag_pattern() -> String {
    "v[0-9]*".to_string()
}

/// Returns the default abbreviated-hash length.
fn default_abbrev() -> u32 {
    9
}

/// Returns the default version-file name.
fn default_version_file() -> String {
    "version".to_string()
}

/// Configuration for the tag-describe query.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct QueryConfig {
    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    #[serde(default = "default_abbrev")]
    pub abbrev: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig {
            tag_pattern: default_tag_pattern(),
            abbrev: default_abbrev(),
        }
    }
}

/// Configuration for locating the candidate version file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CandidateConfig {
    #[serde(default = "default_version_file")]
    pub file: String,
}

impl Default for CandidateConfig {
    fn default() -> Self {
        CandidateConfig {
            file: default_version_file(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            query: QueryConfig::default(),
            candidate: CandidateConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `scmversion.toml` in current directory
/// 3. `.scmversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)
            .map_err(|e| ScmVersionError::config(format!("cannot read '{}': {}", path, e)))?
    } else if Path::new("./scmversion.toml").exists() {
        fs::read_to_string("./scmversion.toml")
            .map_err(|e| ScmVersionError::config(format!("cannot read 'scmversion.toml': {}", e)))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".scmversion.toml");
        if config_path.exists() {
            fs::read_to_string(&config_path).map_err(|e| {
                ScmVersionError::config(format!("cannot read '{}': {}", config_path.display(), e))
            })?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| ScmVersionError::config(format!("invalid configuration: {}", e)))?;
    Ok(config)
}
