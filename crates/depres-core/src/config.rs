//! Configuration loading and validation.
//!
//! The config file is TOML with five required parameters. Loading is split in
//! two stages: a raw deserialization that tolerates loosely-typed values
//! (`test_mode` may be a bool or a `"true"/"false"/"0"/"1"` token), then a
//! validation pass that produces an immutable [`ResolvedConfig`] or a named
//! error per parameter.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading or validating the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file `{0}` not found")]
    NotFound(PathBuf),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("missing required parameter `{0}`")]
    MissingField(&'static str),
    #[error("invalid parameter `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// `test_mode` as it may appear in the file: a real bool or a string token.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TestModeValue {
    Flag(bool),
    Token(String),
}

impl TestModeValue {
    fn coerce(&self) -> Result<bool, ConfigError> {
        match self {
            TestModeValue::Flag(b) => Ok(*b),
            TestModeValue::Token(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                other => Err(ConfigError::Invalid {
                    field: "test_mode",
                    reason: format!("expected true/false/0/1, got `{}`", other),
                }),
            },
        }
    }
}

/// Raw, unvalidated view of the config file. All fields optional so a
/// missing parameter is reported by name instead of as a serde error.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfig {
    pub package_name: Option<String>,
    pub repo_url: Option<String>,
    pub version: Option<String>,
    pub test_mode: Option<TestModeValue>,
    pub max_depth: Option<i64>,
}

/// Validated configuration consumed read-only by the resolution pipeline.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Name of the package under analysis.
    pub package_name: String,
    /// Repository locator, e.g. `https://github.com/owner/repo`.
    pub repo_url: String,
    /// Version (tag) of the package to resolve.
    pub version: String,
    /// Whether to operate against a test repository. Validated and reported;
    /// the pipeline itself does not branch on it.
    pub test_mode: bool,
    /// Maximum analysis depth, >= 1. Reserved for transitive resolution;
    /// the current pipeline resolves direct dependencies only.
    pub max_depth: u32,
}

fn required_string(
    value: &Option<String>,
    field: &'static str,
) -> Result<String, ConfigError> {
    let s = value.as_ref().ok_or(ConfigError::MissingField(field))?;
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid {
            field,
            reason: "must be a non-empty string".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

impl RawConfig {
    /// Validates every parameter and builds the immutable config record.
    pub fn validate(&self) -> Result<ResolvedConfig, ConfigError> {
        let package_name = required_string(&self.package_name, "package_name")?;
        let repo_url = required_string(&self.repo_url, "repo_url")?;
        let version = required_string(&self.version, "version")?;

        let test_mode = self
            .test_mode
            .as_ref()
            .ok_or(ConfigError::MissingField("test_mode"))?
            .coerce()?;

        let depth = self.max_depth.ok_or(ConfigError::MissingField("max_depth"))?;
        if depth < 1 {
            return Err(ConfigError::Invalid {
                field: "max_depth",
                reason: format!("must be an integer >= 1, got {}", depth),
            });
        }
        let max_depth = u32::try_from(depth).map_err(|_| ConfigError::Invalid {
            field: "max_depth",
            reason: format!("{} is out of range", depth),
        })?;

        Ok(ResolvedConfig {
            package_name,
            repo_url,
            version,
            test_mode,
            max_depth,
        })
    }
}

/// Load and validate the configuration from `path`.
pub fn load(path: &Path) -> Result<ResolvedConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let data = fs::read_to_string(path)?;
    let raw: RawConfig = toml::from_str(&data)?;
    let cfg = raw.validate()?;
    tracing::debug!(
        package = %cfg.package_name,
        version = %cfg.version,
        "loaded config from {}",
        path.display()
    );
    Ok(cfg)
}
