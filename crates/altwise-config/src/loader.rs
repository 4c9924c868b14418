//! Configuration loader.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::ConfigError;
use crate::resolve::{EnvSource, ProcessEnv};
use crate::schema::FileConfig;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "altwise.toml";

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid regex"));

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file that must exist.
    pub fn load(path: &Path) -> Result<FileConfig, ConfigError> {
        Self::load_with_env(path, &ProcessEnv)
    }

    pub fn load_with_env(path: &Path, env: &dyn EnvSource) -> Result<FileConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str_with_env(&content, env)
    }

    /// Load `path` if it exists; a missing file yields the defaults.
    pub fn load_optional(path: &Path, env: &dyn EnvSource) -> Result<FileConfig, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "config file absent, using defaults");
            return Ok(FileConfig::default());
        }
        Self::load_with_env(path, env)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<FileConfig, ConfigError> {
        Self::load_str_with_env(content, &ProcessEnv)
    }

    pub fn load_str_with_env(content: &str, env: &dyn EnvSource) -> Result<FileConfig, ConfigError> {
        let expanded = Self::expand_env_vars(content, env)?;
        let config: FileConfig = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str, env: &dyn EnvSource) -> Result<String, ConfigError> {
        let mut result = content.to_string();

        for cap in ENV_VAR.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = env
                .var(var_name)
                .ok_or_else(|| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.config/altwise.toml`).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).as_ref())
    }
}
