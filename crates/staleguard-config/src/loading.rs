//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.staleguard/config.toml` (global user preferences)
//! 3. **Project config** - `./.staleguard/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority, applied by the caller)

use crate::errors::ConfigError;
use crate::types::{BuildSettings, StaleguardConfig, WatcherSettings};
use crate::validation::validate_config;
use staleguard_paths::StaleguardPaths;
use std::fs;
use std::path::Path;

/// Load configuration from the user and current-directory project config files.
///
/// # Errors
///
/// Returns an error if a config file fails to parse or validation fails.
/// Missing config files are not errors.
pub fn load_hierarchy() -> Result<StaleguardConfig, ConfigError> {
    let paths = StaleguardPaths::resolve()?;
    let project_root = std::env::current_dir()?;
    load_hierarchy_from(&paths, &project_root)
}

/// Load configuration with explicit user and project locations.
pub fn load_hierarchy_from(
    paths: &StaleguardPaths,
    project_root: &Path,
) -> Result<StaleguardConfig, ConfigError> {
    let mut config = StaleguardConfig::default();

    if let Some(user_config) = load_optional(&paths.user_config())? {
        config = merge_configs(config, user_config);
    }

    if let Some(project_config) =
        load_optional(&StaleguardPaths::project_config(project_root))?
    {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a config file, treating "file not found" as absent.
fn load_optional(path: &Path) -> Result<Option<StaleguardConfig>, ConfigError> {
    match load_config_file(path) {
        Ok(config) => {
            tracing::debug!(event = "config.file_loaded", path = %path.display());
            Ok(Some(config))
        }
        Err(ConfigError::IoError { source }) if source.kind() == std::io::ErrorKind::NotFound => {
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Load a configuration file from the given path.
fn load_config_file(path: &Path) -> Result<StaleguardConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: StaleguardConfig, override_config: StaleguardConfig) -> StaleguardConfig {
    StaleguardConfig {
        watcher: WatcherSettings::merge(&base.watcher, &override_config.watcher),
        build: BuildSettings::merge(&base.build, &override_config.build),
    }
}
