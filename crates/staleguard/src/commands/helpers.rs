use clap::ArgMatches;
use tracing::warn;

use staleguard_config::{ConfigError, StaleguardConfig, WatcherConfig};

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub fn load_config_with_warning() -> StaleguardConfig {
    match StaleguardConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{}",
                crate::color::warning(&format!(
                    "Warning: Could not load config: {}. Using defaults.",
                    e
                ))
            );
            eprintln!(
                "{}",
                crate::color::hint(
                    "Tip: Check ~/.staleguard/config.toml and ./.staleguard/config.toml for syntax errors."
                )
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            StaleguardConfig::default()
        }
    }
}

/// Apply `--interval`, `--confirm-text` and `--force-update` on top of the
/// loaded config. Flags that were not given leave the config untouched.
pub fn apply_watcher_overrides(config: &mut StaleguardConfig, matches: &ArgMatches) {
    if let Some(interval) = matches.get_one::<u64>("interval") {
        config.watcher.interval_ms = Some(*interval);
    }
    if let Some(text) = matches.get_one::<String>("confirm-text") {
        config.watcher.confirm_text = Some(text.clone());
    }
    if matches.get_flag("force-update") {
        config.watcher.force_update = Some(true);
    }
}

/// Validate the fully merged config and resolve the watcher parameters.
pub fn resolve_watcher_config(config: &StaleguardConfig) -> Result<WatcherConfig, ConfigError> {
    config.validate()?;
    config.watcher_config()
}
