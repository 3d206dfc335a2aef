//! # staleguard-config
//!
//! TOML configuration types, loading, and validation for staleguard.
//!
//! Single source of truth for `StaleguardConfig` and the resolved
//! `WatcherConfig` that gets baked into every emitted watcher script.

mod defaults;
mod loading;
mod validation;

pub mod errors;
pub mod types;

// Public API re-exports
pub use defaults::{
    DEFAULT_BASE, DEFAULT_CONFIRM_TEXT, DEFAULT_DIST_DIR, DEFAULT_INTERVAL_MS, DEFAULT_MANIFEST,
    MAX_BACKOFF_MULTIPLIER, MAX_INTERVAL_MS, MAX_TIMER_DELAY_MS,
};
pub use errors::ConfigError;
pub use loading::{load_hierarchy, load_hierarchy_from, merge_configs};
pub use types::{BuildSettings, StaleguardConfig, WatcherConfig, WatcherSettings};
pub use validation::validate_config;

impl StaleguardConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
