//! Configuration type definitions.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [watcher]
//! interval_ms = 300000
//! confirm_text = "A new version is available. Reload now?"
//! force_update = false
//!
//! [build]
//! base = "/app/"
//! dist_dir = "dist"
//! manifest = ".vite/manifest.json"
//! ```

use crate::defaults::{
    DEFAULT_BASE, DEFAULT_CONFIRM_TEXT, DEFAULT_DIST_DIR, DEFAULT_INTERVAL_MS, DEFAULT_MANIFEST,
    MAX_INTERVAL_MS,
};
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.staleguard/config.toml`
/// 2. Project config: `./.staleguard/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaleguardConfig {
    /// Settings baked into every emitted watcher script
    #[serde(default)]
    pub watcher: WatcherSettings,

    /// Where the build output lives and how it is served
    #[serde(default)]
    pub build: BuildSettings,
}

impl StaleguardConfig {
    /// Resolve the watcher section into a validated [`WatcherConfig`].
    pub fn watcher_config(&self) -> Result<WatcherConfig, ConfigError> {
        WatcherConfig::new(
            Duration::from_millis(self.watcher.interval_ms()),
            self.watcher.confirm_text(),
            self.watcher.force_update(),
        )
    }
}

/// Watcher settings as written in config files.
///
/// Fields are `Option<T>` to support proper config hierarchy merging:
/// only explicitly-set values override lower-priority configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WatcherSettings {
    /// Milliseconds between fingerprint polls.
    /// Default: 600000 (10 minutes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,

    /// Text of the reload confirmation prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_text: Option<String>,

    /// Reload without asking when a new build is detected.
    /// Default: false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_update: Option<bool>,
}

impl WatcherSettings {
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms.unwrap_or(DEFAULT_INTERVAL_MS)
    }

    pub fn confirm_text(&self) -> &str {
        self.confirm_text.as_deref().unwrap_or(DEFAULT_CONFIRM_TEXT)
    }

    pub fn force_update(&self) -> bool {
        self.force_update.unwrap_or(false)
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            interval_ms: override_config.interval_ms.or(base.interval_ms),
            confirm_text: override_config
                .confirm_text
                .clone()
                .or_else(|| base.confirm_text.clone()),
            force_update: override_config.force_update.or(base.force_update),
        }
    }
}

/// Build output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildSettings {
    /// Public base path the site is served under.
    /// Default: "/"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Build output directory.
    /// Default: "dist"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dist_dir: Option<String>,

    /// Build manifest path, relative to `dist_dir`.
    /// Default: ".vite/manifest.json"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,
}

impl BuildSettings {
    pub fn base(&self) -> &str {
        self.base.as_deref().unwrap_or(DEFAULT_BASE)
    }

    pub fn dist_dir(&self) -> &str {
        self.dist_dir.as_deref().unwrap_or(DEFAULT_DIST_DIR)
    }

    pub fn manifest(&self) -> &str {
        self.manifest.as_deref().unwrap_or(DEFAULT_MANIFEST)
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            base: override_config.base.clone().or_else(|| base.base.clone()),
            dist_dir: override_config
                .dist_dir
                .clone()
                .or_else(|| base.dist_dir.clone()),
            manifest: override_config
                .manifest
                .clone()
                .or_else(|| base.manifest.clone()),
        }
    }
}

/// Resolved watcher configuration.
///
/// Supplied once at build time and baked into the emitted script; never
/// reconfigured at run time. The poll interval is always at least 1 ms and
/// at most [`MAX_INTERVAL_MS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatcherConfig {
    poll_interval: Duration,
    confirm_prompt: String,
    force_reload: bool,
}

impl WatcherConfig {
    pub fn new(
        poll_interval: Duration,
        confirm_prompt: impl Into<String>,
        force_reload: bool,
    ) -> Result<Self, ConfigError> {
        let interval_ms = poll_interval.as_millis();
        if interval_ms == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        if interval_ms > u128::from(MAX_INTERVAL_MS) {
            return Err(ConfigError::IntervalTooLarge {
                interval_ms: u64::try_from(interval_ms).unwrap_or(u64::MAX),
                max_ms: MAX_INTERVAL_MS,
            });
        }
        Ok(Self {
            poll_interval,
            confirm_prompt: confirm_prompt.into(),
            force_reload,
        })
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Poll interval in whole milliseconds, as embedded in scripts.
    pub fn poll_interval_ms(&self) -> u128 {
        self.poll_interval.as_millis()
    }

    pub fn confirm_prompt(&self) -> &str {
        &self.confirm_prompt
    }

    pub fn force_reload(&self) -> bool {
        self.force_reload
    }
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            confirm_prompt: DEFAULT_CONFIRM_TEXT.to_string(),
            force_reload: false,
        }
    }
}
