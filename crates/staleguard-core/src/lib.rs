//! staleguard-core: build fingerprinting and stale-page detection
//!
//! Two halves that never run together:
//!
//! - [`binder`] - post-build step: derive a per-page fingerprint from the entry
//!   chunk, emit the fingerprint and watcher artifacts, inject the watcher tag
//! - [`watcher`] - run-time state machine that polls the fingerprint, detects
//!   drift, and decides whether to reload, prompt, or reschedule
//!
//! The only thing they share is the write-once fingerprint artifact and the
//! [`WatcherConfig`] baked in at build time.

pub mod binder;
pub mod errors;
pub mod fingerprint;
pub mod logging;
pub mod watcher;

pub use fingerprint::Fingerprint;
pub use staleguard_config::{ConfigError, StaleguardConfig, WatcherConfig};

pub use binder::{
    BindOptions, BindPlan, BindReport, BinderError, BuildManifest, Chunk, PageSource, SkipReason,
    bind_dist, plan_bind,
};
pub use errors::{StaleguardError, StaleguardResult};
pub use watcher::{
    AssetWatcher, CheckOutcome, Decision, DecisionPort, FetchError, FingerprintSource,
    HttpFingerprintSource, ReloadReason, Trigger, WatchError, WatchExit, Watcher, WatcherState,
    run_watcher,
};

// Re-export logging initialization
pub use logging::init_logging;
