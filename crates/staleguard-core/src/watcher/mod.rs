//! Watcher Runtime: keeps one page instance's notion of the current
//! fingerprint fresh and reacts to drift.
//!
//! - [`state`] - the per-instance state, mutated only by [`Watcher`]
//! - [`machine`] - `check()` as a begin/complete pair around one fetch
//! - [`scheduler`] - timer + trigger-channel loop driving the machine
//! - [`http`], [`assets`] - concrete fingerprint source and trigger source

pub mod assets;
pub mod errors;
pub mod http;
pub mod machine;
pub mod ports;
pub mod scheduler;
pub mod state;
pub mod trigger;

pub use assets::AssetWatcher;
pub use errors::{FetchError, WatchError};
pub use http::HttpFingerprintSource;
pub use machine::{CheckOutcome, CheckTicket, ReloadReason, Watcher};
pub use ports::{Decision, DecisionPort, FingerprintSource};
pub use scheduler::{WatchExit, run_watcher};
pub use state::{MAX_BACKOFF_MULTIPLIER, WatcherState};
pub use trigger::{ElementKind, Trigger};
