use crate::fingerprint::Fingerprint;
use tokio::time::Instant;

/// Upper bound of the backoff multiplier. Shared with the config bounds and
/// the emitted browser script.
pub use staleguard_config::MAX_BACKOFF_MULTIPLIER;

/// State of one watched page instance.
///
/// Created when the watcher starts, dropped when it exits. Only
/// [`super::Watcher`] writes to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatcherState {
    pub(super) last_seen: Option<Fingerprint>,
    pub(super) in_flight: bool,
    pub(super) backoff_multiplier: u32,
    /// When the next timer-driven check is due. `None` means no timer pending.
    pub(super) pending_deadline: Option<Instant>,
}

impl WatcherState {
    pub fn new() -> Self {
        Self {
            last_seen: None,
            in_flight: false,
            backoff_multiplier: 1,
            pending_deadline: None,
        }
    }

    pub fn last_seen(&self) -> Option<&Fingerprint> {
        self.last_seen.as_ref()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Always within `1..=MAX_BACKOFF_MULTIPLIER`.
    pub fn backoff_multiplier(&self) -> u32 {
        self.backoff_multiplier
    }

    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending_deadline
    }

    /// Grow the multiplier by one, saturating at the maximum.
    pub(super) fn bump_backoff(&mut self) -> u32 {
        self.backoff_multiplier = (self.backoff_multiplier + 1).min(MAX_BACKOFF_MULTIPLIER);
        self.backoff_multiplier
    }
}

impl Default for WatcherState {
    fn default() -> Self {
        Self::new()
    }
}
