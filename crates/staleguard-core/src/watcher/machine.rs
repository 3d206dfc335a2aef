//! The check state machine.
//!
//! `check()` is split into [`Watcher::begin_check`] and
//! [`Watcher::complete_check`] around the single fetch, so the single-flight
//! guard and the backoff rules can be exercised without a live timer.

use super::errors::FetchError;
use super::ports::{Decision, DecisionPort, FingerprintSource};
use super::state::WatcherState;
use crate::fingerprint::Fingerprint;
use staleguard_config::WatcherConfig;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Proof that a check was started. Only [`Watcher::begin_check`] hands these out.
#[derive(Debug)]
#[must_use = "a started check must be completed, or the watcher stays in flight"]
pub struct CheckTicket {
    _private: (),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadReason {
    /// `force_reload` is set; no prompt was shown.
    Forced,
    /// The user accepted the prompt.
    Accepted,
}

/// What a check decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Another check was in flight; nothing happened.
    Skipped,
    /// First successful fetch of this instance; recorded without acting.
    Baseline(Fingerprint),
    /// Fetched value equals the recorded one.
    Unchanged,
    /// The fetch failed; treated as no change.
    FetchFailed,
    /// Drift detected and the user said no. The recorded fingerprint is kept,
    /// so the next check sees the same drift.
    Declined { multiplier: u32 },
    /// Drift detected and the page must reload. Terminal.
    Reload(ReloadReason),
}

impl CheckOutcome {
    pub fn is_reload(&self) -> bool {
        matches!(self, Self::Reload(_))
    }
}

/// One watched page instance: config, state, and the injected capabilities.
pub struct Watcher<S, D> {
    config: WatcherConfig,
    state: WatcherState,
    source: S,
    decisions: D,
}

impl<S, D> Watcher<S, D>
where
    S: FingerprintSource,
    D: DecisionPort,
{
    pub fn new(config: WatcherConfig, source: S, decisions: D) -> Self {
        Self {
            config,
            state: WatcherState::new(),
            source,
            decisions,
        }
    }

    pub fn config(&self) -> &WatcherConfig {
        &self.config
    }

    pub fn state(&self) -> &WatcherState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Delay until the next timer-driven check: interval × multiplier.
    pub fn next_delay(&self) -> Duration {
        self.config.poll_interval() * self.state.backoff_multiplier
    }

    /// Start a check. Returns `None` (a no-op) when one is already in flight.
    ///
    /// Cancels the pending timer; [`Self::complete_check`] schedules the next one.
    pub fn begin_check(&mut self) -> Option<CheckTicket> {
        if self.state.in_flight {
            debug!(event = "core.watcher.check_skipped", reason = "in_flight");
            return None;
        }

        self.state.in_flight = true;
        self.state.pending_deadline = None;
        debug!(event = "core.watcher.check_started");
        Some(CheckTicket { _private: () })
    }

    /// Apply the fetch result, clear the in-flight flag, and reschedule.
    ///
    /// A reload outcome schedules nothing: the instance is done.
    pub fn complete_check(
        &mut self,
        ticket: CheckTicket,
        result: Result<Fingerprint, FetchError>,
        now: Instant,
    ) -> CheckOutcome {
        let CheckTicket { _private: () } = ticket;

        let outcome = match result {
            Err(e) => {
                warn!(event = "core.watcher.fetch_failed", error = %e);
                CheckOutcome::FetchFailed
            }
            Ok(fetched) => self.compare(fetched),
        };

        self.state.in_flight = false;

        if outcome.is_reload() {
            info!(event = "core.watcher.reload_triggered", outcome = ?outcome);
            return outcome;
        }

        let delay = self.next_delay();
        self.state.pending_deadline = Some(now + delay);
        debug!(
            event = "core.watcher.check_completed",
            outcome = ?outcome,
            next_delay_ms = delay.as_millis() as u64
        );
        outcome
    }

    fn compare(&mut self, fetched: Fingerprint) -> CheckOutcome {
        let Some(last_seen) = self.state.last_seen.as_ref() else {
            info!(event = "core.watcher.baseline_recorded", fingerprint = %fetched);
            self.state.last_seen = Some(fetched.clone());
            return CheckOutcome::Baseline(fetched);
        };

        if *last_seen == fetched {
            // Multiplier deliberately left as-is: once drift was declined,
            // polling stays slowed until the page reloads.
            self.state.last_seen = Some(fetched);
            return CheckOutcome::Unchanged;
        }

        info!(
            event = "core.watcher.drift_detected",
            recorded = %last_seen,
            fetched = %fetched
        );

        if self.config.force_reload() {
            return CheckOutcome::Reload(ReloadReason::Forced);
        }

        match self.decisions.ask(self.config.confirm_prompt()) {
            Decision::Accept => CheckOutcome::Reload(ReloadReason::Accepted),
            Decision::Decline => {
                let multiplier = self.state.bump_backoff();
                info!(event = "core.watcher.reload_declined", multiplier = multiplier);
                CheckOutcome::Declined { multiplier }
            }
        }
    }

    /// Run one full check: begin, fetch, complete.
    pub async fn check(&mut self) -> CheckOutcome {
        let Some(ticket) = self.begin_check() else {
            return CheckOutcome::Skipped;
        };
        let result = self.source.fetch().await;
        self.complete_check(ticket, result, Instant::now())
    }
}
