//! Drives a [`Watcher`] from the poll timer and the trigger channel.

use super::machine::{CheckOutcome, ReloadReason, Watcher};
use super::ports::{DecisionPort, FingerprintSource};
use super::trigger::Trigger;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Why [`run_watcher`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchExit {
    /// Drift was confirmed; the caller should reload the page.
    Reload(ReloadReason),
    /// The shutdown token was cancelled.
    Cancelled,
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// Run the watcher until it decides to reload or `shutdown` is cancelled.
///
/// The first check runs once the runtime has had a chance to go idle. After
/// that, checks run when the pending deadline passes or when a trigger that
/// requests a check arrives. Triggers received while a check is in flight
/// are dropped. Closing the trigger channel stops fast-path checks only;
/// timer polling continues.
pub async fn run_watcher<S, D>(
    mut watcher: Watcher<S, D>,
    mut triggers: mpsc::Receiver<Trigger>,
    shutdown: CancellationToken,
) -> WatchExit
where
    S: FingerprintSource,
    D: DecisionPort,
{
    info!(
        event = "core.watcher.watch_started",
        interval_ms = watcher.config().poll_interval_ms() as u64,
        force_reload = watcher.config().force_reload()
    );

    tokio::task::yield_now().await;

    let mut triggers_open = true;
    let mut check_due = true;

    loop {
        if check_due {
            check_due = false;
            if let Some(exit) =
                drive_check(&mut watcher, &mut triggers, &mut triggers_open, &shutdown).await
            {
                info!(event = "core.watcher.watch_completed", exit = ?exit);
                return exit;
            }
        }

        let deadline = watcher.state().pending_deadline();
        let trigger = tokio::select! {
            _ = shutdown.cancelled() => {
                info!(event = "core.watcher.watch_completed", exit = ?WatchExit::Cancelled);
                return WatchExit::Cancelled;
            }
            _ = sleep_until_deadline(deadline) => Trigger::TimerElapsed,
            trigger = triggers.recv(), if triggers_open => match trigger {
                Some(trigger) => trigger,
                None => {
                    debug!(event = "core.watcher.trigger_channel_closed");
                    triggers_open = false;
                    continue;
                }
            },
        };

        check_due = accept_trigger(&trigger);
    }
}

/// Timer ticks and channel triggers go through the same filter.
fn accept_trigger(trigger: &Trigger) -> bool {
    match trigger {
        Trigger::TimerElapsed => {
            debug!(event = "core.watcher.timer_elapsed");
            true
        }
        _ if trigger.requests_check() => {
            info!(event = "core.watcher.trigger_received", trigger = ?trigger);
            true
        }
        _ => {
            debug!(event = "core.watcher.trigger_ignored", trigger = ?trigger);
            false
        }
    }
}

/// One check with the fetch raced against shutdown. Triggers arriving
/// meanwhile are drained and dropped.
async fn drive_check<S, D>(
    watcher: &mut Watcher<S, D>,
    triggers: &mut mpsc::Receiver<Trigger>,
    triggers_open: &mut bool,
    shutdown: &CancellationToken,
) -> Option<WatchExit>
where
    S: FingerprintSource,
    D: DecisionPort,
{
    let ticket = watcher.begin_check()?;

    let result = {
        let fetch = watcher.source().fetch();
        tokio::pin!(fetch);
        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => return Some(WatchExit::Cancelled),
                result = &mut fetch => break result,
                trigger = triggers.recv(), if *triggers_open => match trigger {
                    Some(trigger) => {
                        debug!(
                            event = "core.watcher.trigger_dropped",
                            reason = "in_flight",
                            trigger = ?trigger
                        );
                    }
                    None => *triggers_open = false,
                },
            }
        }
    };

    match watcher.complete_check(ticket, result, Instant::now()) {
        CheckOutcome::Reload(reason) => Some(WatchExit::Reload(reason)),
        _ => None,
    }
}
