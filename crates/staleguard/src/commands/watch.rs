use std::path::Path;

use clap::ArgMatches;
use dialoguer::Confirm;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use staleguard_core::{
    AssetWatcher, Decision, HttpFingerprintSource, ReloadReason, StaleguardError, WatchExit,
    Watcher, run_watcher,
};

use super::helpers::{apply_watcher_overrides, load_config_with_warning, resolve_watcher_config};
use crate::color;

/// Capacity of the trigger channel. Triggers beyond this are dropped, which
/// loses nothing: one queued trigger already requests the check.
const TRIGGER_BUFFER: usize = 16;

pub(crate) fn handle_watch_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let url = matches
        .get_one::<String>("url")
        .ok_or("URL argument is required")?;
    let dist = matches.get_one::<String>("dist").cloned();

    info!(event = "cli.watch_started", url = %url, dist = ?dist);

    let mut config = load_config_with_warning();
    apply_watcher_overrides(&mut config, matches);

    let watcher_config = match resolve_watcher_config(&config) {
        Ok(watcher_config) => watcher_config,
        Err(e) => {
            eprintln!("{}", color::error(&format!("❌ Invalid configuration: {}", e)));
            error!(event = "cli.watch_failed", error = %e, error_code = e.error_code());
            return Err(e.into());
        }
    };

    let source = match HttpFingerprintSource::new(url) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}", color::error(&format!("❌ {}", e)));
            error!(event = "cli.watch_failed", error = %e, error_code = e.error_code());
            return Err(e.into());
        }
    };

    println!(
        "Watching {} every {}ms{}",
        color::accent(url),
        watcher_config.poll_interval_ms(),
        if watcher_config.force_reload() {
            " (force update)"
        } else {
            ""
        }
    );
    println!("{}", color::muted("Press Ctrl+C to stop."));

    let watcher = Watcher::new(watcher_config, source, terminal_decision);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let exit = runtime.block_on(async move {
        let (tx, rx) = mpsc::channel(TRIGGER_BUFFER);

        // Held for the whole run; dropping it stops the filesystem watch.
        let _assets = match dist.as_deref() {
            Some(dir) => Some(AssetWatcher::new(Path::new(dir), tx)?),
            None => {
                drop(tx);
                None
            }
        };

        let shutdown = CancellationToken::new();
        let ctrl_c_token = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!(event = "cli.watch_interrupted");
                ctrl_c_token.cancel();
            }
        });

        let exit = tokio::spawn(run_watcher(watcher, rx, shutdown)).await?;
        Ok::<WatchExit, Box<dyn std::error::Error>>(exit)
    });

    match exit {
        Ok(WatchExit::Reload(reason)) => {
            println!(
                "{} New build detected at {}. The page reloads ({}).",
                color::stale("🔄"),
                color::accent(url),
                describe_reason(reason)
            );
            info!(event = "cli.watch_completed", exit = "reload", reason = ?reason);
            Ok(())
        }
        Ok(WatchExit::Cancelled) => {
            println!("{}", color::muted("Stopped watching."));
            info!(event = "cli.watch_completed", exit = "cancelled");
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", color::error(&format!("❌ Watch failed: {}", e)));
            error!(event = "cli.watch_failed", error = %e);
            Err(e)
        }
    }
}

/// Ask on the terminal. Runs on a runtime worker, so the blocking prompt is
/// moved out of the async context first.
fn terminal_decision(prompt: &str) -> Decision {
    let answer = tokio::task::block_in_place(|| {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
    });

    match answer {
        Ok(true) => Decision::Accept,
        Ok(false) => Decision::Decline,
        Err(e) => {
            warn!(
                event = "cli.watch.prompt_failed",
                error = %e,
                "Could not read an answer, treating as decline"
            );
            Decision::Decline
        }
    }
}

fn describe_reason(reason: ReloadReason) -> &'static str {
    match reason {
        ReloadReason::Forced => "force update",
        ReloadReason::Accepted => "confirmed",
    }
}
