use std::path::{Path, PathBuf};

use clap::ArgMatches;
use tracing::{error, info};

use staleguard_core::binder::SkippedPage;
use staleguard_core::{BindOptions, BindReport, SkipReason, StaleguardError, bind_dist};

use super::helpers::{apply_watcher_overrides, load_config_with_warning, resolve_watcher_config};
use crate::color;

pub(crate) fn handle_bind_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.bind_started");

    let mut config = load_config_with_warning();

    // Apply CLI overrides only if provided
    apply_watcher_overrides(&mut config, matches);
    if let Some(dist) = matches.get_one::<String>("dist") {
        config.build.dist_dir = Some(dist.clone());
    }
    if let Some(manifest) = matches.get_one::<String>("manifest") {
        config.build.manifest = Some(manifest.clone());
    }
    if let Some(base) = matches.get_one::<String>("base") {
        config.build.base = Some(base.clone());
    }
    let json_output = matches.get_flag("json");

    let watcher = match resolve_watcher_config(&config) {
        Ok(watcher) => watcher,
        Err(e) => {
            eprintln!("{}", color::error(&format!("❌ Invalid configuration: {}", e)));
            error!(
                event = "cli.bind_failed",
                error = %e,
                error_code = e.error_code()
            );
            return Err(e.into());
        }
    };

    let dist_dir = PathBuf::from(config.build.dist_dir());
    let manifest_path = dist_dir.join(config.build.manifest());
    let options = BindOptions {
        base: config.build.base().to_string(),
        watcher,
    };

    match bind_dist(&dist_dir, &manifest_path, &options) {
        Ok(report) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&dist_dir, &report);
            }

            info!(
                event = "cli.bind_completed",
                bound = report.bound.len(),
                skipped = report.skipped.len()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", color::error(&format!("❌ Bind failed: {}", e)));
            if e.is_user_error() {
                eprintln!(
                    "{}",
                    color::hint("Tip: run `staleguard bind` after the build has written its output and manifest.")
                );
            }

            error!(
                event = "cli.bind_failed",
                error = %e,
                error_code = e.error_code()
            );
            Err(e.into())
        }
    }
}

fn print_report(dist_dir: &Path, report: &BindReport) {
    if report.bound.is_empty() {
        println!(
            "{} No pages bound in {}",
            color::stale("⚠"),
            color::accent(&dist_dir.display().to_string())
        );
    } else {
        println!(
            "{} Bound {} page(s) in {}",
            color::fresh("✅"),
            report.bound.len(),
            color::accent(&dist_dir.display().to_string())
        );
    }

    for page in &report.bound {
        let state = if report.modified.contains(page) {
            color::fresh("injected")
        } else {
            color::muted("unchanged")
        };
        println!("   {} {}", color::bold(page), state);
    }

    for skipped in &report.skipped {
        println!(
            "   {} {}",
            color::bold(&skipped.name),
            color::stale(&format!("skipped: {}", describe_skip(skipped)))
        );
    }

    for file in &report.emitted {
        println!("   {} {}", color::muted("wrote"), file);
    }
}

fn describe_skip(skipped: &SkippedPage) -> String {
    match &skipped.reason {
        SkipReason::NoEntryChunk => "no entry chunk in manifest".to_string(),
        SkipReason::NoFingerprint { chunk } => format!("entry chunk '{}' has no hash", chunk),
        SkipReason::NoBodyTag => "no </body> tag".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_skip() {
        let skipped = SkippedPage {
            name: "legacy.html".to_string(),
            reason: SkipReason::NoFingerprint {
                chunk: "assets/legacy.js".to_string(),
            },
        };
        assert_eq!(
            describe_skip(&skipped),
            "entry chunk 'assets/legacy.js' has no hash"
        );
    }
}
