use clap::{Arg, ArgAction, Command};

/// Watcher tuning flags shared by `bind` and `watch`.
pub(super) fn watcher_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("interval")
                .long("interval")
                .help("Poll interval in milliseconds (overrides config, default: 600000)")
                .value_name("MS")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("confirm-text")
                .long("confirm-text")
                .help("Prompt shown before reloading (overrides config)")
                .value_name("TEXT"),
        )
        .arg(
            Arg::new("force-update")
                .long("force-update")
                .help("Reload without asking when a new build is detected")
                .action(ArgAction::SetTrue),
        )
}

pub fn bind_command() -> Command {
    let command = Command::new("bind")
        .about("Emit fingerprint artifacts and inject the watcher into built pages")
        .long_about("Run once after the build has finished writing its output. Safe to re-run: pages that already carry the watcher tag are left unchanged.")
        .arg(
            Arg::new("dist")
                .long("dist")
                .short('d')
                .help("Build output directory (overrides config, default: dist)")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("manifest")
                .long("manifest")
                .help("Build manifest, relative to the output directory (default: .vite/manifest.json)")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("base")
                .long("base")
                .help("Public base path the pages are served under (overrides config, default: /)")
                .value_name("BASE"),
        );

    watcher_args(command).arg(
        Arg::new("json")
            .long("json")
            .help("Output the bind report in JSON format")
            .action(ArgAction::SetTrue),
    )
}
