use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("staleguard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Detect stale pages after a redeploy")
        .long_about("staleguard fingerprints each page of a build by its hashed entry chunk, emits the fingerprint next to the assets, and injects a small watcher script that polls it. When the deployed fingerprint drifts from the one a page loaded with, the page reloads (or asks first).")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}
