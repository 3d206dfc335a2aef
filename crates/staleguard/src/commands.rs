use clap::ArgMatches;
use tracing::{debug, error};

mod bind;
mod completions;
mod helpers;
mod watch;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    debug!(
        event = "cli.app_started",
        version = env!("CARGO_PKG_VERSION")
    );

    match matches.subcommand() {
        Some(("bind", sub_matches)) => bind::handle_bind_command(sub_matches),
        Some(("watch", sub_matches)) => watch::handle_watch_command(sub_matches),
        Some(("completions", sub_matches)) => completions::handle_completions_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
