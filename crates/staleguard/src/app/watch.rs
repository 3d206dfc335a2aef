use clap::{Arg, Command};

use super::build::watcher_args;

pub fn watch_command() -> Command {
    let command = Command::new("watch")
        .about("Watch a deployed fingerprint and report when the page would reload")
        .long_about("Runs the page watcher headless: polls the fingerprint URL, asks on the terminal when it drifts, and exits once a reload is decided. With --dist, removed scripts and stylesheets in that directory trigger an immediate check.")
        .arg(
            Arg::new("url")
                .long("url")
                .short('u')
                .help("Absolute URL of the page's fingerprint file, e.g. https://example.com/assets/index.hash")
                .value_name("URL")
                .required(true),
        )
        .arg(
            Arg::new("dist")
                .long("dist")
                .short('d')
                .help("Local build output to watch for removed assets")
                .value_name("DIR"),
        );

    watcher_args(command)
}
