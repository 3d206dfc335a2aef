mod build;
mod global;
mod misc;
mod watch;


use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(build::bind_command())
        .subcommand(watch::watch_command())
        .subcommand(misc::completions_command())
}
