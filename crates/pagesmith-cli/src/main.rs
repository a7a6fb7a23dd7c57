//! Pagesmith - build the site pages from content/ and templates/
//!
//! Usage:
//!   pagesmith [OPTIONS] [COMMAND]
//!
//! Commands:
//!   build     Regenerate every page (default)
//!   watch     Build, then rebuild on change
//!   render    Render one prose document
//!   events    Parse one event document

use std::process;

use clap::Parser;
use pagesmith_cli::cli::{CliArgs, Command};
use pagesmith_cli::error::CliError;
use pagesmith_cli::{config, inspect, site, telemetry, watch};
use tracing::info;

fn main() {
    let args = CliArgs::parse();

    if let Err(err) = run(args) {
        report_error(&err);
        process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<(), CliError> {
    let settings = config::load(&args)?;
    telemetry::init(&settings.logging)?;

    match args.command.unwrap_or(Command::Build) {
        Command::Build => {
            let report = site::build(&settings.paths)?;
            info!(
                pages = report.pages.len(),
                copied_video = report.copied_video,
                "done"
            );
            Ok(())
        }
        Command::Watch => watch::run(&settings),
        Command::Render(render) => inspect::cmd_render(&render),
        Command::Events(events) => inspect::cmd_events(&events),
    }
}

fn report_error(err: &CliError) {
    if tracing::dispatcher::has_been_set() {
        tracing::error!(error = %err, "pagesmith failed");
    } else {
        eprintln!("error: {err}");
    }
}
