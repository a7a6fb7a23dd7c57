use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, builder::BoolishValueParser};

/// Command-line arguments for the `pagesmith` binary.
#[derive(Debug, Parser)]
#[command(
    name = "pagesmith",
    version,
    about = "Build the site pages from content/ and templates/"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "PAGESMITH_CONFIG_FILE",
        value_name = "PATH",
        global = true
    )]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Regenerate every page (default).
    Build,
    /// Build, then rebuild whenever content or templates change.
    Watch,
    /// Render one prose document and print its title and paragraphs.
    Render(RenderArgs),
    /// Parse one event document and print its records or cards.
    Events(EventsArgs),
}

#[derive(Debug, Args, Clone)]
pub struct RenderArgs {
    /// Document to render.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print JSON instead of text.
    #[arg(short = 'j', long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct EventsArgs {
    /// Event document to parse.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print JSON instead of text.
    #[arg(short = 'j', long, conflicts_with = "html")]
    pub json: bool,

    /// Print rendered card markup instead of records.
    #[arg(long)]
    pub html: bool,

    /// Placeholder prepended to site-absolute links in card markup.
    #[arg(long = "base", value_name = "TOKEN", default_value = pagesmith_core::events::BASE_TOKEN)]
    pub base_token: String,
}

/// Settings that can be overridden from the command line.
#[derive(Debug, Args, Default, Clone)]
pub struct Overrides {
    /// Project root; relative paths are resolved against it.
    #[arg(long, value_name = "PATH", global = true)]
    pub root: Option<PathBuf>,

    /// Override the content directory.
    #[arg(long = "content-dir", value_name = "PATH", global = true)]
    pub content_dir: Option<PathBuf>,

    /// Override the templates directory.
    #[arg(long = "templates-dir", value_name = "PATH", global = true)]
    pub templates_dir: Option<PathBuf>,

    /// Override the output directory.
    #[arg(long = "output-dir", value_name = "PATH", global = true)]
    pub output_dir: Option<PathBuf>,

    /// Override the homepage video source file.
    #[arg(long = "video-source", value_name = "PATH", global = true)]
    pub video_source: Option<String>,

    /// Override the watch poll interval.
    #[arg(long = "poll-interval-ms", value_name = "MILLIS", global = true)]
    pub poll_interval_ms: Option<u64>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}
