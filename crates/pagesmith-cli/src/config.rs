//! Configuration layer: typed settings with layered precedence
//! (defaults → `pagesmith.toml` → `--config-file` → environment → CLI).

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::cli::{CliArgs, Overrides};

const LOCAL_CONFIG_BASENAME: &str = "pagesmith";
const ENV_PREFIX: &str = "PAGESMITH";
const DEFAULT_CONTENT_DIR: &str = "content";
const DEFAULT_TEMPLATES_DIR: &str = "templates";
const DEFAULT_OUTPUT_DIR: &str = "site";
const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub paths: PathSettings,
    pub watch: WatchSettings,
    pub logging: LoggingSettings,
}

/// Resolved locations, all anchored at `root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSettings {
    pub root: PathBuf,
    pub content_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Homepage video copied into the site when present.
    pub video_source: Option<PathBuf>,
}

impl PathSettings {
    /// Settings with the default layout under `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            content_dir: root.join(DEFAULT_CONTENT_DIR),
            templates_dir: root.join(DEFAULT_TEMPLATES_DIR),
            output_dir: root.join(DEFAULT_OUTPUT_DIR),
            video_source: None,
            root,
        }
    }

    /// Directories whose changes trigger a rebuild.
    pub fn watched_dirs(&self) -> Vec<PathBuf> {
        vec![self.content_dir.clone(), self.templates_dir.clone()]
    }
}

#[derive(Debug, Clone)]
pub struct WatchSettings {
    pub poll_interval: Duration,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Compact,
}

/// Load settings using the configured precedence.
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let root = cli
        .overrides
        .root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let mut builder = Config::builder().add_source(
        File::with_name(&root.join(LOCAL_CONFIG_BASENAME).to_string_lossy()).required(false),
    );

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_overrides(&cli.overrides);

    Settings::from_raw(raw, &root)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    paths: RawPathSettings,
    watch: RawWatchSettings,
    logging: RawLoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawPathSettings {
    content_dir: Option<PathBuf>,
    templates_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    video_source: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawWatchSettings {
    poll_interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(dir) = overrides.content_dir.clone() {
            self.paths.content_dir = Some(dir);
        }
        if let Some(dir) = overrides.templates_dir.clone() {
            self.paths.templates_dir = Some(dir);
        }
        if let Some(dir) = overrides.output_dir.clone() {
            self.paths.output_dir = Some(dir);
        }
        if let Some(source) = overrides.video_source.clone() {
            self.paths.video_source = Some(source);
        }
        if let Some(ms) = overrides.poll_interval_ms {
            self.watch.poll_interval_ms = Some(ms);
        }
        if let Some(level) = overrides.log_level.clone() {
            self.logging.level = Some(level);
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings, root: &Path) -> Result<Self, LoadError> {
        let RawSettings {
            paths,
            watch,
            logging,
        } = raw;

        Ok(Self {
            paths: build_path_settings(paths, root),
            watch: build_watch_settings(watch)?,
            logging: build_logging_settings(logging)?,
        })
    }
}

fn build_path_settings(paths: RawPathSettings, root: &Path) -> PathSettings {
    let resolve = |value: Option<PathBuf>, default: &str| {
        root.join(value.unwrap_or_else(|| PathBuf::from(default)))
    };

    let video_source = paths.video_source.and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| root.join(shellexpand::tilde(trimmed).into_owned()))
    });

    PathSettings {
        root: root.to_path_buf(),
        content_dir: resolve(paths.content_dir, DEFAULT_CONTENT_DIR),
        templates_dir: resolve(paths.templates_dir, DEFAULT_TEMPLATES_DIR),
        output_dir: resolve(paths.output_dir, DEFAULT_OUTPUT_DIR),
        video_source,
    }
}

fn build_watch_settings(watch: RawWatchSettings) -> Result<WatchSettings, LoadError> {
    let millis = watch.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS);
    if millis == 0 {
        return Err(LoadError::invalid(
            "watch.poll_interval_ms",
            "must be greater than zero",
        ));
    }

    Ok(WatchSettings {
        poll_interval: Duration::from_millis(millis),
    })
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_under_root() {
        let settings = Settings::from_raw(RawSettings::default(), Path::new("/srv/site"))
            .expect("valid settings");

        assert_eq!(settings.paths, PathSettings::with_root("/srv/site"));
        assert_eq!(settings.paths.content_dir, Path::new("/srv/site/content"));
        assert_eq!(settings.paths.output_dir, Path::new("/srv/site/site"));
        assert_eq!(settings.watch.poll_interval, Duration::from_millis(500));
        assert_eq!(settings.logging.level, LevelFilter::INFO);
        assert_eq!(settings.logging.format, LogFormat::Compact);
    }

    #[test]
    fn cli_overrides_take_highest_precedence() {
        let mut raw = RawSettings::default();
        raw.paths.output_dir = Some(PathBuf::from("public"));
        raw.logging.level = Some("info".to_string());

        let overrides = Overrides {
            output_dir: Some(PathBuf::from("dist")),
            log_level: Some("debug".to_string()),
            log_json: Some(true),
            ..Default::default()
        };

        raw.apply_overrides(&overrides);
        let settings = Settings::from_raw(raw, Path::new("/p")).expect("valid settings");

        assert_eq!(settings.paths.output_dir, Path::new("/p/dist"));
        assert_eq!(settings.logging.level, LevelFilter::DEBUG);
        assert_eq!(settings.logging.format, LogFormat::Json);
    }

    #[test]
    fn absolute_paths_ignore_root() {
        let mut raw = RawSettings::default();
        raw.paths.content_dir = Some(PathBuf::from("/elsewhere/content"));

        let settings = Settings::from_raw(raw, Path::new("/p")).expect("valid settings");
        assert_eq!(settings.paths.content_dir, Path::new("/elsewhere/content"));
    }

    #[test]
    fn blank_video_source_is_disabled() {
        let mut raw = RawSettings::default();
        raw.paths.video_source = Some("   ".to_string());

        let settings = Settings::from_raw(raw, Path::new("/p")).expect("valid settings");
        assert_eq!(settings.paths.video_source, None);
    }

    #[test]
    fn video_source_is_resolved_against_root() {
        let mut raw = RawSettings::default();
        raw.paths.video_source = Some("media/home.mp4".to_string());

        let settings = Settings::from_raw(raw, Path::new("/p")).expect("valid settings");
        assert_eq!(
            settings.paths.video_source.as_deref(),
            Some(Path::new("/p/media/home.mp4"))
        );
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let mut raw = RawSettings::default();
        raw.watch.poll_interval_ms = Some(0);

        let err = Settings::from_raw(raw, Path::new(".")).expect_err("must fail");
        assert!(matches!(
            err,
            LoadError::Invalid {
                key: "watch.poll_interval_ms",
                ..
            }
        ));
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        let mut raw = RawSettings::default();
        raw.logging.level = Some("loud".to_string());

        let err = Settings::from_raw(raw, Path::new(".")).expect_err("must fail");
        assert!(matches!(err, LoadError::Invalid { key: "logging.level", .. }));
    }

    #[test]
    fn watched_dirs_are_content_and_templates() {
        let paths = PathSettings::with_root("/p");
        assert_eq!(
            paths.watched_dirs(),
            vec![PathBuf::from("/p/content"), PathBuf::from("/p/templates")]
        );
    }
}
