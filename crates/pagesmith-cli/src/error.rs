use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::LoadError;

/// Failures while reading sources or writing the generated site.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to read `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to copy video from `{from}` to `{to}`: {source}")]
    CopyVideo {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode page data: {0}")]
    Encode(#[from] serde_json::Error),
}

impl BuildError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Top-level error reported by the binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error("failed to install tracing subscriber: {0}")]
    Telemetry(String),
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}
