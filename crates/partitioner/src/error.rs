use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PartitionError {
    #[error("Filesystem error at '{path}': {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: '{path}'")]
    NotFound { path: PathBuf },

    #[error("IO error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Number of parts must be at least 1, got {0}")]
    InvalidPartCount(usize),

    #[error("Shard cursor overruns the sample set: needs {needed} lines, have {available}")]
    ShardOverrun { needed: usize, available: usize },

    #[error("Configuration error in '{path}': {message}")]
    Config { path: PathBuf, message: String },

    #[error("Invalid setting '{field}': {message}")]
    InvalidSetting { field: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, PartitionError>;

impl PartitionError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Maps an open/read error, promoting `NotFound` to its own variant.
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
