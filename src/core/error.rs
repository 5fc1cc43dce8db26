//! Error kinds raised by scaffolding steps

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that a step can raise while scaffolding
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("command `{command}` exited with code {code}: {stderr}")]
    ExternalCommand {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("command `{command}` timed out after {secs} seconds")]
    Timeout { command: String, secs: u64 },

    #[error("failed to start command `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("failed to parse {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("filesystem error at {}: {source}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Coarse classification of a [`ScaffoldError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ExternalCommandFailure,
    Timeout,
    TemplateNotFound,
    ConfigParseError,
    FileSystemError,
    InvalidOptions,
}

impl ScaffoldError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScaffoldError::ExternalCommand { .. } | ScaffoldError::Spawn { .. } => {
                ErrorKind::ExternalCommandFailure
            }
            ScaffoldError::Timeout { .. } => ErrorKind::Timeout,
            ScaffoldError::TemplateNotFound(_) => ErrorKind::TemplateNotFound,
            ScaffoldError::ConfigParse { .. } => ErrorKind::ConfigParseError,
            ScaffoldError::FileSystem { .. } => ErrorKind::FileSystemError,
            ScaffoldError::InvalidOptions(_) | ScaffoldError::Config(_) => ErrorKind::InvalidOptions,
        }
    }

    /// Wrap an io error with the path it happened at
    pub fn fs(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScaffoldError::FileSystem {
            path: path.into(),
            source,
        }
    }
}

pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
