use std::{io, path::PathBuf};

/// Errors that abort a transcoding run. None of them leave partial output behind.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse error")]
    Parse(#[source] serde_json::Error),

    #[error("schema error")]
    Schema(#[from] SchemaError),

    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

/// The document is valid JSON but does not have the shape of a product catalog.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("expected a list of releases")]
    InvalidDocument(#[source] serde_json::Error),

    #[error("catalog contains no releases")]
    NoRelease,

    #[error("malformed release")]
    InvalidRelease(#[source] serde_json::Error),

    #[error("malformed product record at index {index}")]
    InvalidProduct {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
