use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring, generating or persisting a dataset.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("cannot pick from an empty {0} pool")]
    EmptyPool(&'static str),

    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = GenerateError> = std::result::Result<T, E>;
