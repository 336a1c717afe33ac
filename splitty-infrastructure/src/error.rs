use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("The file '{}' was not found.", .path.display())]
    InputNotFound { path: PathBuf },
    #[error("The configuration file '{}' was not found.", .path.display())]
    ConfigNotFound { path: PathBuf },
    #[error("The configuration file is not valid JSON.")]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse CSV input: {0}")]
    Csv(#[from] csv::Error),
}

impl InfraError {
    pub(crate) fn io(path: PathBuf, source: io::Error, not_found: fn(PathBuf) -> Self) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            not_found(path)
        } else {
            InfraError::Io { path, source }
        }
    }
}
