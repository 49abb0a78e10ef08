use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a run before results are persisted. Each
/// variant carries its own user-facing message; `Other` is the fallback
/// for anything unanticipated.
#[derive(Debug, Error)]
pub enum EnumError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("error decoding YAML from {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("input validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("unexpected error: {0}")]
    Other(#[from] anyhow::Error),
}

/// One variant per rule of the minimal input shape, so every rule can be
/// violated and asserted on independently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("input YAML must be a mapping")]
    NotAMapping,

    #[error("input YAML must contain an 'ip' key")]
    MissingIp,

    #[error("'ip' must be a string")]
    IpNotAString,

    #[error("input YAML must contain a 'services' key")]
    MissingServices,

    #[error("'services' must be a list")]
    ServicesNotAList,

    #[error("'services' entry {index} must be a string")]
    ServiceNotAString { index: usize },
}
