use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a run configuration.
///
/// All of these surface before a simulation is constructed, so no spacecraft
/// state has been touched when one is returned.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("unsupported atmospheric density model `{0}`")]
    UnsupportedModel(String),
    #[error("invalid start epoch: {0}")]
    InvalidEpoch(String),
}

impl ConfigError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// A physics precondition was violated during a force evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("position vector is at the planet center, gravity is undefined")]
    ZeroPosition,
    #[error("position vector has a non-finite component")]
    NonFinitePosition,
}

/// Errors raised by the CSV and plot writers.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("plotting error: {0}")]
    Plot(String),
    #[error("nothing to write: trajectory is empty")]
    EmptyTrajectory,
}
