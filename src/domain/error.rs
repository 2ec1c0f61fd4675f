use std::io;

use thiserror::Error;

use super::{Cluster, DatasetId};

/// Library-wide error type for dsroot operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A directory variable required by a cluster accessor is unset.
    #[error("Environment variable '{var}' is not set")]
    MissingEnvironment { var: String },

    /// Scheduler environment present but the cluster name is missing or unrecognized.
    #[error("Misconfigured cluster: {0}")]
    MisconfiguredCluster(String),

    /// Dataset has no entry in the registry at all.
    #[error("Dataset '{0}' is not registered")]
    UnknownDataset(DatasetId),

    /// Dataset is registered but has no root on the requested cluster.
    #[error("Dataset '{dataset}' is not available on cluster '{cluster}'")]
    DatasetNotAvailableOnCluster { dataset: DatasetId, cluster: Cluster },

    /// Automatic cluster resolution found no cluster and no default root was given.
    #[error("Not running on a known cluster; pass an explicit cluster or a default root")]
    NoCurrentCluster,

    /// Dataset identifier is invalid.
    #[error(
        "Invalid dataset identifier '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidDatasetId(String),

    /// Cluster name does not match any known cluster.
    #[error("Invalid cluster '{0}': must be one of mila, cedar, beluga, graham, narval, _local")]
    InvalidCluster(String),

    /// Registry data file does not exist.
    #[error("Registry file not found: {0}")]
    RegistryFileMissing(String),

    /// Registry data file is structurally valid TOML but semantically wrong.
    #[error("Invalid registry: {0}")]
    InvalidRegistry(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn missing_env<S: Into<String>>(var: S) -> Self {
        AppError::MissingEnvironment { var: var.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers that branch on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::MissingEnvironment { .. }
            | AppError::UnknownDataset(_)
            | AppError::DatasetNotAvailableOnCluster { .. }
            | AppError::NoCurrentCluster
            | AppError::RegistryFileMissing(_) => io::ErrorKind::NotFound,
            AppError::InvalidDatasetId(_)
            | AppError::InvalidCluster(_)
            | AppError::InvalidRegistry(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::MisconfiguredCluster(_) => io::ErrorKind::Other,
        }
    }

    /// True for errors that mean the environment cannot be trusted at all.
    ///
    /// These always propagate, even when a caller supplied a fallback root.
    pub fn is_environment_error(&self) -> bool {
        matches!(self, AppError::MissingEnvironment { .. } | AppError::MisconfiguredCluster(_))
    }
}
