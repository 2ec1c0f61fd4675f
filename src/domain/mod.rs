mod builtin;
pub mod cluster;
pub mod dataset_id;
pub mod datasets;
pub mod env_vars;
pub mod error;
pub mod probe;
pub mod registry;
mod registry_file;
pub mod validation;

pub use cluster::{Cluster, ClusterDirectories, ClusterEnvVars};
pub use dataset_id::{DatasetId, DatasetKind};
pub use error::AppError;
pub use probe::EnvironmentProbe;
pub use registry::{DatasetRegistry, RegistryBuilder, RegistryIssue, StorageCheck};
pub use validation::{all_files_exist, missing_files};
