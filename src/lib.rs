//! dsroot: locate machine-learning datasets on known HPC clusters.
//!
//! Training code asks for the root directory of a dataset on the cluster it is
//! running on and passes it to the dataset's constructor, with downloading
//! disabled. The registry only knows where files are and which files must be
//! there; it never opens or copies them.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

pub use domain::datasets;
pub use domain::{
    AppError, Cluster, ClusterDirectories, DatasetId, DatasetKind, DatasetRegistry,
    EnvironmentProbe, RegistryBuilder, RegistryIssue, StorageCheck, all_files_exist,
    missing_files,
};

/// The cluster this process runs on, or `None` outside any known cluster.
pub fn current_cluster() -> Result<Option<Cluster>, AppError> {
    Cluster::current()
}

/// Root of dataset type `D` on the current cluster, from the builtin registry.
///
/// `default` is returned when the dataset has no root on the current cluster
/// or when no cluster is detected.
pub fn locate_dataset_root<D: DatasetKind + ?Sized>(
    default: Option<&Path>,
) -> Result<PathBuf, AppError> {
    DatasetRegistry::builtin().root_for::<D>(None, default)
}

/// Whether dataset type `D` is fully present on `cluster`, per the builtin registry.
pub fn is_stored_on_cluster<D: DatasetKind + ?Sized>(cluster: Cluster) -> bool {
    DatasetRegistry::builtin().is_stored_for::<D>(cluster)
}
