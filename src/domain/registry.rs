//! Dataset registry: which files a dataset needs and where it lives per cluster.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::validation::{all_files_exist, missing_files};
use super::{AppError, Cluster, DatasetId, DatasetKind};
use crate::adapters::ProcessEnvironment;
use crate::ports::Environment;

/// Immutable mapping from dataset to required files and per-cluster roots.
///
/// Populated once through [`RegistryBuilder`] (or a registry file) and only
/// read afterwards, so a shared reference can be used from any thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetRegistry {
    files: BTreeMap<DatasetId, Vec<String>>,
    roots: BTreeMap<DatasetId, BTreeMap<Cluster, PathBuf>>,
}

/// Outcome of checking one dataset on one cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageCheck {
    /// No root registered for this cluster.
    NotRegistered,
    /// A root is registered but the dataset has no required-files entry.
    UnknownFiles { root: PathBuf },
    /// Registered, but some required files are absent.
    Incomplete { root: PathBuf, missing: Vec<PathBuf> },
    /// Registered and every required file is present.
    Stored { root: PathBuf },
}

impl StorageCheck {
    pub fn is_stored(&self) -> bool {
        matches!(self, StorageCheck::Stored { .. })
    }
}

/// A consistency problem in the registry data itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryIssue {
    /// Roots are registered but the dataset's required files are not.
    RootsWithoutRequiredFiles { dataset: DatasetId, clusters: Vec<Cluster> },
    /// Required-files list is empty, so validation always succeeds.
    EmptyRequiredFiles { dataset: DatasetId },
    /// A registered root is not an absolute path.
    RelativeRoot { dataset: DatasetId, cluster: Cluster, root: PathBuf },
}

impl fmt::Display for RegistryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryIssue::RootsWithoutRequiredFiles { dataset, clusters } => {
                let names: Vec<&str> = clusters.iter().map(Cluster::name).collect();
                write!(
                    f,
                    "{}: has roots on [{}] but no required files",
                    dataset,
                    names.join(", ")
                )
            }
            RegistryIssue::EmptyRequiredFiles { dataset } => {
                write!(f, "{}: required files list is empty", dataset)
            }
            RegistryIssue::RelativeRoot { dataset, cluster, root } => {
                write!(f, "{}: root on {} is not absolute: {}", dataset, cluster, root.display())
            }
        }
    }
}

impl DatasetRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The registry compiled into dsroot.
    pub fn builtin() -> &'static DatasetRegistry {
        super::builtin::registry()
    }

    /// Whether the dataset appears anywhere in the registry.
    pub fn contains(&self, dataset: &DatasetId) -> bool {
        self.files.contains_key(dataset) || self.roots.contains_key(dataset)
    }

    /// Every dataset with any entry, sorted.
    pub fn datasets(&self) -> Vec<&DatasetId> {
        let ids: BTreeSet<&DatasetId> = self.files.keys().chain(self.roots.keys()).collect();
        ids.into_iter().collect()
    }

    /// Datasets with a registered root on `cluster`, sorted by id.
    pub fn datasets_on_cluster(&self, cluster: Cluster) -> Vec<(&DatasetId, &Path)> {
        self.roots
            .iter()
            .filter_map(|(dataset, roots)| {
                roots.get(&cluster).map(|root| (dataset, root.as_path()))
            })
            .collect()
    }

    /// Relative paths that must exist under a root for the dataset to be usable.
    pub fn required_files(&self, dataset: &DatasetId) -> Result<&[String], AppError> {
        self.files
            .get(dataset)
            .map(Vec::as_slice)
            .ok_or_else(|| AppError::UnknownDataset(dataset.clone()))
    }

    /// Registered root for the pair, without any fallback.
    pub fn registered_root(&self, dataset: &DatasetId, cluster: Cluster) -> Option<&Path> {
        self.roots.get(dataset).and_then(|roots| roots.get(&cluster)).map(PathBuf::as_path)
    }

    /// Root directory of `dataset` on `cluster`, or on the current cluster when
    /// `cluster` is `None`.
    ///
    /// A registered root is returned as-is, without validation. Otherwise
    /// `default` is returned when given. Environment errors from resolving the
    /// current cluster propagate even when a default is given.
    pub fn root_on_cluster(
        &self,
        dataset: &DatasetId,
        cluster: Option<Cluster>,
        default: Option<&Path>,
    ) -> Result<PathBuf, AppError> {
        self.root_on_cluster_in(ProcessEnvironment, dataset, cluster, default)
    }

    pub fn root_on_cluster_in<E: Environment>(
        &self,
        env: E,
        dataset: &DatasetId,
        cluster: Option<Cluster>,
        default: Option<&Path>,
    ) -> Result<PathBuf, AppError> {
        let cluster = match cluster {
            Some(cluster) => cluster,
            None => match Cluster::current_in(env)? {
                Some(cluster) => cluster,
                None => {
                    debug!("No current cluster while locating '{}'", dataset);
                    return default.map(Path::to_path_buf).ok_or(AppError::NoCurrentCluster);
                }
            },
        };

        if let Some(root) = self.registered_root(dataset, cluster) {
            debug!("Dataset '{}' on {} is at {}", dataset, cluster, root.display());
            return Ok(root.to_path_buf());
        }

        if let Some(default) = default {
            debug!(
                "Dataset '{}' has no root on {}; using default {}",
                dataset,
                cluster,
                default.display()
            );
            return Ok(default.to_path_buf());
        }

        if self.contains(dataset) {
            Err(AppError::DatasetNotAvailableOnCluster { dataset: dataset.clone(), cluster })
        } else {
            Err(AppError::UnknownDataset(dataset.clone()))
        }
    }

    /// Check registry entry and filesystem for one (dataset, cluster) pair.
    pub fn check_on_cluster(&self, dataset: &DatasetId, cluster: Cluster) -> StorageCheck {
        let Some(root) = self.registered_root(dataset, cluster) else {
            return StorageCheck::NotRegistered;
        };
        let root = root.to_path_buf();

        let Some(required) = self.files.get(dataset) else {
            warn!("Dataset '{}' has a root on {} but no required files registered", dataset, cluster);
            return StorageCheck::UnknownFiles { root };
        };

        let missing = missing_files(required, &root);
        if missing.is_empty() {
            StorageCheck::Stored { root }
        } else {
            debug!("Dataset '{}' on {} is missing {} file(s)", dataset, cluster, missing.len());
            StorageCheck::Incomplete { root, missing }
        }
    }

    /// True iff a root is registered for the pair and every required file is
    /// present under it.
    pub fn is_stored_on_cluster(&self, dataset: &DatasetId, cluster: Cluster) -> bool {
        match (self.registered_root(dataset, cluster), self.files.get(dataset)) {
            (Some(root), Some(required)) => all_files_exist(required, root),
            (Some(_), None) => {
                warn!(
                    "Dataset '{}' has a root on {} but no required files registered",
                    dataset, cluster
                );
                false
            }
            (None, _) => false,
        }
    }

    pub fn required_files_for<D: DatasetKind + ?Sized>(&self) -> Result<&[String], AppError> {
        self.required_files(&DatasetId::of::<D>())
    }

    pub fn root_for<D: DatasetKind + ?Sized>(
        &self,
        cluster: Option<Cluster>,
        default: Option<&Path>,
    ) -> Result<PathBuf, AppError> {
        self.root_on_cluster(&DatasetId::of::<D>(), cluster, default)
    }

    pub fn is_stored_for<D: DatasetKind + ?Sized>(&self, cluster: Cluster) -> bool {
        self.is_stored_on_cluster(&DatasetId::of::<D>(), cluster)
    }

    /// Registry-correctness problems, in dataset order.
    pub fn audit(&self) -> Vec<RegistryIssue> {
        let mut issues = Vec::new();

        for dataset in self.datasets() {
            let roots = self.roots.get(dataset);

            match (self.files.get(dataset), roots) {
                (None, Some(roots)) if !roots.is_empty() => {
                    issues.push(RegistryIssue::RootsWithoutRequiredFiles {
                        dataset: dataset.clone(),
                        clusters: roots.keys().copied().collect(),
                    });
                }
                (Some(files), _) if files.is_empty() => {
                    issues.push(RegistryIssue::EmptyRequiredFiles { dataset: dataset.clone() });
                }
                _ => {}
            }

            for (cluster, root) in roots.into_iter().flatten() {
                if !root.is_absolute() {
                    issues.push(RegistryIssue::RelativeRoot {
                        dataset: dataset.clone(),
                        cluster: *cluster,
                        root: root.clone(),
                    });
                }
            }
        }

        issues
    }

    /// A new registry with `overlay` applied on top of `self`.
    ///
    /// Required files are replaced per dataset; roots are replaced per
    /// (dataset, cluster) pair.
    pub fn merged_with(&self, overlay: &DatasetRegistry) -> DatasetRegistry {
        let mut merged = self.clone();
        for (dataset, files) in &overlay.files {
            merged.files.insert(dataset.clone(), files.clone());
        }
        for (dataset, roots) in &overlay.roots {
            let entry = merged.roots.entry(dataset.clone()).or_default();
            for (cluster, root) in roots {
                entry.insert(*cluster, root.clone());
            }
        }
        merged
    }
}

/// Incremental construction of a [`DatasetRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: DatasetRegistry,
}

impl RegistryBuilder {
    /// Set the required files of `dataset`, replacing any previous list.
    pub fn files<I, S>(mut self, dataset: DatasetId, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.registry.files.insert(dataset, files.into_iter().map(Into::into).collect());
        self
    }

    /// Set the root of `dataset` on `cluster`.
    pub fn root(mut self, dataset: DatasetId, cluster: Cluster, root: impl Into<PathBuf>) -> Self {
        self.registry.roots.entry(dataset).or_default().insert(cluster, root.into());
        self
    }

    /// Same root on several clusters.
    pub fn roots(mut self, dataset: DatasetId, clusters: &[Cluster], root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        for cluster in clusters {
            self = self.root(dataset.clone(), *cluster, root.clone());
        }
        self
    }

    pub fn kind_files<D, I, S>(self, files: I) -> Self
    where
        D: DatasetKind + ?Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files(DatasetId::of::<D>(), files)
    }

    pub fn kind_root<D: DatasetKind + ?Sized>(
        self,
        cluster: Cluster,
        root: impl Into<PathBuf>,
    ) -> Self {
        self.root(DatasetId::of::<D>(), cluster, root)
    }

    pub fn build(self) -> DatasetRegistry {
        self.registry
    }
}
