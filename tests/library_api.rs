//! Public API against the real process environment.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use dsroot::datasets::{Cifar10, Mnist, Svhn};
use dsroot::{AppError, Cluster, DatasetId, DatasetRegistry};
use serial_test::serial;
use tempfile::TempDir;

struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl EnvVarGuard {
    fn set<K: Into<String>, V: AsRef<OsStr>>(key: K, value: V) -> Self {
        let key = key.into();
        let original = std::env::var_os(&key);
        unsafe { std::env::set_var(&key, value) };
        Self { key, original }
    }

    fn remove<K: Into<String>>(key: K) -> Self {
        let key = key.into();
        let original = std::env::var_os(&key);
        unsafe { std::env::remove_var(&key) };
        Self { key, original }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(original) = self.original.as_ref() {
            unsafe { std::env::set_var(&self.key, original) };
        } else {
            unsafe { std::env::remove_var(&self.key) };
        }
    }
}

/// Clear every detection variable for the lifetime of the returned guards.
fn clean_env() -> Vec<EnvVarGuard> {
    ["SLURM_TMPDIR", "SLURM_CLUSTER_NAME", "SCRATCH", "FAKE_SCRATCH", "FAKE_SLURM_TMPDIR"]
        .into_iter()
        .map(EnvVarGuard::remove)
        .collect()
}

#[test]
#[serial]
fn current_cluster_follows_environment_changes() {
    let _clean = clean_env();
    assert_eq!(dsroot::current_cluster().unwrap(), None);

    let _scratch = EnvVarGuard::set("FAKE_SCRATCH", "/tmp/s");
    assert_eq!(dsroot::current_cluster().unwrap(), None);

    let _tmp = EnvVarGuard::set("FAKE_SLURM_TMPDIR", "/tmp/f");
    assert_eq!(dsroot::current_cluster().unwrap(), Some(Cluster::Local));

    let _job = EnvVarGuard::set("SLURM_TMPDIR", "/tmp/job");
    assert!(matches!(dsroot::current_cluster(), Err(AppError::MisconfiguredCluster(_))));

    let _name = EnvVarGuard::set("SLURM_CLUSTER_NAME", "Beluga");
    assert_eq!(dsroot::current_cluster().unwrap(), Some(Cluster::Beluga));
}

#[test]
#[serial]
fn scratch_and_fast_dir_need_their_variables() {
    let _clean = clean_env();
    assert!(matches!(
        Cluster::Mila.scratch(),
        Err(AppError::MissingEnvironment { var }) if var == "SCRATCH"
    ));
    assert!(matches!(
        Cluster::Local.fast_dir(),
        Err(AppError::MissingEnvironment { var }) if var == "FAKE_SLURM_TMPDIR"
    ));

    let _scratch = EnvVarGuard::set("SCRATCH", "/scratch/me");
    assert_eq!(Cluster::Mila.scratch().unwrap(), PathBuf::from("/scratch/me"));
    assert!(Cluster::Mila.fast_dir().is_err());
}

#[test]
#[serial]
fn locate_builtin_dataset_types() {
    let _clean = clean_env();
    let _job = EnvVarGuard::set("SLURM_TMPDIR", "/tmp/job");
    let _name = EnvVarGuard::set("SLURM_CLUSTER_NAME", "cedar");

    assert_eq!(
        dsroot::locate_dataset_root::<Cifar10>(None).unwrap(),
        PathBuf::from("/project/rpp-bengioy/data/curated/cifar10")
    );
    assert!(matches!(
        dsroot::locate_dataset_root::<Svhn>(None),
        Err(AppError::DatasetNotAvailableOnCluster { cluster: Cluster::Cedar, .. })
    ));
    assert_eq!(
        dsroot::locate_dataset_root::<Svhn>(Some(Path::new("/fallback"))).unwrap(),
        PathBuf::from("/fallback")
    );
}

#[test]
#[serial]
fn default_does_not_mask_a_misconfigured_cluster() {
    let _clean = clean_env();
    let _job = EnvVarGuard::set("SLURM_TMPDIR", "/tmp/job");
    let _name = EnvVarGuard::set("SLURM_CLUSTER_NAME", "unknownsite");

    let err = dsroot::locate_dataset_root::<Mnist>(Some(Path::new("/fallback"))).unwrap_err();
    assert!(matches!(err, AppError::MisconfiguredCluster(_)));
}

#[test]
fn registered_pairs_agree_with_direct_validation() {
    let dir = TempDir::new().unwrap();
    let complete = dir.path().join("complete");
    let partial = dir.path().join("partial");
    fs::create_dir_all(complete.join("images")).unwrap();
    fs::write(complete.join("labels.csv"), "").unwrap();
    fs::create_dir_all(partial.join("images")).unwrap();

    let d = DatasetId::new("d").unwrap();
    let registry = DatasetRegistry::builder()
        .files(d.clone(), ["images/", "labels.csv"])
        .root(d.clone(), Cluster::Mila, &complete)
        .root(d.clone(), Cluster::Graham, &partial)
        .build();

    for cluster in [Cluster::Mila, Cluster::Graham] {
        let root = registry.root_on_cluster(&d, Some(cluster), None).unwrap();
        let direct = dsroot::all_files_exist(registry.required_files(&d).unwrap(), &root);
        assert_eq!(registry.is_stored_on_cluster(&d, cluster), direct);
    }
    assert!(registry.is_stored_on_cluster(&d, Cluster::Mila));
    assert!(!registry.is_stored_on_cluster(&d, Cluster::Graham));
}

#[test]
fn builtin_is_never_stored_without_files_on_disk() {
    // Builtin roots point at cluster filesystems that do not exist here.
    if Path::new("/network/datasets/torchvision").exists() {
        return;
    }
    assert!(!dsroot::is_stored_on_cluster::<Mnist>(Cluster::Mila));
}
