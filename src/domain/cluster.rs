use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use log::debug;
use serde::{Serialize, Serializer};

use super::AppError;
use super::env_vars::{FAKE_SCRATCH, FAKE_SLURM_TMPDIR, SCRATCH, SLURM_TMPDIR};
use super::probe::EnvironmentProbe;
use crate::adapters::ProcessEnvironment;
use crate::ports::Environment;

/// The compute clusters dsroot knows the filesystem layout of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cluster {
    Mila,
    Cedar,
    Beluga,
    Graham,
    Narval,
    /// Synthetic cluster for local debugging, driven by `FAKE_SCRATCH` and
    /// `FAKE_SLURM_TMPDIR`.
    Local,
}

/// Environment variables backing a cluster's directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterEnvVars {
    pub scratch: &'static str,
    pub fast_dir: &'static str,
}

const SLURM_VARS: ClusterEnvVars = ClusterEnvVars { scratch: SCRATCH, fast_dir: SLURM_TMPDIR };
const LOCAL_VARS: ClusterEnvVars =
    ClusterEnvVars { scratch: FAKE_SCRATCH, fast_dir: FAKE_SLURM_TMPDIR };

/// A cluster's durable and job-local directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterDirectories {
    pub scratch: PathBuf,
    pub fast_dir: PathBuf,
}

impl Cluster {
    /// Every cluster, including the synthetic local one.
    pub const ALL: [Cluster; 6] = [
        Cluster::Mila,
        Cluster::Cedar,
        Cluster::Beluga,
        Cluster::Graham,
        Cluster::Narval,
        Cluster::Local,
    ];

    /// Real clusters, the only ones a scheduler can declare.
    pub const KNOWN: [Cluster; 5] =
        [Cluster::Mila, Cluster::Cedar, Cluster::Beluga, Cluster::Graham, Cluster::Narval];

    /// Canonical lowercase identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Cluster::Mila => "mila",
            Cluster::Cedar => "cedar",
            Cluster::Beluga => "beluga",
            Cluster::Graham => "graham",
            Cluster::Narval => "narval",
            Cluster::Local => "_local",
        }
    }

    /// Parse a cluster from its identifier, ignoring case.
    pub fn from_name(name: &str) -> Option<Cluster> {
        Self::ALL.into_iter().find(|cluster| cluster.name().eq_ignore_ascii_case(name))
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Cluster::Local)
    }

    /// Which variables hold this cluster's directories.
    pub fn env_vars(&self) -> ClusterEnvVars {
        match self {
            Cluster::Local => LOCAL_VARS,
            Cluster::Mila | Cluster::Cedar | Cluster::Beluga | Cluster::Graham | Cluster::Narval => {
                SLURM_VARS
            }
        }
    }

    /// The cluster this process runs on, read from the live process environment.
    pub fn current() -> Result<Option<Cluster>, AppError> {
        Self::current_in(ProcessEnvironment)
    }

    /// The cluster described by `env`.
    ///
    /// Outside a scheduler job this is `Local` when both override variables are
    /// set and `None` otherwise. Inside a job, a missing or unrecognized
    /// cluster name is an error rather than `None`.
    pub fn current_in<E: Environment>(env: E) -> Result<Option<Cluster>, AppError> {
        let probe = EnvironmentProbe::new(env);

        if !probe.is_scheduler_managed() {
            if probe.has_local_overrides() {
                debug!("No scheduler job, local overrides present: using {}", Cluster::Local);
                return Ok(Some(Cluster::Local));
            }
            debug!("No scheduler job and no local overrides: no current cluster");
            return Ok(None);
        }

        let name = probe.scheduler_declared_cluster_name().ok_or_else(|| {
            AppError::MisconfiguredCluster(
                "running inside a SLURM job but SLURM_CLUSTER_NAME is not set".into(),
            )
        })?;

        let cluster = Self::KNOWN
            .into_iter()
            .find(|cluster| cluster.name().eq_ignore_ascii_case(&name))
            .ok_or_else(|| {
                AppError::MisconfiguredCluster(format!(
                    "SLURM reports cluster '{}', which is not a known cluster",
                    name
                ))
            })?;

        debug!("Detected cluster {} from SLURM_CLUSTER_NAME='{}'", cluster, name);
        Ok(Some(cluster))
    }

    /// Durable, writable directory for checkpoints and persistent data.
    pub fn scratch(&self) -> Result<PathBuf, AppError> {
        self.scratch_in(ProcessEnvironment)
    }

    /// Fast job-local directory, valid only for the lifetime of the current job.
    pub fn fast_dir(&self) -> Result<PathBuf, AppError> {
        self.fast_dir_in(ProcessEnvironment)
    }

    pub fn scratch_in<E: Environment>(&self, env: E) -> Result<PathBuf, AppError> {
        read_dir_var(&env, self.env_vars().scratch)
    }

    pub fn fast_dir_in<E: Environment>(&self, env: E) -> Result<PathBuf, AppError> {
        read_dir_var(&env, self.env_vars().fast_dir)
    }

    /// Both directories, failing on the first unset variable.
    pub fn directories(&self) -> Result<ClusterDirectories, AppError> {
        self.directories_in(ProcessEnvironment)
    }

    pub fn directories_in<E: Environment>(&self, env: E) -> Result<ClusterDirectories, AppError> {
        Ok(ClusterDirectories { scratch: self.scratch_in(&env)?, fast_dir: self.fast_dir_in(&env)? })
    }
}

fn read_dir_var<E: Environment>(env: &E, var: &str) -> Result<PathBuf, AppError> {
    env.var_os(var).map(PathBuf::from).ok_or_else(|| AppError::missing_env(var))
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Cluster {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cluster::from_name(s).ok_or_else(|| AppError::InvalidCluster(s.to_string()))
    }
}

impl Serialize for Cluster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
