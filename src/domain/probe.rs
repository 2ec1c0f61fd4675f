//! Scheduler detection from environment variables.

use log::debug;

use super::env_vars::{FAKE_SCRATCH, FAKE_SLURM_TMPDIR, SLURM_CLUSTER_NAME, SLURM_TMPDIR};
use crate::ports::Environment;

/// Answers "are we in a scheduler job, and on which cluster" from an environment.
///
/// Holds no state of its own; every query reads the environment again.
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentProbe<E> {
    env: E,
}

impl<E: Environment> EnvironmentProbe<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// True iff the scheduler's job-temp-directory variable is set.
    pub fn is_scheduler_managed(&self) -> bool {
        let managed = self.env.is_set(SLURM_TMPDIR);
        debug!("{} set: {}", SLURM_TMPDIR, managed);
        managed
    }

    /// Cluster name declared by the scheduler, `None` when the variable is absent.
    pub fn scheduler_declared_cluster_name(&self) -> Option<String> {
        self.env.var(SLURM_CLUSTER_NAME)
    }

    /// True iff both local override variables are set.
    pub fn has_local_overrides(&self) -> bool {
        self.env.is_set(FAKE_SCRATCH) && self.env.is_set(FAKE_SLURM_TMPDIR)
    }
}
