use std::collections::HashMap;
use std::ffi::OsString;

use crate::ports::Environment;

/// In-memory environment for detection tests.
#[derive(Debug, Clone, Default)]
pub struct FakeEnvironment {
    vars: HashMap<String, OsString>,
}

impl FakeEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), OsString::from(value));
    }

    pub fn remove(&mut self, key: &str) {
        self.vars.remove(key);
    }

    /// Scheduler job on the named cluster, with both directory variables set.
    pub fn slurm_job(cluster_name: &str) -> Self {
        Self::new()
            .with("SLURM_TMPDIR", "/tmp/job")
            .with("SLURM_CLUSTER_NAME", cluster_name)
            .with("SCRATCH", "/scratch/user")
    }
}

impl Environment for FakeEnvironment {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}
