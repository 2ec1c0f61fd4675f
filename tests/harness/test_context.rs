//! Shared testing harness for `dsroot` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that influence cluster detection; always cleared before a run.
const DETECTION_VARS: [&str; 5] =
    ["SLURM_TMPDIR", "SLURM_CLUSTER_NAME", "SCRATCH", "FAKE_SCRATCH", "FAKE_SLURM_TMPDIR"];

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    env: Vec<(String, String)>,
}

impl TestContext {
    /// Create a new isolated environment with no cluster detected.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root, env: Vec::new() }
    }

    /// Pretend to run inside a SLURM job on `cluster_name`.
    pub(crate) fn on_slurm(mut self, cluster_name: &str) -> Self {
        let tmpdir = self.mkdir("slurm_tmpdir");
        let scratch = self.mkdir("scratch");
        self.env.push(("SLURM_TMPDIR".into(), tmpdir.display().to_string()));
        self.env.push(("SLURM_CLUSTER_NAME".into(), cluster_name.into()));
        self.env.push(("SCRATCH".into(), scratch.display().to_string()));
        self
    }

    /// Enable the synthetic local cluster.
    pub(crate) fn with_local_overrides(mut self) -> Self {
        let scratch = self.mkdir("fake_scratch");
        let tmpdir = self.mkdir("fake_tmpdir");
        self.env.push(("FAKE_SCRATCH".into(), scratch.display().to_string()));
        self.env.push(("FAKE_SLURM_TMPDIR".into(), tmpdir.display().to_string()));
        self
    }

    pub(crate) fn path(&self) -> &Path {
        self.root.path()
    }

    /// Create a directory under the temp root and return its path.
    pub(crate) fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create an empty file under the temp root, creating parents.
    pub(crate) fn touch(&self, relative: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, "").expect("Failed to create test file");
        path
    }

    /// Write a registry file and return its path.
    pub(crate) fn write_registry(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("registry.toml");
        fs::write(&path, content).expect("Failed to write registry file");
        path
    }

    /// Build a command for invoking the compiled `dsroot` binary.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("dsroot").expect("Failed to locate dsroot binary");
        cmd.current_dir(self.root.path()).env_remove("RUST_LOG");
        for var in DETECTION_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd
    }
}
