//! Names of the environment variables dsroot reads.

/// Job-local temporary directory; its presence means "inside a SLURM job".
pub const SLURM_TMPDIR: &str = "SLURM_TMPDIR";

/// Cluster name exported by SLURM inside a job.
pub const SLURM_CLUSTER_NAME: &str = "SLURM_CLUSTER_NAME";

/// Durable shared storage on every real cluster.
pub const SCRATCH: &str = "SCRATCH";

/// Stand-in for `SCRATCH` on the synthetic local cluster.
pub const FAKE_SCRATCH: &str = "FAKE_SCRATCH";

/// Stand-in for `SLURM_TMPDIR` on the synthetic local cluster.
pub const FAKE_SLURM_TMPDIR: &str = "FAKE_SLURM_TMPDIR";
