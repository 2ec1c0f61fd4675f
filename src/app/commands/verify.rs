use std::path::{Path, PathBuf};

use crate::domain::missing_files;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOutcome {
    pub root: PathBuf,
    pub missing: Vec<PathBuf>,
}

impl VerifyOutcome {
    pub fn exit_code(&self) -> i32 {
        if self.missing.is_empty() { 0 } else { 1 }
    }
}

/// Validate a manually supplied root against a list of required files.
pub fn execute(root: &Path, required_files: &[String]) -> VerifyOutcome {
    VerifyOutcome { root: root.to_path_buf(), missing: missing_files(required_files, root) }
}
