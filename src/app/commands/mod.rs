//! Command implementations behind the CLI.
//!
//! Each command returns a plain outcome value; printing is left to `app::cli`.

pub mod audit;
pub mod check;
pub mod cluster;
pub mod list;
pub mod locate;
pub mod verify;

use crate::domain::{AppError, Cluster};
use crate::ports::Environment;

/// The explicit cluster if given, otherwise the detected one.
///
/// Fails with `NoCurrentCluster` when nothing could be detected.
pub(crate) fn resolve_cluster<E: Environment>(
    env: &E,
    cluster: Option<Cluster>,
) -> Result<Cluster, AppError> {
    match cluster {
        Some(cluster) => Ok(cluster),
        None => Cluster::current_in(env)?.ok_or(AppError::NoCurrentCluster),
    }
}
