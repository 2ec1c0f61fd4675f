use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{AppError, Cluster, ClusterDirectories};
use crate::ports::Environment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterReport {
    pub cluster: Option<Cluster>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directories: Option<ClusterDirectories>,
}

/// Detect the current cluster, optionally resolving its directories.
pub fn execute<E: Environment>(
    ctx: &AppContext<E>,
    with_directories: bool,
) -> Result<ClusterReport, AppError> {
    let cluster = Cluster::current_in(ctx.env())?;

    let directories = match cluster {
        Some(cluster) if with_directories => Some(cluster.directories_in(ctx.env())?),
        _ => None,
    };

    Ok(ClusterReport { cluster, directories })
}
