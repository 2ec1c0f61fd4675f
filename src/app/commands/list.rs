use std::path::PathBuf;

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{AppError, Cluster, DatasetId};
use crate::ports::Environment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetListing {
    pub cluster: Cluster,
    pub datasets: Vec<DatasetListEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetListEntry {
    pub dataset: DatasetId,
    pub root: PathBuf,
    pub stored: bool,
}

/// Datasets registered on a cluster, each with its stored status.
pub fn execute<E: Environment>(
    ctx: &AppContext<E>,
    cluster: Option<Cluster>,
) -> Result<DatasetListing, AppError> {
    let cluster = super::resolve_cluster(ctx.env(), cluster)?;
    let registry = ctx.registry();

    let datasets = registry
        .datasets_on_cluster(cluster)
        .into_iter()
        .map(|(dataset, root)| DatasetListEntry {
            dataset: dataset.clone(),
            root: root.to_path_buf(),
            stored: registry.is_stored_on_cluster(dataset, cluster),
        })
        .collect();

    Ok(DatasetListing { cluster, datasets })
}
