use crate::app::AppContext;
use crate::domain::{AppError, Cluster, DatasetId, StorageCheck};
use crate::ports::Environment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub dataset: DatasetId,
    pub cluster: Cluster,
    pub storage: StorageCheck,
}

impl CheckOutcome {
    pub fn exit_code(&self) -> i32 {
        if self.storage.is_stored() { 0 } else { 1 }
    }
}

/// Check whether a dataset's files are present on a cluster.
pub fn execute<E: Environment>(
    ctx: &AppContext<E>,
    dataset: &DatasetId,
    cluster: Option<Cluster>,
) -> Result<CheckOutcome, AppError> {
    if !ctx.registry().contains(dataset) {
        return Err(AppError::UnknownDataset(dataset.clone()));
    }
    let cluster = super::resolve_cluster(ctx.env(), cluster)?;
    let storage = ctx.registry().check_on_cluster(dataset, cluster);

    Ok(CheckOutcome { dataset: dataset.clone(), cluster, storage })
}
