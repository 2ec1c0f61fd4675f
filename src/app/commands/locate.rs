use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{AppError, Cluster, DatasetId};
use crate::ports::Environment;

/// Root directory to hand to the dataset's constructor.
pub fn execute<E: Environment>(
    ctx: &AppContext<E>,
    dataset: &DatasetId,
    cluster: Option<Cluster>,
    default: Option<&Path>,
) -> Result<PathBuf, AppError> {
    ctx.registry().root_on_cluster_in(ctx.env(), dataset, cluster, default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DatasetRegistry;
    use crate::testing::FakeEnvironment;

    #[test]
    fn locates_on_detected_cluster() {
        let dataset = DatasetId::new("d").unwrap();
        let registry = DatasetRegistry::builder()
            .files(dataset.clone(), ["x"])
            .root(dataset.clone(), Cluster::Narval, "/narval/d")
            .build();
        let ctx = AppContext::new(FakeEnvironment::slurm_job("narval"), registry);

        assert_eq!(execute(&ctx, &dataset, None, None).unwrap(), PathBuf::from("/narval/d"));
        assert_eq!(
            execute(&ctx, &dataset, Some(Cluster::Mila), Some(Path::new("/fallback"))).unwrap(),
            PathBuf::from("/fallback")
        );
    }
}
