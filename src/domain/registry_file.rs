//! TOML representation of a dataset registry.
//!
//! ```toml
//! [datasets.mnist]
//! files = ["MNIST"]
//!
//! [datasets.mnist.roots]
//! mila = "/network/datasets/torchvision"
//! ```

use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use super::{AppError, Cluster, DatasetId, DatasetRegistry};

impl DatasetRegistry {
    /// Parse a registry from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let dto: dto::RegistryFileDto = toml::from_str(content)?;
        dto.try_into()
    }

    /// Read and parse a registry file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                AppError::RegistryFileMissing(path.display().to_string())
            } else {
                AppError::Io(err)
            }
        })?;
        let registry = Self::from_toml_str(&content)?;
        debug!("Loaded {} dataset(s) from {}", registry.datasets().len(), path.display());
        Ok(registry)
    }
}

mod dto {
    use std::collections::BTreeMap;

    use super::*;

    #[derive(Debug, Clone, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct RegistryFileDto {
        #[serde(default)]
        pub datasets: BTreeMap<String, DatasetEntryDto>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct DatasetEntryDto {
        pub files: Option<Vec<String>>,
        #[serde(default)]
        pub roots: BTreeMap<String, String>,
    }

    impl TryFrom<RegistryFileDto> for DatasetRegistry {
        type Error = AppError;

        fn try_from(dto: RegistryFileDto) -> Result<Self, Self::Error> {
            let mut builder = DatasetRegistry::builder();

            for (name, entry) in dto.datasets {
                let dataset = DatasetId::new(&name).map_err(|_| {
                    AppError::InvalidRegistry(format!("invalid dataset identifier '{}'", name))
                })?;

                if entry.files.is_none() && entry.roots.is_empty() {
                    return Err(AppError::InvalidRegistry(format!(
                        "dataset '{}' declares neither files nor roots",
                        name
                    )));
                }

                if let Some(files) = entry.files {
                    if let Some(blank) = files.iter().find(|f| f.trim().is_empty()) {
                        return Err(AppError::InvalidRegistry(format!(
                            "dataset '{}' lists a blank required file {:?}",
                            name, blank
                        )));
                    }
                    builder = builder.files(dataset.clone(), files);
                }

                for (cluster_name, root) in entry.roots {
                    let cluster = Cluster::from_name(&cluster_name).ok_or_else(|| {
                        AppError::InvalidRegistry(format!(
                            "dataset '{}' has a root on unknown cluster '{}'",
                            name, cluster_name
                        ))
                    })?;
                    builder = builder.root(dataset.clone(), cluster, root);
                }
            }

            Ok(builder.build())
        }
    }
}
