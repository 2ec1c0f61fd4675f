use std::borrow::Cow;
use std::path::Path;

use crate::adapters::ProcessEnvironment;
use crate::domain::{AppError, DatasetRegistry};
use crate::ports::Environment;

/// Application context holding dependencies for command execution.
pub struct AppContext<E: Environment> {
    env: E,
    registry: Cow<'static, DatasetRegistry>,
}

impl AppContext<ProcessEnvironment> {
    /// Live environment, builtin registry overlaid with `registry_file` if given.
    pub fn from_process(registry_file: Option<&Path>) -> Result<Self, AppError> {
        let registry = match registry_file {
            Some(path) => {
                let overlay = DatasetRegistry::load(path)?;
                Cow::Owned(DatasetRegistry::builtin().merged_with(&overlay))
            }
            None => Cow::Borrowed(DatasetRegistry::builtin()),
        };
        Ok(Self { env: ProcessEnvironment, registry })
    }
}

impl<E: Environment> AppContext<E> {
    /// Create a new application context.
    pub fn new(env: E, registry: DatasetRegistry) -> Self {
        Self { env, registry: Cow::Owned(registry) }
    }

    /// Get a reference to the environment.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Get a reference to the dataset registry.
    pub fn registry(&self) -> &DatasetRegistry {
        &self.registry
    }
}
