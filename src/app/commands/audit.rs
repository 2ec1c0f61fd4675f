use crate::app::AppContext;
use crate::domain::RegistryIssue;
use crate::ports::Environment;

/// Consistency issues in the active registry.
pub fn execute<E: Environment>(ctx: &AppContext<E>) -> Vec<RegistryIssue> {
    ctx.registry().audit()
}
