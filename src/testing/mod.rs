mod env_var_guard;
mod fake_environment;

pub use env_var_guard::EnvVarGuard;
pub use fake_environment::FakeEnvironment;
