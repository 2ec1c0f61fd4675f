//! Concrete adapters for the crate's ports.

mod process_environment;

pub use process_environment::ProcessEnvironment;
