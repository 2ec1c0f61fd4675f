//! `Environment` implementation backed by the live process environment.

use std::ffi::OsString;

use crate::ports::Environment;

/// Reads variables from `std::env` on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}
