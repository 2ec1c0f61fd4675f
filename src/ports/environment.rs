//! Read-only access to environment variables.
//!
//! Cluster detection and directory resolution never touch `std::env` directly;
//! they go through this port so detection can be exercised against an
//! in-memory environment.

use std::ffi::OsString;

/// Port for reading process environment variables.
///
/// Implementations must not cache: every call reflects the environment as it
/// is at the moment of the call.
pub trait Environment {
    /// Value of `key`, or `None` when unset.
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// Whether `key` is set (to any value, including the empty string).
    fn is_set(&self, key: &str) -> bool {
        self.var_os(key).is_some()
    }

    /// Value of `key` as UTF-8. Non-UTF-8 values are converted lossily.
    fn var(&self, key: &str) -> Option<String> {
        self.var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var_os(&self, key: &str) -> Option<OsString> {
        (**self).var_os(key)
    }
}
