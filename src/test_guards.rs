//! RAII guards for environment variables in tests.
//!
//! The config layer reads `KANBAN_CONFIG` and `KANBAN_ENDPOINT` from the
//! process environment. Tests that change them restore the previous values
//! on drop, even when the test panics, and must be marked `#[serial]`.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::{CONFIG_ENV, ENDPOINT_ENV};

/// Restores one environment variable on drop.
///
/// ```ignore
/// #[test]
/// #[serial]
/// fn test_something() {
///     let _guard = unsafe { EnvGuard::set("KANBAN_ENDPOINT", "http://localhost:1") };
/// }
/// ```
pub struct EnvGuard {
    key: String,
    original: Option<OsString>,
}

impl EnvGuard {
    /// Snapshot the current value of `key`.
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            original: env::var_os(key),
        }
    }

    /// Snapshot `key`, then set it to `value`.
    ///
    /// # Safety
    /// Calls `std::env::set_var`; the caller must be `#[serial]`.
    pub unsafe fn set(key: &str, value: impl AsRef<OsStr>) -> Self {
        let guard = Self::new(key);
        unsafe { env::set_var(key, value) };
        guard
    }

    /// Snapshot `key`, then remove it.
    ///
    /// # Safety
    /// Calls `std::env::remove_var`; the caller must be `#[serial]`.
    pub unsafe fn remove(key: &str) -> Self {
        let guard = Self::new(key);
        unsafe { env::remove_var(key) };
        guard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: only used from #[serial] tests.
        match &self.original {
            Some(val) => unsafe { env::set_var(&self.key, val) },
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

/// A throwaway config location with the endpoint override cleared.
///
/// Keeps the temp dir alive for as long as the guard lives.
pub struct IsolatedConfig {
    dir: TempDir,
    _config: EnvGuard,
    _endpoint: EnvGuard,
}

impl IsolatedConfig {
    /// # Safety
    /// Mutates process environment; the caller must be `#[serial]`.
    pub unsafe fn new() -> std::io::Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().join("config.yaml");
        let config = unsafe { EnvGuard::set(CONFIG_ENV, &path) };
        let endpoint = unsafe { EnvGuard::remove(ENDPOINT_ENV) };
        Ok(Self {
            dir,
            _config: config,
            _endpoint: endpoint,
        })
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_guard_restores_existing_var() {
        let key = "KANBAN_TEST_GUARD_EXISTING";
        unsafe { env::set_var(key, "original_value") };
        {
            let _guard = unsafe { EnvGuard::set(key, "modified_value") };
            assert_eq!(env::var(key).unwrap(), "modified_value");
        }
        assert_eq!(env::var(key).unwrap(), "original_value");
        unsafe { env::remove_var(key) };
    }

    #[test]
    #[serial]
    fn test_env_guard_restores_absent_var() {
        let key = "KANBAN_TEST_GUARD_ABSENT";
        unsafe { env::remove_var(key) };
        {
            let _guard = unsafe { EnvGuard::set(key, "temporary") };
            assert_eq!(env::var(key).unwrap(), "temporary");
        }
        assert!(env::var(key).is_err());
    }

    #[test]
    #[serial]
    fn test_isolated_config_points_at_temp_dir() {
        let before = env::var_os(CONFIG_ENV);
        {
            let isolated = unsafe { IsolatedConfig::new() }.unwrap();
            assert_eq!(crate::config::Config::config_path(), isolated.config_path());
            assert!(isolated.dir().exists());
            assert!(env::var(ENDPOINT_ENV).is_err());
        }
        assert_eq!(env::var_os(CONFIG_ENV), before);
    }
}
