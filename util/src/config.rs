//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.
//!
//! The evaluation engine itself is configuration-free; these values drive the
//! binary that wraps it (logging and the caller-side corpus cap).

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stderr: bool,
    /// Maximum number of corpus entries handed to the engine. `0` disables the cap.
    pub max_corpus_size: usize,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid value '{raw}' for {key}; using default");
            default
        }),
        Err(_) => default,
    }
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every variable is optional. Malformed numeric values fall back to their default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "evaluator".into()),
            log_level: env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "evaluator=info,evaluate=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "evaluator.log".into()),
            log_to_stderr: env::var("LOG_TO_STDERR").unwrap_or_else(|_| "false".into()) == "true",
            max_corpus_size: parse_or("MAX_CORPUS_SIZE", 0),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock
                .write()
                .expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    /// Generic internal setter for any field in the config.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_project_name(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.project_name = value.into());
    }

    pub fn set_max_corpus_size(value: usize) {
        AppConfig::set_field(|cfg| cfg.max_corpus_size = value);
    }
}

// --- Free accessors ---

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stderr() -> bool {
    AppConfig::global().log_to_stderr
}

pub fn max_corpus_size() -> usize {
    AppConfig::global().max_corpus_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "PROJECT_NAME",
            "LOG_LEVEL",
            "LOG_FILE",
            "LOG_TO_STDERR",
            "MAX_CORPUS_SIZE",
        ] {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_when_unset() {
        clear_env();
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.project_name, "evaluator");
        assert_eq!(cfg.log_level, "evaluator=info,evaluate=info");
        assert_eq!(cfg.log_file, "evaluator.log");
        assert!(!cfg.log_to_stderr);
        assert_eq!(cfg.max_corpus_size, 0);
    }

    #[test]
    #[serial]
    fn reads_values_from_env() {
        clear_env();
        unsafe {
            env::set_var("LOG_TO_STDERR", "true");
            env::set_var("MAX_CORPUS_SIZE", "250");
            env::set_var("LOG_LEVEL", "evaluator=debug");
        }
        let cfg = AppConfig::from_env();
        assert!(cfg.log_to_stderr);
        assert_eq!(cfg.max_corpus_size, 250);
        assert_eq!(cfg.log_level, "evaluator=debug");
        clear_env();
    }

    #[test]
    #[serial]
    fn invalid_corpus_size_falls_back_to_default() {
        clear_env();
        unsafe {
            env::set_var("MAX_CORPUS_SIZE", "lots");
        }
        assert_eq!(AppConfig::from_env().max_corpus_size, 0);
        clear_env();
    }

    #[test]
    #[serial]
    fn setters_override_and_reset_restores() {
        clear_env();
        AppConfig::reset();
        AppConfig::set_max_corpus_size(10);
        AppConfig::set_project_name("grader");
        assert_eq!(max_corpus_size(), 10);
        assert_eq!(project_name(), "grader");

        AppConfig::reset();
        assert_eq!(max_corpus_size(), 0);
        assert_eq!(project_name(), "evaluator");
    }
}
