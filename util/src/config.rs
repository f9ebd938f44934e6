//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.
//!
//! Malformed values never abort startup: every field falls back to its default.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};

pub const DEFAULT_DISCOUNT_PROBABILITY: f64 = 0.5;

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_dir: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    /// Share of generated products that receive a discount price, in `[0, 1]`.
    pub seed_discount_probability: f64,
    /// Fixed seed for the product generator. `None` draws from OS entropy.
    pub seed_rng_seed: Option<u64>,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn clamp_probability(value: f64) -> f64 {
    if value.is_nan() {
        DEFAULT_DISCOUNT_PROBABILITY
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "catalog-seeder".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "seeder=info,db=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "seeder.log".into()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/catalog.db".into()),
            seed_discount_probability: clamp_probability(parse_or(
                "SEED_DISCOUNT_PROBABILITY",
                DEFAULT_DISCOUNT_PROBABILITY,
            )),
            seed_rng_seed: env::var("SEED_RNG_SEED")
                .ok()
                .and_then(|v| v.trim().parse().ok()),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// A poisoned lock is recovered rather than propagated; the config holds
    /// plain values only.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
            *guard = AppConfig::from_env();
        }
    }

    /// Generic internal setter for any field in the config.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_database_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.database_path = value.into());
    }

    /// Override the discount share. Out-of-range values are clamped to `[0, 1]`.
    pub fn set_seed_discount_probability(value: f64) {
        AppConfig::set_field(|cfg| cfg.seed_discount_probability = clamp_probability(value));
    }

    pub fn set_seed_rng_seed(value: Option<u64>) {
        AppConfig::set_field(|cfg| cfg.seed_rng_seed = value);
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

pub fn log_dir() -> String {
    AppConfig::global().log_dir.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

/// Whether a `DATABASE_PATH` value is a connection URL rather than a SQLite
/// file path.
pub fn is_dsn(path_or_url: &str) -> bool {
    path_or_url.contains("://") || path_or_url.starts_with("sqlite:")
}

pub fn seed_discount_probability() -> f64 {
    AppConfig::global().seed_discount_probability
}

pub fn seed_rng_seed() -> Option<u64> {
    AppConfig::global().seed_rng_seed
}
