//! Server Configuration
//!
//! Read from the environment once at startup. Missing or unparsable values
//! fall back to defaults; the fallbacks are reported once logging is up.

use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub static_dir: PathBuf,
    pub log_dir: PathBuf,
    /// Problems found while loading, logged by `report`
    pub warnings: Vec<String>,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();
        let mut load = |key: &str, default: &str| -> String {
            try_load(&lookup, key, default.to_string(), &mut warnings)
        };

        let host = load("PRE_TASTE_HOST", "127.0.0.1");
        let db_path = PathBuf::from(load("PRE_TASTE_DB", "feedback.db"));
        let static_dir = PathBuf::from(load("PRE_TASTE_STATIC_DIR", "dist"));
        let log_dir = PathBuf::from(load("PRE_TASTE_LOG_DIR", "logs"));
        let port = try_load(&lookup, "PRE_TASTE_PORT", 5000u16, &mut warnings);

        Self { host, port, db_path, static_dir, log_dir, warnings }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Log the effective configuration
    pub fn report(&self) {
        for warning in &self.warnings {
            warn!("{warning}");
        }
        info!("Feedback database: {}", self.db_path.display());
        info!("Serving static files from {}", self.static_dir.display());
    }
}

fn try_load<T, F>(lookup: &F, key: &str, default: T, warnings: &mut Vec<String>) -> T
where
    T: FromStr + Display,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warnings.push(format!("Invalid {key} value '{raw}': {e}, using default: {default}"));
            default
        }),
    }
}
