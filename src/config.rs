// src/config.rs

use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

use dotenvy::dotenv;

/// `STORAGE_ROOT` value that selects the in-process store.
pub const MEMORY_STORAGE: &str = ":memory:";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub admin_username: String,
    pub admin_password: String,

    /// Directory of the filesystem blob store, or `:memory:`.
    pub storage_root: String,
    pub quizzes_prefix: String,
    pub results_key: String,
    pub shortlist_key: String,
    pub storage_timeout: Duration,

    /// Base URL candidates open; quiz share links are built from it.
    pub public_base_url: url::Url,
    pub listen_addr: SocketAddr,
    pub static_dir: Option<PathBuf>,
    pub cors_origins: Vec<String>,

    pub log_dir: PathBuf,
    pub rust_log: String,
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let admin_username =
            env::var("ADMIN_USERNAME").map_err(|_| ConfigError::Missing("ADMIN_USERNAME"))?;
        let admin_password =
            env::var("ADMIN_PASSWORD").map_err(|_| ConfigError::Missing("ADMIN_PASSWORD"))?;

        let storage_timeout = var_or("STORAGE_TIMEOUT_SECS", "5")
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| ConfigError::Invalid {
                name: "STORAGE_TIMEOUT_SECS",
                reason: e.to_string(),
            })?;

        let public_base_url = url::Url::parse(&var_or("PUBLIC_BASE_URL", "http://localhost:3000"))
            .map_err(|e| ConfigError::Invalid {
                name: "PUBLIC_BASE_URL",
                reason: e.to_string(),
            })?;

        let listen_addr = var_or("LISTEN_ADDR", "0.0.0.0:3000")
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "LISTEN_ADDR",
                reason: e.to_string(),
            })?;

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            admin_username,
            admin_password,
            storage_root: var_or("STORAGE_ROOT", "data"),
            quizzes_prefix: var_or("QUIZZES_DIRECTORY", "quizzes"),
            results_key: var_or("BLOB_NAME", "interview_results.csv"),
            shortlist_key: var_or("SHORTLIST_BLOB_NAME", "shortlisted_candidates.csv"),
            storage_timeout,
            public_base_url,
            listen_addr,
            static_dir: env::var("STATIC_DIR").ok().map(PathBuf::from),
            cors_origins,
            log_dir: PathBuf::from(var_or("LOG_DIR", "logs")),
            rust_log: var_or("RUST_LOG", "info"),
        })
    }
}
