//! Configuration for Products API

use core_config::{app_info, env_or_default, env_parse, server::ServerConfig, AppInfo, FromEnv};
use std::time::Duration;

pub use core_config::Environment;

pub const DEFAULT_ALLOWED_ORIGINS: &str =
    "http://localhost:5173,http://localhost:5174,http://localhost:3000";
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub cors_allowed_origins: Vec<String>,
    /// Load the sample catalog at startup
    pub seed_catalog: bool,
    pub shutdown_timeout: Duration,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        let cors_allowed_origins =
            split_origins(&env_or_default("CORS_ALLOWED_ORIGIN", DEFAULT_ALLOWED_ORIGINS));
        let seed_catalog = env_parse("SEED_CATALOG", true)?;
        let shutdown_timeout = Duration::from_secs(env_parse(
            "SHUTDOWN_TIMEOUT_SECS",
            DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        )?);

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            cors_allowed_origins,
            seed_catalog,
            shutdown_timeout,
        })
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
