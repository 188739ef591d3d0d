use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use dotenvy::dotenv;
use tracing::Level;

#[derive(Clone, Debug)]
pub struct Config {
    pub storage_dir: PathBuf,
    pub simulate_latency: bool,
    pub log_dir: String,
    pub log_level: Level,
}

/// Reads `name`, falling back to `default` when unset or unparseable.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            storage_dir: env::var("STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".staffdesk")),
            simulate_latency: env_or("SIMULATE_LATENCY", true),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            log_level: env_or("LOG_LEVEL", Level::INFO),
        }
    }
}
