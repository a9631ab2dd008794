//! Runner configuration: `TASKS__*` environment variables, optionally from `.env`.

use crate::error::Result;
use config::{Config as Cfg, Environment};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct TasksConfig {
    /// Program used for every cargo step (`TASKS__CARGO`).
    #[serde(default = "default_cargo")]
    pub cargo: String,
    /// Base URL probed by the `health` task (`TASKS__API_URL`).
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_health_timeout_secs")]
    pub health_timeout_secs: u64,
    /// Workspace root; every step runs with this as its working directory.
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

fn default_cargo() -> String {
    "cargo".to_string()
}

fn default_api_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_health_timeout_secs() -> u64 {
    5
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            cargo: default_cargo(),
            api_url: default_api_url(),
            health_timeout_secs: default_health_timeout_secs(),
            root: default_root(),
        }
    }
}

impl TasksConfig {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(Environment::with_prefix("TASKS").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 4] = [
        "TASKS__CARGO",
        "TASKS__API_URL",
        "TASKS__HEALTH_TIMEOUT_SECS",
        "TASKS__ROOT",
    ];

    fn clear_env() {
        for key in KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn defaults_without_environment() {
        clear_env();

        let config = TasksConfig::load().unwrap();

        assert_eq!(config.cargo, "cargo");
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.health_timeout(), Duration::from_secs(5));
        assert_eq!(config.root, PathBuf::from("."));
    }

    #[test]
    #[serial]
    fn environment_overrides() {
        clear_env();
        std::env::set_var("TASKS__CARGO", "/opt/rust/bin/cargo");
        std::env::set_var("TASKS__HEALTH_TIMEOUT_SECS", "12");

        let config = TasksConfig::load().unwrap();
        clear_env();

        assert_eq!(config.cargo, "/opt/rust/bin/cargo");
        assert_eq!(config.health_timeout_secs, 12);
    }
}
