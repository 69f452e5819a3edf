use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AdminError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub listen_addr: String,
    /// Explicit metrics endpoint. When unset, the endpoint is served by this
    /// process at `listen_addr`.
    pub metrics_url: Option<String>,
    pub fetch_timeout: Duration,
    pub dashboard_wait: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:3000".to_string(),
            metrics_url: None,
            fetch_timeout: Duration::from_secs(5),
            dashboard_wait: Duration::from_secs(3),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut cfg = Self::default();
        let config_path = config_file_path();
        if let Some(file_overrides) = load_file_overrides(&config_path)? {
            apply_overrides(&mut cfg, file_overrides, "config file")?;
        }
        let env_overrides = load_env_overrides();
        apply_overrides(&mut cfg, env_overrides, "environment")?;
        Ok(cfg)
    }

    pub fn metrics_url(&self) -> String {
        match &self.metrics_url {
            Some(url) => url.clone(),
            None => format!("http://{}/api/demo-metrics", self.listen_addr),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigOverrides {
    listen_addr: Option<String>,
    metrics_url: Option<String>,
    fetch_timeout: Option<String>,
    dashboard_wait: Option<String>,
}

fn config_file_path() -> PathBuf {
    if let Ok(path) = env::var("HSNP_CONFIG") {
        return PathBuf::from(path);
    }

    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let config_home = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(home).join(".config"));
    config_home.join("hsnp/config.toml")
}

fn load_file_overrides(path: &Path) -> Result<Option<ConfigOverrides>> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| AdminError::Config(format!("failed reading {}: {e}", path.display())))?;
    let parsed: ConfigOverrides = toml::from_str(&raw)
        .map_err(|e| AdminError::Config(format!("failed parsing {}: {e}", path.display())))?;
    Ok(Some(parsed))
}

fn load_env_overrides() -> ConfigOverrides {
    ConfigOverrides {
        listen_addr: env::var("HSNP_LISTEN_ADDR").ok(),
        metrics_url: env::var("HSNP_METRICS_URL").ok(),
        fetch_timeout: env::var("HSNP_FETCH_TIMEOUT").ok(),
        dashboard_wait: env::var("HSNP_DASHBOARD_WAIT").ok(),
    }
}

fn apply_overrides(cfg: &mut Config, overrides: ConfigOverrides, source: &str) -> Result<()> {
    if let Some(v) = overrides.listen_addr {
        cfg.listen_addr = v;
    }
    if let Some(v) = overrides.metrics_url {
        cfg.metrics_url = Some(v);
    }
    if let Some(v) = overrides.fetch_timeout {
        cfg.fetch_timeout = parse_duration_field("fetch_timeout", &v, source)?;
    }
    if let Some(v) = overrides.dashboard_wait {
        cfg.dashboard_wait = parse_duration_field("dashboard_wait", &v, source)?;
    }
    Ok(())
}

fn parse_duration_field(field: &str, value: &str, source: &str) -> Result<Duration> {
    humantime::parse_duration(value)
        .map_err(|e| AdminError::Config(format!("bad {field} in {source}: {e} (value={value})")))
}

/// Parses a human duration such as `250ms` or `3s`.
pub fn parse_duration_str(input: &str) -> Result<Duration> {
    humantime::parse_duration(input)
        .map_err(|e| AdminError::InvalidArgument(format!("invalid duration {input}: {e}")))
}
