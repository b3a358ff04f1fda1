use std::io;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_WORKER_THREADS: usize = 4;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

/// Listener and runtime settings. A port of 0 means "use the service default".
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

fn default_host() -> String { DEFAULT_HOST.to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: 0, worker_threads: Some(DEFAULT_WORKER_THREADS) }
    }
}

/// Resolve the config for `service` from `config_path` (normally `CONFIG_PATH`)
/// or `<service>.toml` in the working directory. An explicit `config_path` must exist and
/// parse; without one, a missing `<service>.toml` yields the defaults.
pub fn load_or_default(service: &str, config_path: Option<&str>) -> Result<AppConfig> {
    if let Some(path) = config_path {
        return load_from_file(path);
    }
    let path = format!("{service}.toml");
    match std::fs::read_to_string(&path) {
        Ok(content) => toml::from_str(&content).with_context(|| format!("parsing {path}")),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(service, %path, "no config file, using defaults");
            Ok(AppConfig::default())
        }
        Err(e) => Err(anyhow::Error::new(e).context(format!("reading {path}"))),
    }
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let cfg: AppConfig = toml::from_str(&content).with_context(|| format!("parsing {path}"))?;
    Ok(cfg)
}

impl AppConfig {
    /// Full load for a service: config file if present, then env overrides,
    /// then normalization. `default_port` fills in an unset port.
    pub fn load_and_validate(service: &str, default_port: u16) -> Result<Self> {
        let config_path = std::env::var("CONFIG_PATH").ok();
        let mut cfg = load_or_default(service, config_path.as_deref())?;
        cfg.server.apply_env(|key| std::env::var(key).ok())?;
        cfg.normalize_and_validate(default_port)?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self, default_port: u16) -> Result<()> {
        self.server.normalize(default_port)
    }
}

impl ServerConfig {
    /// Override fields from `SERVER_HOST`, `SERVER_PORT` and `TOKIO_WORKER_THREADS`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.port = port
                .trim()
                .parse::<u16>()
                .map_err(|e| anyhow!("SERVER_PORT must be a port number: {e}"))?;
        }
        if let Some(threads) = lookup("TOKIO_WORKER_THREADS") {
            self.worker_threads = Some(
                threads
                    .trim()
                    .parse::<usize>()
                    .map_err(|e| anyhow!("TOKIO_WORKER_THREADS must be a positive integer: {e}"))?,
            );
        }
        Ok(())
    }

    fn normalize(&mut self, default_port: u16) -> Result<()> {
        if default_port == 0 {
            return Err(anyhow!("default port must be in 1..=65535"));
        }
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            self.port = default_port;
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn parses_partial_toml_with_defaults() -> Result<()> {
        let mut cfg: AppConfig = toml::from_str("[server]\nport = 9000\n")?;
        cfg.normalize_and_validate(8080)?;
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.worker_threads, Some(4));
        Ok(())
    }

    #[test]
    fn empty_config_takes_service_default_port() -> Result<()> {
        let mut cfg: AppConfig = toml::from_str("")?;
        cfg.normalize_and_validate(8081)?;
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:8081");
        Ok(())
    }

    #[test]
    fn blank_host_and_zero_threads_are_normalized() -> Result<()> {
        let mut cfg: AppConfig =
            toml::from_str("[server]\nhost = \"  \"\nport = 1234\nworker_threads = 0\n")?;
        cfg.normalize_and_validate(8080)?;
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.worker_threads, Some(4));
        Ok(())
    }

    #[test]
    fn env_overrides_file_values() -> Result<()> {
        let env: HashMap<&str, &str> = [
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "18080"),
            ("TOKIO_WORKER_THREADS", "2"),
        ]
        .into_iter()
        .collect();
        let mut server = ServerConfig::default();
        server.apply_env(|k| env.get(k).map(|v| v.to_string()))?;
        server.normalize(8080)?;
        assert_eq!(server.bind_addr(), "127.0.0.1:18080");
        assert_eq!(server.worker_threads, Some(2));
        Ok(())
    }

    #[test]
    fn invalid_env_port_is_rejected() {
        let mut server = ServerConfig::default();
        let res = server.apply_env(|k| (k == "SERVER_PORT").then(|| "http".to_string()));
        assert!(res.is_err());
    }

    fn write_temp(name: &str, content: &str) -> Result<std::path::PathBuf> {
        let path = std::env::temp_dir().join(format!("configs_{}_{name}.toml", std::process::id()));
        std::fs::write(&path, content)?;
        Ok(path)
    }

    #[test]
    fn malformed_config_file_is_an_error() -> Result<()> {
        let path = write_temp("malformed", "[server\nport = 9000\n")?;
        let res = load_or_default("product-service", path.to_str());
        let _ = std::fs::remove_file(&path);
        let err = res.err().map(|e| format!("{e:#}"));
        assert!(err.as_deref().is_some_and(|m| m.contains("parsing")), "got {err:?}");
        Ok(())
    }

    #[test]
    fn explicit_config_path_must_exist() {
        let res = load_or_default("product-service", Some("/nonexistent/record-services.toml"));
        assert!(res.is_err());
    }

    #[test]
    fn explicit_config_path_is_loaded() -> Result<()> {
        let path = write_temp("explicit", "[server]\nhost = \"127.0.0.1\"\nport = 9100\n")?;
        let res = load_or_default("product-service", path.to_str());
        let _ = std::fs::remove_file(&path);
        let mut cfg = res?;
        cfg.normalize_and_validate(8081)?;
        assert_eq!(cfg.server.bind_addr(), "127.0.0.1:9100");
        Ok(())
    }

    #[test]
    fn missing_service_file_falls_back_to_defaults() -> Result<()> {
        let cfg = load_or_default("no-such-record-service", None)?;
        assert_eq!(cfg, AppConfig::default());
        Ok(())
    }

    #[test]
    fn zero_default_port_is_rejected() {
        let mut cfg = AppConfig::default();
        assert!(cfg.normalize_and_validate(0).is_err());
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/nonexistent/record-services.toml").is_err());
    }
}
