use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::installation::SunModel;

fn default_port() -> u16 { 8080 }
fn default_normalize_irradiation() -> bool { true }
fn default_log_filter() -> String { "info,tower_http=info".to_string() }

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Defaults applied when a request does not choose a model variant.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    #[serde(default)]
    pub sun_model: SunModel,
    #[serde(default = "default_normalize_irradiation")]
    pub normalize_irradiation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            engine: EngineConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: default_port() }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sun_model: SunModel::default(),
            normalize_irradiation: default_normalize_irradiation(),
        }
    }
}

impl Config {
    /// Load from a JSON file. Returns `Ok(None)` when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io { path: path.display().to_string(), source });
            }
        };
        Ok(Some(Self::from_json(&content)?))
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let c = Config::from_json("{}").unwrap();
        assert_eq!(c.server.port, 8080);
        assert_eq!(c.engine, EngineConfig::default());
        assert!(c.engine.normalize_irradiation);
    }

    #[test]
    fn test_partial_engine_section() {
        let c = Config::from_json(r#"{ "engine": { "sun_model": "monthly_table" } }"#).unwrap();
        assert_eq!(c.engine.sun_model, SunModel::MonthlyTable);
        assert!(c.engine.normalize_irradiation);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Config::from_json("{ port: 1 "), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(Config::load("/nonexistent/pv-shading-sim.json").unwrap().is_none());
    }
}
