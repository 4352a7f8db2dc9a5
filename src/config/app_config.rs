use serde::Deserialize;
use std::path::Path;

use crate::core::errors::{EnvRenderError, Result};

/// Defaults read from a `--config` TOML file.
///
/// Keys mirror the command-line flag names. Every key is optional and
/// any flag given on the command line takes precedence.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct AppConfig {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub namespace: Option<String>,
    pub name: Option<String>,
    pub runtime: Option<String>,
    pub env: Option<String>,
    pub command: Option<String>,
    pub disable_healthcheck: Option<bool>,
    pub scaling: Option<bool>,
    pub scaling_min: Option<String>,
    pub scaling_max: Option<String>,
    pub scaling_cpu: Option<String>,
    pub resources: Option<bool>,
    pub resources_memory: Option<String>,
    pub resources_cpu_count: Option<String>,
    pub env_file: Option<String>,
    pub output_file: Option<String>,
}

impl AppConfig {
    /// Load defaults from the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(EnvRenderError::InvalidConfig {
                detail: format!("config file not found: {}", path.display()),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|detail| EnvRenderError::InvalidConfig {
            detail: format!("failed to parse {}: {detail}", path.display()),
        })
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}
