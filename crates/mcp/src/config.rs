use anyhow::{Context, Result};
use openml_client::{OpenMlClient, RetryConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Server configuration, read from `openml-mcp.toml` when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct McpConfig {
    #[serde(default)]
    pub openml: OpenMlSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenMlSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub user_agent: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

impl Default for OpenMlSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            user_agent: None,
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

impl McpConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        // Load config file if it exists, otherwise use defaults
        if !config_path.exists() {
            tracing::info!(path = %config_path.display(), "Configuration file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read configuration file {}", config_path.display()))?;
        let config: Self = toml::from_str(&content).context("Failed to parse configuration file")?;

        tracing::info!(path = %config_path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Build the shared OpenML client from these settings.
    pub fn build_client(&self) -> Result<OpenMlClient> {
        let settings = &self.openml;
        let mut builder = OpenMlClient::builder()
            .base_url(settings.base_url.clone())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .retry_config(RetryConfig {
                max_retries: settings.max_retries,
            });

        if let Some(ref api_key) = settings.api_key {
            builder = builder.api_key(api_key.clone());
        }
        if let Some(ref user_agent) = settings.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        builder.build().context("Failed to create OpenML client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = McpConfig::load(&temp_dir.path().join("openml-mcp.toml")).unwrap();

        assert_eq!(config.openml.base_url, DEFAULT_BASE_URL);
        assert!(config.openml.api_key.is_none());
        assert_eq!(config.openml.timeout_secs, 30);
        assert_eq!(config.openml.max_retries, 3);
    }

    #[test]
    fn test_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("openml-mcp.toml");
        std::fs::write(
            &path,
            "[openml]\napi_key = \"abc123\"\ntimeout_secs = 10\n",
        )
        .unwrap();

        let config = McpConfig::load(&path).unwrap();
        assert_eq!(config.openml.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.openml.timeout_secs, 10);
        assert_eq!(config.openml.base_url, DEFAULT_BASE_URL);

        let client = config.build_client().unwrap();
        assert_eq!(client.config().api_key.as_deref(), Some("abc123"));
        assert_eq!(client.config().timeout, Duration::from_secs(10));
        assert_eq!(client.config().retry_config.max_retries, 3);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("openml-mcp.toml");
        std::fs::write(&path, "[openml\nbase_url = ").unwrap();

        assert!(McpConfig::load(&path).is_err());
    }

    #[test]
    fn test_bad_base_url_fails_client_build() {
        let mut config = McpConfig::default();
        config.openml.base_url = "not a url".to_string();

        assert!(config.build_client().is_err());
    }
}
