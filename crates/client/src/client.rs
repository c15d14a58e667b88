//! Main client for the OpenML API.

use crate::api::*;
use crate::config::{ClientConfig, RetryConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::error::{OpenMlError, OpenMlResult};
use crate::transport::{FetchOutcome, HttpTransport, QueryParams};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Main client for the OpenML REST API.
///
/// Cheap to clone; clones share the configuration and connection pool.
#[derive(Debug, Clone)]
pub struct OpenMlClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl OpenMlClient {
    /// Create a new client builder.
    pub fn builder() -> OpenMlClientBuilder {
        OpenMlClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> OpenMlResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET an arbitrary endpoint path below the base URL.
    pub async fn fetch(&self, path: &str, params: Option<QueryParams>) -> OpenMlResult<FetchOutcome> {
        self.http.fetch(path, params).await
    }

    /// Get the datasets API.
    pub fn datasets(&self) -> DatasetsApi<'_> {
        DatasetsApi::new(self)
    }

    /// Get the tasks API.
    pub fn tasks(&self) -> TasksApi<'_> {
        TasksApi::new(self)
    }

    /// Get the flows API.
    pub fn flows(&self) -> FlowsApi<'_> {
        FlowsApi::new(self)
    }

    /// Get the runs API.
    pub fn runs(&self) -> RunsApi<'_> {
        RunsApi::new(self)
    }

    /// Get the evaluations API.
    pub fn evaluations(&self) -> EvaluationsApi<'_> {
        EvaluationsApi::new(self)
    }

    /// Get the setups API.
    pub fn setups(&self) -> SetupsApi<'_> {
        SetupsApi::new(self)
    }

    /// Get the studies API.
    pub fn studies(&self) -> StudiesApi<'_> {
        StudiesApi::new(self)
    }

    /// Get the catalog API (task types, measures, procedures).
    pub fn catalog(&self) -> CatalogApi<'_> {
        CatalogApi::new(self)
    }
}

/// Builder for creating an OpenMlClient.
pub struct OpenMlClientBuilder {
    base_url: String,
    api_key: Option<String>,
    user_agent: String,
    timeout: Duration,
    retry_config: RetryConfig,
}

impl OpenMlClientBuilder {
    /// Create a new builder pointing at the public OpenML API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            retry_config: RetryConfig::default(),
        }
    }

    /// Override the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key. An empty key is treated as no key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = if key.is_empty() { None } else { Some(key) };
        self
    }

    /// Set the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry configuration.
    pub fn retry_config(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Build the client.
    pub fn build(self) -> OpenMlResult<OpenMlClient> {
        let base_url = Url::parse(&self.base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(OpenMlError::Config(format!(
                "base_url must be http or https, got: {}",
                base_url.scheme()
            )));
        }

        let config = ClientConfig {
            base_url,
            api_key: self.api_key,
            user_agent: self.user_agent,
            timeout: self.timeout,
            retry_config: self.retry_config,
        };

        OpenMlClient::from_config(config)
    }
}

impl Default for OpenMlClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
