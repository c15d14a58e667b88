//! Flow endpoints.

use crate::client::OpenMlClient;
use crate::error::OpenMlResult;
use crate::filter::FilterPath;
use crate::transport::FetchOutcome;

/// Flows API. A flow is a model or pipeline implementation.
pub struct FlowsApi<'a> {
    client: &'a OpenMlClient,
}

impl<'a> FlowsApi<'a> {
    pub(crate) fn new(client: &'a OpenMlClient) -> Self {
        Self { client }
    }

    /// Get a flow description including parameters and dependencies.
    pub async fn get(&self, flow_id: u64) -> OpenMlResult<FetchOutcome> {
        self.client.http.fetch(&format!("/flow/{}", flow_id), None).await
    }

    /// List flows matching a filter path.
    pub async fn list(&self, filters: &FilterPath) -> OpenMlResult<FetchOutcome> {
        self.client.http.fetch(&format!("/flow/list/{}", filters), None).await
    }

    /// Check whether a flow with this name and external version exists.
    pub async fn exists(&self, name: &str, version: &str) -> OpenMlResult<FetchOutcome> {
        self.client
            .http
            .fetch(&format!("/flow/exists/{}/{}", name, version), None)
            .await
    }
}
