//! Dataset endpoints.

use crate::client::OpenMlClient;
use crate::error::OpenMlResult;
use crate::filter::FilterPath;
use crate::transport::FetchOutcome;

/// Datasets API.
pub struct DatasetsApi<'a> {
    client: &'a OpenMlClient,
}

impl<'a> DatasetsApi<'a> {
    pub(crate) fn new(client: &'a OpenMlClient) -> Self {
        Self { client }
    }

    /// Get the full description of a dataset.
    pub async fn get(&self, dataset_id: u64) -> OpenMlResult<FetchOutcome> {
        self.client.http.fetch(&format!("/data/{}", dataset_id), None).await
    }

    /// List datasets matching a filter path.
    pub async fn list(&self, filters: &FilterPath) -> OpenMlResult<FetchOutcome> {
        self.client.http.fetch(&format!("/data/list/{}", filters), None).await
    }

    /// Get the features (columns) of a dataset.
    pub async fn features(&self, dataset_id: u64) -> OpenMlResult<FetchOutcome> {
        self.client
            .http
            .fetch(&format!("/data/features/{}", dataset_id), None)
            .await
    }

    /// Get the computed qualities (meta-features) of a dataset.
    pub async fn qualities(&self, dataset_id: u64) -> OpenMlResult<FetchOutcome> {
        self.client
            .http
            .fetch(&format!("/data/qualities/{}", dataset_id), None)
            .await
    }

    /// List every data quality measure OpenML knows.
    pub async fn quality_measures(&self) -> OpenMlResult<FetchOutcome> {
        self.client.http.fetch("/data/qualities/list", None).await
    }
}
