//! Run endpoints.

use crate::client::OpenMlClient;
use crate::error::OpenMlResult;
use crate::filter::FilterPath;
use crate::transport::FetchOutcome;

/// Runs API. A run is one flow applied to one task.
pub struct RunsApi<'a> {
    client: &'a OpenMlClient,
}

impl<'a> RunsApi<'a> {
    pub(crate) fn new(client: &'a OpenMlClient) -> Self {
        Self { client }
    }

    /// Get a run with its task, flow, setup, evaluations and output files.
    pub async fn get(&self, run_id: u64) -> OpenMlResult<FetchOutcome> {
        self.client.http.fetch(&format!("/run/{}", run_id), None).await
    }

    /// List runs. OpenML requires at least one of task, flow, setup,
    /// uploader or run in the filters.
    pub async fn list(&self, filters: &FilterPath) -> OpenMlResult<FetchOutcome> {
        self.client.http.fetch(&format!("/run/list/{}", filters), None).await
    }

    /// Get the hyperparameter optimisation trace of a run.
    pub async fn trace(&self, run_id: u64) -> OpenMlResult<FetchOutcome> {
        self.client.http.fetch(&format!("/run/trace/{}", run_id), None).await
    }
}
