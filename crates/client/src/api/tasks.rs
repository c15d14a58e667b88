//! Task endpoints.

use crate::client::OpenMlClient;
use crate::error::OpenMlResult;
use crate::filter::FilterPath;
use crate::transport::FetchOutcome;

/// Tasks API.
pub struct TasksApi<'a> {
    client: &'a OpenMlClient,
}

impl<'a> TasksApi<'a> {
    pub(crate) fn new(client: &'a OpenMlClient) -> Self {
        Self { client }
    }

    /// Get a task description: inputs, estimation procedure, target.
    pub async fn get(&self, task_id: u64) -> OpenMlResult<FetchOutcome> {
        self.client.http.fetch(&format!("/task/{}", task_id), None).await
    }

    /// List tasks matching a filter path.
    pub async fn list(&self, filters: &FilterPath) -> OpenMlResult<FetchOutcome> {
        self.client.http.fetch(&format!("/task/list/{}", filters), None).await
    }
}
