//! Study endpoints.

use crate::client::OpenMlClient;
use crate::error::OpenMlResult;
use crate::filter::FilterPath;
use crate::transport::FetchOutcome;

/// Studies API. A study is a named collection of tasks or runs.
pub struct StudiesApi<'a> {
    client: &'a OpenMlClient,
}

impl<'a> StudiesApi<'a> {
    pub(crate) fn new(client: &'a OpenMlClient) -> Self {
        Self { client }
    }

    /// Get a study by numeric ID or alias.
    pub async fn get(&self, id_or_alias: &str) -> OpenMlResult<FetchOutcome> {
        self.client.http.fetch(&format!("/study/{}", id_or_alias), None).await
    }

    /// List studies. Without filters every study is listed; the upstream
    /// endpoint needs the trailing slash in that case.
    pub async fn list(&self, filters: Option<&FilterPath>) -> OpenMlResult<FetchOutcome> {
        let path = match filters {
            Some(filters) => format!("/study/list/{}", filters),
            None => "/study/list/".to_string(),
        };
        self.client.http.fetch(&path, None).await
    }
}
