//! Evaluation endpoints.

use crate::client::OpenMlClient;
use crate::error::OpenMlResult;
use crate::filter::FilterPath;
use crate::transport::FetchOutcome;

/// Evaluations API.
pub struct EvaluationsApi<'a> {
    client: &'a OpenMlClient,
}

impl<'a> EvaluationsApi<'a> {
    pub(crate) fn new(client: &'a OpenMlClient) -> Self {
        Self { client }
    }

    /// List run evaluations matching a filter path.
    pub async fn list(&self, filters: &FilterPath) -> OpenMlResult<FetchOutcome> {
        self.client
            .http
            .fetch(&format!("/evaluation/list/{}", filters), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::client_for;
    use crate::filter::FilterPath;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_evaluations_path() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/json/evaluation/list/limit/10/task/68/function/f_measure"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"evaluations": {}})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let filters = FilterPath::new("limit/10/task/68/function/f_measure/").unwrap();
        client.evaluations().list(&filters).await.unwrap();
    }
}
