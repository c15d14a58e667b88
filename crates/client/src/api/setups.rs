//! Setup endpoints.

use crate::client::OpenMlClient;
use crate::error::OpenMlResult;
use crate::filter::FilterPath;
use crate::transport::FetchOutcome;

/// Setups API. A setup is a flow plus concrete hyperparameter values.
pub struct SetupsApi<'a> {
    client: &'a OpenMlClient,
}

impl<'a> SetupsApi<'a> {
    pub(crate) fn new(client: &'a OpenMlClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, setup_id: u64) -> OpenMlResult<FetchOutcome> {
        self.client.http.fetch(&format!("/setup/{}", setup_id), None).await
    }

    pub async fn list(&self, filters: &FilterPath) -> OpenMlResult<FetchOutcome> {
        self.client.http.fetch(&format!("/setup/list/{}", filters), None).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::client_for;
    use crate::filter::FilterPath;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_setup_paths() {
        let server = MockServer::start().await;

        for endpoint in ["/api/v1/json/setup/10", "/api/v1/json/setup/list/setup/10,12"] {
            Mock::given(method("GET"))
                .and(path(endpoint))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
                .expect(1)
                .mount(&server)
                .await;
        }

        let client = client_for(&server);
        client.setups().get(10).await.unwrap();
        client.setups().list(&FilterPath::new("setup/10,12").unwrap()).await.unwrap();
    }
}
