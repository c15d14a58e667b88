//! HTTP transport layer for the OpenML client.

use crate::config::{ClientConfig, API_KEY_PARAM};
use crate::error::{truncate_chars, OpenMlError, OpenMlResult};
use reqwest::{header, Client, Response, StatusCode};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, error, warn};
use url::Url;

/// Query parameters for a single request.
pub type QueryParams = BTreeMap<String, String>;

/// Successful outcome of a fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The body parsed as JSON; returned exactly as received.
    Json(serde_json::Value),
    /// Human-readable note for empty or non-JSON bodies.
    Text(String),
}

/// HTTP transport for making API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> OpenMlResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .default_headers(headers)
            // A 3xx is an upstream error, not something to chase.
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| OpenMlError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Build a URL for the given endpoint path.
    ///
    /// The path is appended to the base URL as-is, so the base URL's own
    /// path (`/api/v1/json`) is preserved.
    fn build_url(&self, path: &str) -> OpenMlResult<Url> {
        let base = self.config.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}{}", base, path))?)
    }

    fn build_query(&self, params: Option<QueryParams>) -> QueryParams {
        let mut query = params.unwrap_or_default();
        if let Some(ref api_key) = self.config.api_key {
            query.insert(API_KEY_PARAM.to_string(), api_key.clone());
        }
        query
    }

    /// Send a GET, retrying connection-level failures.
    async fn send_with_retry(&self, url: &Url, query: &QueryParams) -> Result<Response, reqwest::Error> {
        let retry_config = &self.config.retry_config;
        let mut attempts = 0;

        loop {
            match self.client.get(url.clone()).query(query).send().await {
                Ok(response) => return Ok(response),
                Err(e) if retry_config.should_retry(attempts, &e) => {
                    attempts += 1;
                    warn!(
                        attempt = attempts,
                        max_retries = retry_config.max_retries,
                        error = %e,
                        "Connection failed, retrying"
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Perform one GET against `base_url + path` and classify the outcome.
    pub async fn fetch(&self, path: &str, params: Option<QueryParams>) -> OpenMlResult<FetchOutcome> {
        let result = self.fetch_unlogged(path, params).await;
        if let Err(ref e) = result {
            error!(path = path, "{}", e);
        }
        result
    }

    async fn fetch_unlogged(&self, path: &str, params: Option<QueryParams>) -> OpenMlResult<FetchOutcome> {
        let url = self
            .build_url(path)
            .map_err(|e| OpenMlError::unexpected("InvalidUrl", e))?;
        let query = self.build_query(params);
        debug!(url = %url, params = ?redact(&query), "GET request");

        let response = self
            .send_with_retry(&url, &query)
            .await
            .map_err(|e| OpenMlError::request(&e))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| OpenMlError::request(&e))?;

        if !status.is_success() {
            return Err(OpenMlError::from_response(
                status.as_u16(),
                &String::from_utf8_lossy(&body),
            ));
        }

        Ok(classify_success(status, &body))
    }
}

fn classify_success(status: StatusCode, body: &[u8]) -> FetchOutcome {
    if status == StatusCode::NO_CONTENT || body.is_empty() {
        return FetchOutcome::Text(format!(
            "Success with status {}, but no content returned.",
            status.as_u16()
        ));
    }

    match serde_json::from_slice(body) {
        Ok(value) => FetchOutcome::Json(value),
        Err(_) => FetchOutcome::Text(format!(
            "Received non-JSON response (status {}): {}",
            status.as_u16(),
            truncate_chars(&String::from_utf8_lossy(body), 500)
        )),
    }
}

fn redact(query: &QueryParams) -> QueryParams {
    let mut shown = query.clone();
    if let Some(value) = shown.get_mut(API_KEY_PARAM) {
        *value = "<redacted>".to_string();
    }
    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryConfig;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_config(base_url: &str) -> Arc<ClientConfig> {
        Arc::new(ClientConfig {
            base_url: Url::parse(base_url).unwrap(),
            api_key: None,
            user_agent: "openml-mcp-test/1.0".to_string(),
            timeout: Duration::from_secs(30),
            retry_config: RetryConfig::no_retry(),
        })
    }

    fn create_config_with_key(base_url: &str, api_key: &str) -> Arc<ClientConfig> {
        let mut config = (*create_config(base_url)).clone();
        config.api_key = Some(api_key.to_string());
        Arc::new(config)
    }

    fn api_base(server: &MockServer) -> String {
        format!("{}/api/v1/json", server.uri())
    }

    #[tokio::test]
    async fn test_json_body_returned_unchanged() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "data_set_description": {"id": "61", "name": "iris", "tag": ["uci", "study_1"]}
        });

        Mock::given(method("GET"))
            .and(path("/api/v1/json/data/61"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&api_base(&server))).unwrap();
        let outcome = transport.fetch("/data/61", None).await.unwrap();

        assert_eq!(outcome, FetchOutcome::Json(body));
    }

    #[tokio::test]
    async fn test_json_array_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/json/tasktype/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([1, 2, 3])))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&api_base(&server))).unwrap();
        let outcome = transport.fetch("/tasktype/list", None).await.unwrap();

        assert_eq!(outcome, FetchOutcome::Json(serde_json::json!([1, 2, 3])));
    }

    #[tokio::test]
    async fn test_no_content_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&api_base(&server))).unwrap();
        let outcome = transport.fetch("/run/trace/1", None).await.unwrap();

        assert_eq!(
            outcome,
            FetchOutcome::Text("Success with status 204, but no content returned.".to_string())
        );
    }

    #[tokio::test]
    async fn test_empty_body_with_200() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&api_base(&server))).unwrap();
        match transport.fetch("/data/1", None).await.unwrap() {
            FetchOutcome::Text(text) => {
                assert!(text.contains("200"));
                assert!(text.contains("no content"));
            }
            other => panic!("Expected text outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_truncated() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>".repeat(200)))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&api_base(&server))).unwrap();
        match transport.fetch("/data/1", None).await.unwrap() {
            FetchOutcome::Text(text) => {
                let prefix = "Received non-JSON response (status 200): ";
                assert!(text.starts_with(prefix));
                assert_eq!(text.len() - prefix.len(), 500);
            }
            other => panic!("Expected text outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_envelope_on_404() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/json/data/999999"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": {"code": "111", "message": "Unknown dataset"}
            })))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&api_base(&server))).unwrap();
        let err = transport.fetch("/data/999999", None).await.unwrap_err();

        match &err {
            OpenMlError::Api { status, code, message } => {
                assert_eq!(*status, 404);
                assert_eq!(code.as_deref(), Some("111"));
                assert_eq!(message, "Unknown dataset");
            }
            _ => panic!("Expected Api error"),
        }
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("111"));
        assert!(text.contains("Unknown dataset"));
    }

    #[tokio::test]
    async fn test_error_with_plain_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&api_base(&server))).unwrap();
        let err = transport.fetch("/flow/1", None).await.unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "OpenML API Error 503: Service Unavailable");
    }

    #[tokio::test]
    async fn test_redirect_is_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/json/data/61"))
            .respond_with(ResponseTemplate::new(302).insert_header("location", "/other"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/other"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"redirected": true})))
            .expect(0)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&api_base(&server))).unwrap();
        let err = transport.fetch("/data/61", None).await.unwrap_err();

        assert!(matches!(err, OpenMlError::Api { status: 302, .. }));
    }

    #[tokio::test]
    async fn test_api_key_injected() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/json/run/list/task/1"))
            .and(query_param("api_key", "sk-test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let config = create_config_with_key(&api_base(&server), "sk-test-key");
        let transport = HttpTransport::new(config).unwrap();
        let outcome = transport.fetch("/run/list/task/1", None).await.unwrap();

        assert_eq!(outcome, FetchOutcome::Json(serde_json::json!({"ok": true})));
    }

    #[tokio::test]
    async fn test_no_api_key_without_config() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param_is_missing("api_key"))
            .and(query_param("status", "active"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&api_base(&server))).unwrap();
        let mut params = QueryParams::new();
        params.insert("status".to_string(), "active".to_string());

        transport.fetch("/data/list", Some(params)).await.unwrap();
    }

    #[tokio::test]
    async fn test_identification_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(header("accept", "application/json"))
            .and(header("user-agent", "openml-mcp-test/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&api_base(&server))).unwrap();
        transport.fetch("/evaluationmeasure/list", None).await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Nothing listens on port 1.
        let mut config = (*create_config("http://127.0.0.1:1/api/v1/json")).clone();
        config.retry_config = RetryConfig::default();
        let transport = HttpTransport::new(Arc::new(config)).unwrap();

        let err = transport.fetch("/data/61", None).await.unwrap_err();

        match err {
            OpenMlError::Transport(message) => {
                assert!(message.starts_with("HTTP Request Error connecting to OpenML: "));
                assert!(message.len() > "HTTP Request Error connecting to OpenML: ".len());
            }
            other => panic!("Expected Transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let mut config = (*create_config(&api_base(&server))).clone();
        config.timeout = Duration::from_millis(100);
        let transport = HttpTransport::new(Arc::new(config)).unwrap();

        let err = transport.fetch("/data/61", None).await.unwrap_err();
        assert!(matches!(err, OpenMlError::Transport(_)));
    }

    #[test]
    fn test_build_url_keeps_base_path() {
        let transport = HttpTransport::new(create_config("https://www.openml.org/api/v1/json")).unwrap();

        let url = transport.build_url("/data/list/limit/10/offset/0").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.openml.org/api/v1/json/data/list/limit/10/offset/0"
        );
    }

    #[test]
    fn test_build_url_with_trailing_slash() {
        let transport = HttpTransport::new(create_config("https://www.openml.org/api/v1/json/")).unwrap();

        let url = transport.build_url("/study/list/").unwrap();
        assert_eq!(url.as_str(), "https://www.openml.org/api/v1/json/study/list/");
    }

    #[test]
    fn test_redact_hides_api_key() {
        let mut query = QueryParams::new();
        query.insert("api_key".to_string(), "secret".to_string());
        query.insert("limit".to_string(), "10".to_string());

        let shown = redact(&query);
        assert_eq!(shown.get("api_key").map(String::as_str), Some("<redacted>"));
        assert_eq!(shown.get("limit").map(String::as_str), Some("10"));
    }
}
