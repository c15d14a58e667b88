// Run and evaluation tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_integer, json_schema_object, json_schema_string, outcome_to_result, parse_args, Tool,
};
use anyhow::Result;
use openml_client::{FilterPath, OpenMlClient};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RunIdArgs {
    run_id: u64,
}

#[derive(Debug, Deserialize)]
struct FilterArgs {
    filters: String,
}

/// Tool to get a run description
pub struct GetRunDescriptionTool {
    client: OpenMlClient,
}

impl GetRunDescriptionTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetRunDescriptionTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_run_description".to_string(),
            description: "Get the description for a specific OpenML run (experiment result) by its ID. \
                          Includes task, flow, setup, evaluations, and output files."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "run_id": json_schema_integer("The integer ID of the run")
                }),
                vec!["run_id"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: RunIdArgs = parse_args("get_run_description", arguments)?;
        outcome_to_result(self.client.runs().get(args.run_id).await)
    }
}

/// Tool to list runs by filter path
pub struct ListRunsTool {
    client: OpenMlClient,
}

impl ListRunsTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListRunsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_runs".to_string(),
            description: "List OpenML runs, applying filters specified as part of the path. \
                          Requires filters like task, flow, setup, or uploader ID. Max 10,000 results. \
                          Example filters: 'limit/10/offset/0/task/1', 'flow/67/uploader/1'."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "filters": json_schema_string(
                        "The filter string (e.g., 'limit/10/task/28', 'flow/67'). \
                         Must include task, flow, setup, uploader, or run filter."
                    )
                }),
                vec!["filters"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: FilterArgs = parse_args("list_runs", arguments)?;

        let Some(filters) = FilterPath::new(&args.filters) else {
            return Ok(CallToolResult::text(
                "Please provide filters. Must include task, flow, setup, uploader, or run filter. \
                 Example: 'limit/10/task/28'",
            ));
        };

        outcome_to_result(self.client.runs().list(&filters).await)
    }
}

/// Tool to get the hyperparameter optimisation trace of a run
pub struct GetRunTraceTool {
    client: OpenMlClient,
}

impl GetRunTraceTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetRunTraceTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_run_trace".to_string(),
            description: "Get the optimization trace for a specific OpenML run (if available). \
                          Shows hyperparameter settings tried during tuning and their evaluations."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "run_id": json_schema_integer("The integer ID of the run")
                }),
                vec!["run_id"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: RunIdArgs = parse_args("get_run_trace", arguments)?;
        outcome_to_result(self.client.runs().trace(args.run_id).await)
    }
}

/// Tool to list run evaluations by filter path
pub struct ListEvaluationsTool {
    client: OpenMlClient,
}

impl ListEvaluationsTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListEvaluationsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_evaluations".to_string(),
            description: "List OpenML run evaluations, applying filters specified as part of the path. \
                          Requires filters like function, task, flow, setup, uploader, or run ID. \
                          Max 10,000 results. Example filters: \
                          'limit/10/offset/0/task/1/function/predictive_accuracy'."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "filters": json_schema_string(
                        "The filter string (e.g., 'limit/10/task/68/function/f_measure'). Must include filters."
                    )
                }),
                vec!["filters"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: FilterArgs = parse_args("list_evaluations", arguments)?;

        let Some(filters) = FilterPath::new(&args.filters) else {
            return Ok(CallToolResult::text(
                "Please provide filters. Must include function, task, flow, setup, uploader, or run filter. \
                 Example: 'limit/10/task/68/function/f_measure'",
            ));
        };

        outcome_to_result(self.client.evaluations().list(&filters).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::client_for;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_empty_filters_make_no_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let runs = ListRunsTool::new(client.clone())
            .execute(serde_json::json!({"filters": ""}))
            .await
            .unwrap();
        let evaluations = ListEvaluationsTool::new(client.clone())
            .execute(serde_json::json!({"filters": "///"}))
            .await
            .unwrap();

        assert!(runs.joined_text().contains("Must include task, flow, setup, uploader, or run filter"));
        assert!(evaluations.joined_text().contains("Must include function"));

        // `filters` is required; leaving it out is an argument error.
        assert!(ListRunsTool::new(client.clone())
            .execute(serde_json::json!({}))
            .await
            .is_err());
        assert!(ListEvaluationsTool::new(client)
            .execute(serde_json::Value::Null)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_run_trace_without_content() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/json/run/trace/100"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let tool = GetRunTraceTool::new(client_for(&server));
        let result = tool.execute(serde_json::json!({"run_id": 100})).await.unwrap();

        assert!(result.is_error.is_none());
        assert_eq!(
            result.joined_text(),
            "Success with status 204, but no content returned."
        );
    }

    #[tokio::test]
    async fn test_run_and_evaluation_paths() {
        let server = MockServer::start().await;

        for endpoint in [
            "/api/v1/json/run/100",
            "/api/v1/json/run/list/task/28/limit/10",
            "/api/v1/json/evaluation/list/task/68/function/f_measure",
        ] {
            Mock::given(method("GET"))
                .and(path(endpoint))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
                .expect(1)
                .mount(&server)
                .await;
        }

        let client = client_for(&server);
        GetRunDescriptionTool::new(client.clone())
            .execute(serde_json::json!({"run_id": 100}))
            .await
            .unwrap();
        ListRunsTool::new(client.clone())
            .execute(serde_json::json!({"filters": "task/28/limit/10"}))
            .await
            .unwrap();
        ListEvaluationsTool::new(client)
            .execute(serde_json::json!({"filters": "/task/68/function/f_measure"}))
            .await
            .unwrap();
    }
}
