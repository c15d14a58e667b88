// Task tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_integer, json_schema_object, json_schema_string, outcome_to_result, parse_args, Tool,
};
use anyhow::Result;
use openml_client::{FilterPath, OpenMlClient};
use serde::Deserialize;

/// Tool to get a task description
pub struct GetTaskDescriptionTool {
    client: OpenMlClient,
}

impl GetTaskDescriptionTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GetTaskArgs {
    task_id: u64,
}

#[async_trait::async_trait]
impl Tool for GetTaskDescriptionTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_task_description".to_string(),
            description: "Get the description for a specific OpenML task by its ID. \
                          Describes ML tasks like classification or regression, including inputs \
                          and evaluation criteria."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "task_id": json_schema_integer("The integer ID of the task")
                }),
                vec!["task_id"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: GetTaskArgs = parse_args("get_task_description", arguments)?;
        outcome_to_result(self.client.tasks().get(args.task_id).await)
    }
}

/// Tool to list tasks by filter path
pub struct ListTasksTool {
    client: OpenMlClient,
}

impl ListTasksTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct ListTasksArgs {
    filters: String,
}

#[async_trait::async_trait]
impl Tool for ListTasksTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_tasks".to_string(),
            description: "List OpenML tasks, applying filters specified as part of the path. \
                          Example filters: 'limit/10/offset/0', 'type/1/tag/study_1' \
                          (type 1 is Supervised Classification)."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "filters": json_schema_string("The filter string (e.g., 'limit/10/offset/0', 'type/1')")
                }),
                vec!["filters"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ListTasksArgs = parse_args("list_tasks", arguments)?;

        let Some(filters) = FilterPath::new(&args.filters) else {
            return Ok(CallToolResult::text(
                "Please provide filters. Example: 'limit/10/offset/0/type/1'",
            ));
        };

        outcome_to_result(self.client.tasks().list(&filters).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::client_for;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_task_description() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/json/task/59"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"task": {"task_id": "59"}})))
            .expect(1)
            .mount(&server)
            .await;

        let tool = GetTaskDescriptionTool::new(client_for(&server));
        let result = tool.execute(serde_json::json!({"task_id": 59})).await.unwrap();

        assert!(result.joined_text().contains("\"task_id\": \"59\""));
    }

    #[tokio::test]
    async fn test_list_tasks_without_filters() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let tool = ListTasksTool::new(client_for(&server));
        let result = tool.execute(serde_json::json!({"filters": "/"})).await.unwrap();

        assert_eq!(
            result.joined_text(),
            "Please provide filters. Example: 'limit/10/offset/0/type/1'"
        );
    }
}
