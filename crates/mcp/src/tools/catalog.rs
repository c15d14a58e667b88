// Catalog tools: task types, evaluation measures, estimation procedures

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_integer, json_schema_object, outcome_to_result, parse_args, Tool};
use anyhow::Result;
use openml_client::OpenMlClient;
use serde::Deserialize;

pub struct ListTaskTypesTool {
    client: OpenMlClient,
}

impl ListTaskTypesTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListTaskTypesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_task_types".to_string(),
            description: "List all task types supported by OpenML (e.g., Supervised Classification, Regression)."
                .to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        outcome_to_result(self.client.catalog().task_types().await)
    }
}

pub struct GetTaskTypeDescriptionTool {
    client: OpenMlClient,
}

impl GetTaskTypeDescriptionTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GetTaskTypeArgs {
    task_type_id: u64,
}

#[async_trait::async_trait]
impl Tool for GetTaskTypeDescriptionTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_task_type_description".to_string(),
            description: "Get the description for a specific OpenML task type by its ID.".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "task_type_id": json_schema_integer(
                        "The integer ID of the task type (e.g., 1 for Supervised Classification)"
                    )
                }),
                vec!["task_type_id"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: GetTaskTypeArgs = parse_args("get_task_type_description", arguments)?;
        outcome_to_result(self.client.catalog().task_type(args.task_type_id).await)
    }
}

pub struct ListEvaluationMeasuresTool {
    client: OpenMlClient,
}

impl ListEvaluationMeasuresTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListEvaluationMeasuresTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_evaluation_measures".to_string(),
            description: "List all evaluation measures supported by OpenML \
                          (e.g., predictive_accuracy, area_under_roc_curve)."
                .to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        outcome_to_result(self.client.catalog().evaluation_measures().await)
    }
}

pub struct ListEstimationProceduresTool {
    client: OpenMlClient,
}

impl ListEstimationProceduresTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListEstimationProceduresTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_estimation_procedures".to_string(),
            description: "List all estimation procedures supported by OpenML (e.g., 10-fold Crossvalidation)."
                .to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        outcome_to_result(self.client.catalog().estimation_procedures().await)
    }
}
