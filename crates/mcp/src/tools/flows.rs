// Flow tools: flows are the models and pipelines runs are made with

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_integer, json_schema_object, json_schema_string, outcome_to_result, parse_args, Tool,
};
use anyhow::Result;
use openml_client::{FilterPath, OpenMlClient};
use serde::Deserialize;

/// Tool to get a flow description
pub struct GetFlowDescriptionTool {
    client: OpenMlClient,
}

impl GetFlowDescriptionTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GetFlowArgs {
    flow_id: u64,
}

#[async_trait::async_trait]
impl Tool for GetFlowDescriptionTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_flow_description".to_string(),
            description: "Get the description for a specific OpenML flow (model/pipeline) by its ID. \
                          Includes parameters, dependencies, etc."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "flow_id": json_schema_integer("The integer ID of the flow")
                }),
                vec!["flow_id"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: GetFlowArgs = parse_args("get_flow_description", arguments)?;
        outcome_to_result(self.client.flows().get(args.flow_id).await)
    }
}

/// Tool to list flows by filter path
pub struct ListFlowsTool {
    client: OpenMlClient,
}

impl ListFlowsTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct ListFlowsArgs {
    filters: String,
}

#[async_trait::async_trait]
impl Tool for ListFlowsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_flows".to_string(),
            description: "List OpenML flows, applying filters specified as part of the path. \
                          Example filters: 'limit/10/offset/0', 'tag/weka'."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "filters": json_schema_string("The filter string (e.g., 'limit/10/offset/0', 'uploader/1')")
                }),
                vec!["filters"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ListFlowsArgs = parse_args("list_flows", arguments)?;

        let Some(filters) = FilterPath::new(&args.filters) else {
            return Ok(CallToolResult::text(
                "Please provide filters. Example: 'limit/10/offset/0'",
            ));
        };

        outcome_to_result(self.client.flows().list(&filters).await)
    }
}

/// Tool to check whether a flow name/version pair is already registered
pub struct CheckFlowExistsTool {
    client: OpenMlClient,
}

impl CheckFlowExistsTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct CheckFlowExistsArgs {
    name: String,
    version: String,
}

#[async_trait::async_trait]
impl Tool for CheckFlowExistsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "check_flow_exists".to_string(),
            description: "Check if a flow with a specific name and external version exists on OpenML."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "name": json_schema_string("The name of the flow (e.g., 'weka.J48')"),
                    "version": json_schema_string("The external version string (e.g., 'Weka_3.7.5_9117')")
                }),
                vec!["name", "version"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: CheckFlowExistsArgs = parse_args("check_flow_exists", arguments)?;
        outcome_to_result(self.client.flows().exists(&args.name, &args.version).await)
    }
}
