// Setup tools: a setup is a flow with concrete hyperparameter values

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_integer, json_schema_object, json_schema_string, outcome_to_result, parse_args, Tool,
};
use anyhow::Result;
use openml_client::{FilterPath, OpenMlClient};
use serde::Deserialize;

pub struct GetSetupDescriptionTool {
    client: OpenMlClient,
}

impl GetSetupDescriptionTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GetSetupArgs {
    setup_id: u64,
}

#[async_trait::async_trait]
impl Tool for GetSetupDescriptionTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_setup_description".to_string(),
            description: "Get the description for a specific OpenML setup (hyperparameter configuration) by its ID."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "setup_id": json_schema_integer("The integer ID of the setup")
                }),
                vec!["setup_id"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: GetSetupArgs = parse_args("get_setup_description", arguments)?;
        outcome_to_result(self.client.setups().get(args.setup_id).await)
    }
}

pub struct ListSetupsTool {
    client: OpenMlClient,
}

impl ListSetupsTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct ListSetupsArgs {
    filters: String,
}

#[async_trait::async_trait]
impl Tool for ListSetupsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_setups".to_string(),
            description: "List OpenML setups, applying filters specified as part of the path. \
                          Max 1,000 results. Example filters: 'limit/10/offset/0/flow/65'."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "filters": json_schema_string("The filter string (e.g., 'limit/10/flow/65', 'setup/10,12')")
                }),
                vec!["filters"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ListSetupsArgs = parse_args("list_setups", arguments)?;

        let Some(filters) = FilterPath::new(&args.filters) else {
            return Ok(CallToolResult::text(
                "Please provide filters. Example: 'limit/10/flow/65'",
            ));
        };

        outcome_to_result(self.client.setups().list(&filters).await)
    }
}
