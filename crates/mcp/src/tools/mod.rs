pub mod catalog;
pub mod datasets;
pub mod flows;
pub mod runs;
pub mod setups;
pub mod studies;
pub mod tasks;
mod registry;

pub use catalog::{
    GetTaskTypeDescriptionTool, ListEstimationProceduresTool, ListEvaluationMeasuresTool,
    ListTaskTypesTool,
};
pub use datasets::{
    GetDatasetDescriptionTool, GetDatasetFeaturesTool, GetDatasetQualitiesTool,
    ListDataQualitiesTool, ListDatasetsTool,
};
pub use flows::{CheckFlowExistsTool, GetFlowDescriptionTool, ListFlowsTool};
pub use registry::{json_schema_integer, json_schema_object, json_schema_string, Tool, ToolRegistry};
pub use runs::{GetRunDescriptionTool, GetRunTraceTool, ListEvaluationsTool, ListRunsTool};
pub use setups::{GetSetupDescriptionTool, ListSetupsTool};
pub use studies::{GetStudyDescriptionTool, ListStudiesTool};
pub use tasks::{GetTaskDescriptionTool, ListTasksTool};

use crate::protocol::CallToolResult;
use anyhow::{Context, Result};
use openml_client::{FetchOutcome, OpenMlClient, OpenMlResult};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Register every OpenML tool against one shared client.
pub fn register_openml_tools(registry: &mut ToolRegistry, client: &OpenMlClient) {
    // Datasets
    registry.register(Arc::new(GetDatasetDescriptionTool::new(client.clone())));
    registry.register(Arc::new(ListDatasetsTool::new(client.clone())));
    registry.register(Arc::new(GetDatasetFeaturesTool::new(client.clone())));
    registry.register(Arc::new(GetDatasetQualitiesTool::new(client.clone())));
    registry.register(Arc::new(ListDataQualitiesTool::new(client.clone())));

    // Tasks
    registry.register(Arc::new(GetTaskDescriptionTool::new(client.clone())));
    registry.register(Arc::new(ListTasksTool::new(client.clone())));

    // Flows
    registry.register(Arc::new(GetFlowDescriptionTool::new(client.clone())));
    registry.register(Arc::new(ListFlowsTool::new(client.clone())));
    registry.register(Arc::new(CheckFlowExistsTool::new(client.clone())));

    // Runs and evaluations
    registry.register(Arc::new(GetRunDescriptionTool::new(client.clone())));
    registry.register(Arc::new(ListRunsTool::new(client.clone())));
    registry.register(Arc::new(GetRunTraceTool::new(client.clone())));
    registry.register(Arc::new(ListEvaluationsTool::new(client.clone())));

    // Setups
    registry.register(Arc::new(GetSetupDescriptionTool::new(client.clone())));
    registry.register(Arc::new(ListSetupsTool::new(client.clone())));

    // Studies
    registry.register(Arc::new(GetStudyDescriptionTool::new(client.clone())));
    registry.register(Arc::new(ListStudiesTool::new(client.clone())));

    // Catalog
    registry.register(Arc::new(ListTaskTypesTool::new(client.clone())));
    registry.register(Arc::new(GetTaskTypeDescriptionTool::new(client.clone())));
    registry.register(Arc::new(ListEvaluationMeasuresTool::new(client.clone())));
    registry.register(Arc::new(ListEstimationProceduresTool::new(client.clone())));
}

/// Deserialize tool arguments, naming the tool on failure.
pub(crate) fn parse_args<T: DeserializeOwned>(tool: &str, arguments: serde_json::Value) -> Result<T> {
    // Tools without parameters may be called with `null` arguments.
    let arguments = if arguments.is_null() {
        serde_json::json!({})
    } else {
        arguments
    };
    serde_json::from_value(arguments).with_context(|| format!("Invalid arguments for {}", tool))
}

/// Turn a client outcome into MCP tool content.
///
/// JSON is pretty-printed unchanged; OpenML errors become error results so
/// the agent sees the upstream status and message.
pub(crate) fn outcome_to_result(outcome: OpenMlResult<FetchOutcome>) -> Result<CallToolResult> {
    match outcome {
        Ok(FetchOutcome::Json(value)) => Ok(CallToolResult::text(serde_json::to_string_pretty(&value)?)),
        Ok(FetchOutcome::Text(text)) => Ok(CallToolResult::text(text)),
        Err(e) => Ok(CallToolResult::error(e.to_string())),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use openml_client::{OpenMlClient, RetryConfig};
    use wiremock::MockServer;

    pub fn client_for(server: &MockServer) -> OpenMlClient {
        OpenMlClient::builder()
            .base_url(format!("{}/api/v1/json", server.uri()))
            .retry_config(RetryConfig::no_retry())
            .build()
            .unwrap()
    }
}
