// Dataset tools: descriptions, listings, features and qualities

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_integer, json_schema_object, json_schema_string, outcome_to_result, parse_args, Tool,
};
use anyhow::Result;
use openml_client::{FilterPath, OpenMlClient};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct DatasetIdArgs {
    dataset_id: u64,
}

#[derive(Debug, Deserialize)]
struct FilterArgs {
    filters: String,
}

/// Tool to get a dataset's full metadata
pub struct GetDatasetDescriptionTool {
    client: OpenMlClient,
}

impl GetDatasetDescriptionTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetDatasetDescriptionTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_dataset_description".to_string(),
            description: "Get the description for a specific OpenML dataset by its ID. \
                          Contains all the meta-data about the dataset."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "dataset_id": json_schema_integer("The integer ID of the dataset")
                }),
                vec!["dataset_id"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: DatasetIdArgs = parse_args("get_dataset_description", arguments)?;
        outcome_to_result(self.client.datasets().get(args.dataset_id).await)
    }
}

/// Tool to list datasets by filter path
pub struct ListDatasetsTool {
    client: OpenMlClient,
}

impl ListDatasetsTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListDatasetsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_datasets".to_string(),
            description: "List OpenML datasets, applying filters specified as part of the path. \
                          Example filters: 'limit/10/offset/0', 'status/active/tag/uci', \
                          'number_instances/0..1000'. See the OpenML API docs for filter syntax."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "filters": json_schema_string("The filter string (e.g., 'limit/10/offset/0', 'status/active')")
                }),
                vec!["filters"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: FilterArgs = parse_args("list_datasets", arguments)?;

        let Some(filters) = FilterPath::new(&args.filters) else {
            return Ok(CallToolResult::text(
                "Please provide filters. Example: 'limit/10/offset/0'",
            ));
        };

        outcome_to_result(self.client.datasets().list(&filters).await)
    }
}

/// Tool to get the feature (column) descriptions of a dataset
pub struct GetDatasetFeaturesTool {
    client: OpenMlClient,
}

impl GetDatasetFeaturesTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetDatasetFeaturesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_dataset_features".to_string(),
            description: "Get the features (attributes/columns) description for a specific OpenML dataset."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "dataset_id": json_schema_integer("The integer ID of the dataset")
                }),
                vec!["dataset_id"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: DatasetIdArgs = parse_args("get_dataset_features", arguments)?;
        outcome_to_result(self.client.datasets().features(args.dataset_id).await)
    }
}

/// Tool to get the computed qualities (meta-features) of a dataset
pub struct GetDatasetQualitiesTool {
    client: OpenMlClient,
}

impl GetDatasetQualitiesTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetDatasetQualitiesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_dataset_qualities".to_string(),
            description: "Get the calculated qualities (meta-features) for a specific OpenML dataset."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "dataset_id": json_schema_integer("The integer ID of the dataset")
                }),
                vec!["dataset_id"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: DatasetIdArgs = parse_args("get_dataset_qualities", arguments)?;
        outcome_to_result(self.client.datasets().qualities(args.dataset_id).await)
    }
}

/// Tool to list every data quality measure
pub struct ListDataQualitiesTool {
    client: OpenMlClient,
}

impl ListDataQualitiesTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListDataQualitiesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_data_qualities".to_string(),
            description: "List all available data quality measures supported by OpenML.".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        outcome_to_result(self.client.datasets().quality_measures().await)
    }
}
