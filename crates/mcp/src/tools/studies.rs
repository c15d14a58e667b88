// Study tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, outcome_to_result, parse_args, Tool};
use anyhow::Result;
use openml_client::{FilterPath, OpenMlClient};
use serde::Deserialize;

/// Tool to get a study by ID or alias
pub struct GetStudyDescriptionTool {
    client: OpenMlClient,
}

impl GetStudyDescriptionTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GetStudyArgs {
    #[serde(deserialize_with = "string_or_number")]
    study_id_or_alias: String,
}

// Agents send study IDs both as `14` and as `"14"`.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a study ID or alias, got {}",
            other
        ))),
    }
}

#[async_trait::async_trait]
impl Tool for GetStudyDescriptionTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_study_description".to_string(),
            description: "Get the description for a specific OpenML study (collection of tasks/runs) \
                          by its ID or alias."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "study_id_or_alias": json_schema_string("The integer ID or string alias of the study")
                }),
                vec!["study_id_or_alias"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: GetStudyArgs = parse_args("get_study_description", arguments)?;
        outcome_to_result(self.client.studies().get(&args.study_id_or_alias).await)
    }
}

/// Tool to list studies; empty filters list everything
pub struct ListStudiesTool {
    client: OpenMlClient,
}

impl ListStudiesTool {
    pub fn new(client: OpenMlClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct ListStudiesArgs {
    #[serde(default)]
    filters: String,
}

#[async_trait::async_trait]
impl Tool for ListStudiesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_studies".to_string(),
            description: "List OpenML studies, applying filters specified as part of the path. \
                          Example filters: 'limit/10/offset/0', 'main_entity_type/task'. \
                          Leave the filters empty to list all studies."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "filters": json_schema_string(
                        "The filter string (e.g., 'limit/10/offset/0', 'main_entity_type/task'). \
                         Can be empty for all studies."
                    )
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ListStudiesArgs = parse_args("list_studies", arguments)?;
        let filters = FilterPath::new(&args.filters);
        outcome_to_result(self.client.studies().list(filters.as_ref()).await)
    }
}
