//! MCP `activity_stats` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `activity_stats` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ActivityStatsParams {
    #[schemars(description = "Optional user id. Defaults to the configured default user.")]
    pub user: Option<String>,
}
