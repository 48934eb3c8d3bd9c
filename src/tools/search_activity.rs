//! MCP `search_activity` and `recall_activity` tool parameter definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `search_activity` and `recall_activity` MCP tools.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchActivityParams {
    /// Natural language recall query.
    #[schemars(description = "Natural language question about past workouts, e.g. 'what did I do last week?'")]
    pub query: String,

    #[schemars(description = "Optional user id. Defaults to the configured default user.")]
    pub user: Option<String>,

    /// Maximum number of results (1-50). Defaults to the configured limit.
    #[schemars(description = "Maximum number of results to return (1-50). Defaults to 10.")]
    pub limit: Option<usize>,
}
