use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LogMessageParams {
    #[schemars(description = "The chat message text")]
    pub text: String,

    #[schemars(description = "Optional user id. Defaults to the configured default user.")]
    pub user: Option<String>,

    #[schemars(description = "Conversation identifier. Defaults to 'default'.")]
    pub conversation: Option<String>,

    #[schemars(description = "Whether the user wrote this message (true) or the assistant did (false). Defaults to true.")]
    pub is_from_user: Option<bool>,
}
