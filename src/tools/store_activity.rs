use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StoreActivityParams {
    #[schemars(description = "Free text describing what the user did, e.g. 'leg day: squats 4x8'")]
    pub text: String,

    #[schemars(description = "Optional user id. Defaults to the configured default user.")]
    pub user: Option<String>,

    #[schemars(description = "Optional opaque reference to an attached photo or video")]
    pub media_ref: Option<String>,
}
