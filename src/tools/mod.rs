pub mod activity_stats;
pub mod log_message;
pub mod search_activity;
pub mod store_activity;

use activity_stats::ActivityStatsParams;
use log_message::LogMessageParams;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use search_activity::SearchActivityParams;
use std::sync::{Arc, Mutex};
use store_activity::StoreActivityParams;

use fitrecall::config::FitRecallConfig;
use fitrecall::memory::types::SearchResult;
use fitrecall::memory::MemoryEngine;

const MAX_LIMIT: usize = 50;

/// The fitrecall MCP tool handler. Holds the shared engine and config and
/// exposes all MCP tools via the `#[tool_router]` macro.
#[derive(Clone)]
pub struct FitRecallTools {
    tool_router: ToolRouter<Self>,
    engine: Arc<Mutex<MemoryEngine>>,
    config: Arc<FitRecallConfig>,
}

#[tool_router]
impl FitRecallTools {
    pub fn new(
        engine: Arc<Mutex<MemoryEngine>>,
        config: Arc<FitRecallConfig>,
    ) -> Self {
        Self {
            tool_router: Self::tool_router(),
            engine,
            config,
        }
    }

    /// Remember a piece of activity text.
    #[tool(description = "Store a workout from free text. Text with no detectable activity is ignored and returns stored=false.")]
    async fn store_activity(
        &self,
        Parameters(params): Parameters<StoreActivityParams>,
    ) -> Result<String, String> {
        if params.text.trim().is_empty() {
            return Err("text must not be empty".into());
        }

        let user = self.user_or_default(params.user);
        tracing::info!(text_len = params.text.len(), user = %user, "store_activity called");

        let engine = Arc::clone(&self.engine);
        let text = params.text;
        let media_ref = params.media_ref;
        let stored = tokio::task::spawn_blocking(move || {
            let mut engine = engine
                .lock()
                .map_err(|e| anyhow::anyhow!("engine lock poisoned: {e}"))?;
            engine.store(&user, &text, media_ref.as_deref())
        })
        .await
        .map_err(|e| format!("db task failed: {e}"))?
        .map_err(|e| format!("store failed: {e}"))?;

        let body = match stored {
            Some(entry) => serde_json::json!({ "stored": true, "entry": entry }),
            None => serde_json::json!({ "stored": false, "reason": "no activity detected" }),
        };
        Ok(body.to_string())
    }

    /// Append a chat message to the transcript.
    #[tool(description = "Append a chat message to the user's transcript. User messages describing workouts become recallable immediately.")]
    async fn log_message(
        &self,
        Parameters(params): Parameters<LogMessageParams>,
    ) -> Result<String, String> {
        let user = self.user_or_default(params.user);
        let conversation = params.conversation.unwrap_or_else(|| "default".into());
        let is_from_user = params.is_from_user.unwrap_or(true);
        tracing::info!(user = %user, conversation = %conversation, is_from_user, "log_message called");

        let engine = Arc::clone(&self.engine);
        let text = params.text;
        let id = tokio::task::spawn_blocking(move || {
            let engine = engine
                .lock()
                .map_err(|e| anyhow::anyhow!("engine lock poisoned: {e}"))?;
            engine.log_message(&user, &conversation, &text, is_from_user)
        })
        .await
        .map_err(|e| format!("db task failed: {e}"))?
        .map_err(|e| format!("log failed: {e}"))?;

        Ok(serde_json::json!({ "id": id }).to_string())
    }

    /// Ranked recall without a narrative.
    #[tool(description = "Search remembered workouts by natural language query. Returns ranked entries with relevance scores.")]
    async fn search_activity(
        &self,
        Parameters(params): Parameters<SearchActivityParams>,
    ) -> Result<String, String> {
        let user = self.user_or_default(params.user);
        let limit = self.clamp_limit(params.limit);
        tracing::info!(query = %params.query, user = %user, limit, "search_activity called");

        let results = self.run_search(user, params.query, limit).await?;
        serde_json::to_string(&serde_json::json!({
            "results": results,
            "total": results.len(),
        }))
        .map_err(|e| format!("serialization failed: {e}"))
    }

    /// Search and synthesize an answer.
    #[tool(description = "Answer a question about past workouts: ranked evidence plus a short natural-language summary.")]
    async fn recall_activity(
        &self,
        Parameters(params): Parameters<SearchActivityParams>,
    ) -> Result<String, String> {
        let user = self.user_or_default(params.user);
        let limit = self.clamp_limit(params.limit);
        tracing::info!(query = %params.query, user = %user, limit, "recall_activity called");

        let engine = Arc::clone(&self.engine);
        let query = params.query;
        let pending = tokio::task::spawn_blocking(move || {
            let engine = engine
                .lock()
                .map_err(|e| format!("engine lock poisoned: {e}"))?;
            let results = engine.search(&user, &query, limit);
            Ok::<_, String>(engine.summarize(&query, results))
        })
        .await
        .map_err(|e| format!("recall task failed: {e}"))??;
        let summary = pending.await;

        serde_json::to_string(&summary).map_err(|e| format!("serialization failed: {e}"))
    }

    /// Totals over everything remembered.
    #[tool(description = "Get activity statistics: total entries, muscle groups, exercises, and entries per day.")]
    async fn activity_stats(
        &self,
        Parameters(params): Parameters<ActivityStatsParams>,
    ) -> Result<String, String> {
        let user = self.user_or_default(params.user);
        tracing::info!(user = %user, "activity_stats called");

        let engine = Arc::clone(&self.engine);
        let report = tokio::task::spawn_blocking(move || {
            engine
                .lock()
                .map(|engine| engine.stats(&user))
                .map_err(|e| format!("engine lock poisoned: {e}"))
        })
        .await
        .map_err(|e| format!("stats task failed: {e}"))??;

        serde_json::to_string(&report).map_err(|e| format!("serialization failed: {e}"))
    }
}

impl FitRecallTools {
    fn user_or_default(&self, user: Option<String>) -> String {
        user.unwrap_or_else(|| self.config.storage.default_user.clone())
    }

    fn clamp_limit(&self, limit: Option<usize>) -> usize {
        limit
            .unwrap_or(self.config.retrieval.default_limit)
            .clamp(1, MAX_LIMIT)
    }

    /// Run a search on the blocking pool.
    async fn run_search(
        &self,
        user: String,
        query: String,
        limit: usize,
    ) -> Result<Vec<SearchResult>, String> {
        let engine = Arc::clone(&self.engine);
        tokio::task::spawn_blocking(move || {
            let engine = engine
                .lock()
                .map_err(|e| format!("engine lock poisoned: {e}"))?;
            Ok(engine.search(&user, &query, limit))
        })
        .await
        .map_err(|e| format!("search task failed: {e}"))?
    }
}

#[tool_handler]
impl ServerHandler for FitRecallTools {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo {
            instructions: Some(
                "fitrecall remembers workouts. Use store_activity or log_message to record what \
                 the user did, search_activity or recall_activity to answer questions about it, \
                 and activity_stats for totals."
                    .into(),
            ),
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
