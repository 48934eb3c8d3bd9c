//! MCP server initialization for the stdio transport.
//!
//! [`serve_stdio`] wires the memory engine and MCP tool handler into a
//! running server.

use crate::tools::FitRecallTools;
use anyhow::Result;
use fitrecall::config::FitRecallConfig;
use fitrecall::memory::MemoryEngine;
use rmcp::ServiceExt;
use std::sync::{Arc, Mutex};

/// Start the MCP server over stdio transport.
pub async fn serve_stdio(config: FitRecallConfig) -> Result<()> {
    tracing::info!("starting fitrecall MCP server on stdio");

    let engine = MemoryEngine::open(&config)?;
    tracing::info!(db = %config.resolved_db_path().display(), "engine ready");

    let tools = FitRecallTools::new(Arc::new(Mutex::new(engine)), Arc::new(config));
    let transport = rmcp::transport::stdio();

    let server = tools.serve(transport).await?;
    tracing::info!("MCP server running, waiting for client");

    server.waiting().await?;
    tracing::info!("MCP server shut down");

    Ok(())
}
