mod cli;
mod server;
mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fitrecall::config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fitrecall", version, about = "Activity memory and recall engine")]
struct Cli {
    /// User id (defaults to storage.default_user)
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the MCP server (stdio transport)
    Serve,
    /// Remember a piece of activity text
    Store {
        text: String,
        /// Opaque reference to an image or video
        #[arg(long)]
        media: Option<String>,
    },
    /// Append a chat message to the transcript
    Log {
        text: String,
        /// Record the message as coming from the assistant
        #[arg(long)]
        assistant: bool,
        #[arg(long, default_value = "default")]
        conversation: String,
    },
    /// Rank remembered activities against a query
    Search {
        query: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Search and summarize the answer
    Recall {
        query: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show totals over everything remembered
    Stats,
    /// Load baseline seeds from a JSON file
    ImportBaseline { file: PathBuf },
    /// Check database health
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = config::FitRecallConfig::load()?;

    // Log to stderr so stdout stays clean for MCP JSON-RPC.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let user = cli
        .user
        .clone()
        .unwrap_or_else(|| config.storage.default_user.clone());

    match cli.command {
        Command::Serve => server::serve_stdio(config).await?,
        Command::Store { text, media } => cli::store::store(&config, &user, &text, media.as_deref())?,
        Command::Log {
            text,
            assistant,
            conversation,
        } => cli::log::log(&config, &user, &conversation, &text, !assistant)?,
        Command::Search { query, limit } => cli::search::search(&config, &user, &query, limit)?,
        Command::Recall { query, limit } => cli::recall::recall(&config, &user, &query, limit).await?,
        Command::Stats => cli::stats::stats(&config, &user)?,
        Command::ImportBaseline { file } => cli::import::import_baseline(&config, &file)?,
        Command::Doctor => cli::doctor::doctor(&config)?,
    }

    Ok(())
}
