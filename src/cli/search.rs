use anyhow::Result;

use fitrecall::config::FitRecallConfig;
use fitrecall::memory::MemoryEngine;

/// Run a search from the terminal.
pub fn search(config: &FitRecallConfig, user: &str, query: &str, limit: Option<usize>) -> Result<()> {
    let engine = MemoryEngine::open(config)?;
    let limit = limit.unwrap_or(config.retrieval.default_limit);

    let results = engine.search(user, query, limit);

    if results.is_empty() {
        println!("No results found.");
        return Ok(());
    }

    println!("Found {} result(s)\n", results.len());
    super::print_results(&results);

    Ok(())
}
