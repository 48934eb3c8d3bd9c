use anyhow::Result;

use fitrecall::config::FitRecallConfig;
use fitrecall::memory::MemoryEngine;

/// Search, then print the synthesized answer and its evidence.
pub async fn recall(
    config: &FitRecallConfig,
    user: &str,
    query: &str,
    limit: Option<usize>,
) -> Result<()> {
    let engine = MemoryEngine::open(config)?;
    let limit = limit.unwrap_or(config.retrieval.default_limit);

    let results = engine.search(user, query, limit);
    let summary = engine.summarize(query, results).await;

    println!("{}", summary.narrative);
    println!();

    if summary.results.is_empty() {
        return Ok(());
    }

    if let Some(range) = summary.aggregates.date_range {
        println!("Date range:    {} to {}", range.start, range.end);
    }
    println!("Workouts:      {}", summary.aggregates.total_count);
    println!();
    super::print_results(&summary.results);

    Ok(())
}
