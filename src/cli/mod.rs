pub mod doctor;
pub mod import;
pub mod log;
pub mod recall;
pub mod search;
pub mod stats;
pub mod store;

use fitrecall::memory::types::SearchResult;

/// Truncate content to max_chars, appending "..." if truncated.
fn truncate_preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        content.to_string()
    } else {
        let head: String = content.chars().take(max_chars).collect();
        format!("{head}...")
    }
}

/// Print ranked results in the shared terminal format.
fn print_results(results: &[SearchResult]) {
    for (i, result) in results.iter().enumerate() {
        let date = result
            .entry
            .activity_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "undated".into());
        println!(
            "  {}. [{}] {} (relevance: {:.2}, source: {})",
            i + 1,
            date,
            result.entry.id,
            result.relevance,
            result.entry.source,
        );
        println!("     {}", truncate_preview(&result.matched_text, 120));
        println!();
    }
}
