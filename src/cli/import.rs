//! CLI `import-baseline` command: load seed entries from a JSON file.

use anyhow::Result;
use std::path::Path;

use fitrecall::config::FitRecallConfig;
use fitrecall::memory::baseline;
use fitrecall::memory::MemoryEngine;

/// Import a JSON array of `{ id, text, days_ago, media_ref? }` seeds.
pub fn import_baseline(config: &FitRecallConfig, file: &Path) -> Result<()> {
    let seeds = baseline::read_seed_file(file)?;

    let skipped = seeds
        .iter()
        .filter(|s| !fitrecall::memory::extract::is_activity_content(&s.text))
        .count();
    if skipped > 0 {
        tracing::warn!(skipped, "some seeds carry no activity signal and will never rank");
    }

    let mut engine = MemoryEngine::open(config)?;
    let count = engine.import_baseline(&seeds)?;
    println!("Imported {count} baseline seed(s) from {}", file.display());
    Ok(())
}
