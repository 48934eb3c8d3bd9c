//! CLI `doctor` command: database diagnostics.

use anyhow::{Context, Result};

use fitrecall::config::FitRecallConfig;
use fitrecall::db;

pub fn doctor(config: &FitRecallConfig) -> Result<()> {
    let path = config.resolved_db_path();
    if !path.exists() {
        println!("No database at {} yet.", path.display());
        println!("It is created on the first `fitrecall store`, `log` or `serve`.");
        return Ok(());
    }

    let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
    let conn = db::open_database(&path)
        .with_context(|| format!("cannot open {} (corrupt?)", path.display()))?;
    let health = db::check_database_health(&conn).context("health check failed")?;

    println!("fitrecall doctor");
    println!();
    println!("  path            {}", path.display());
    println!("  size            {}", human_size(size));
    println!("  schema          v{}", health.schema_version);
    println!("  generator       {}", config.generation.provider);
    println!("  memories        {}", health.memory_count);
    println!("  transcript      {}", health.transcript_count);
    println!("  baseline seeds  {}", health.baseline_count);
    println!("  audit entries   {}", health.log_count);
    println!();

    if health.integrity_ok {
        println!("integrity: ok");
    } else {
        println!("integrity: FAILED ({})", health.integrity_details);
        println!("Restore a backup over {}, or move the file aside", path.display());
        println!("and a fresh database will be created on next run.");
    }

    Ok(())
}

fn human_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KIB {
        format!("{bytes} B")
    } else if b < KIB * KIB {
        format!("{:.1} KiB", b / KIB)
    } else {
        format!("{:.1} MiB", b / (KIB * KIB))
    }
}
