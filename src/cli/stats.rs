use anyhow::Result;

use fitrecall::config::FitRecallConfig;
use fitrecall::memory::MemoryEngine;

/// Display activity statistics in the terminal.
pub fn stats(config: &FitRecallConfig, user: &str) -> Result<()> {
    let engine = MemoryEngine::open(config)?;
    let report = engine.stats(user);

    println!("Activity Statistics ({user})");
    println!("{}", "=".repeat(40));
    println!("  Total entries:       {}", report.total_count);
    println!("  Stored by you:       {}", engine.stored_count(user)?);
    println!();

    println!("Muscle groups:  {}", join(&report.muscle_groups));
    println!("Workout types:  {}", join(&report.workout_types));
    println!("Exercises:      {}", join(&report.exercises));
    println!();

    println!("By Day:");
    for (date, count) in report.by_date.iter().rev() {
        println!("  {date}  {count}");
    }

    Ok(())
}

fn join(set: &std::collections::BTreeSet<String>) -> String {
    if set.is_empty() {
        "(none)".into()
    } else {
        set.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    }
}
