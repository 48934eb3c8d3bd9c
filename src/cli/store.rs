use anyhow::Result;

use fitrecall::config::FitRecallConfig;
use fitrecall::memory::MemoryEngine;

/// Store activity text from the terminal.
pub fn store(config: &FitRecallConfig, user: &str, text: &str, media: Option<&str>) -> Result<()> {
    let mut engine = MemoryEngine::open(config)?;

    match engine.store(user, text, media)? {
        Some(entry) => {
            println!("Stored {}", entry.id);
            print_set("Workout types", &entry.tags.workout_types);
            print_set("Muscle groups", &entry.tags.muscle_groups);
            print_set("Exercises", &entry.tags.exercises);
        }
        None => println!("No activity detected; nothing stored."),
    }

    Ok(())
}

fn print_set(label: &str, set: &std::collections::BTreeSet<String>) {
    if !set.is_empty() {
        let joined = set.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
        println!("  {:<15} {}", format!("{label}:"), joined);
    }
}
