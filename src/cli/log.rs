use anyhow::Result;

use fitrecall::config::FitRecallConfig;
use fitrecall::memory::MemoryEngine;

/// Append one transcript message.
pub fn log(
    config: &FitRecallConfig,
    user: &str,
    conversation: &str,
    text: &str,
    is_from_user: bool,
) -> Result<()> {
    let engine = MemoryEngine::open(config)?;
    let id = engine.log_message(user, conversation, text, is_from_user)?;
    println!("Logged message {id} to conversation '{conversation}'");
    Ok(())
}
