#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use fitrecall::config::FitRecallConfig;
use fitrecall::db;
use fitrecall::generation::{GenerationError, TextGenerator};
use fitrecall::memory::baseline::BaselineSeed;
use fitrecall::memory::MemoryEngine;
use std::sync::Arc;

/// Fixed reference instant shared by the integration tests.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 15, 0, 0).unwrap()
}

/// In-memory engine with the built-in baseline and no generator.
pub fn test_engine() -> MemoryEngine {
    let conn = db::open_memory_database().unwrap();
    MemoryEngine::new(conn, &FitRecallConfig::default(), None).unwrap()
}

/// In-memory engine with an explicit baseline.
pub fn engine_with_baseline(seeds: Vec<BaselineSeed>) -> MemoryEngine {
    test_engine().with_baseline(seeds)
}

/// In-memory engine with no baseline and the given generator.
pub fn engine_with_generator(generator: Arc<dyn TextGenerator>) -> MemoryEngine {
    let conn = db::open_memory_database().unwrap();
    MemoryEngine::new(conn, &FitRecallConfig::default(), Some(generator))
        .unwrap()
        .with_baseline(vec![])
}

pub fn seed(id: &str, text: &str, days_ago: i64) -> BaselineSeed {
    BaselineSeed {
        id: id.to_string(),
        text: text.to_string(),
        days_ago,
        media_ref: None,
    }
}

/// Generator that always answers with a fixed sentence.
pub struct CannedGenerator(pub &'static str);

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Ok(self.0.to_string())
    }
}

/// Generator that is never reachable.
pub struct OfflineGenerator;

#[async_trait]
impl TextGenerator for OfflineGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Unavailable("connection refused".into()))
    }
}
