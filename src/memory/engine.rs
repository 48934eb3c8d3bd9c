//! Memory engine facade: `store`, `search`, `summarize`, `stats`.
//!
//! Owns the database connection, ranking constants, baseline seeds, and the
//! optional text generator. Each operation has an `*_at` variant taking the
//! reference instant explicitly; the plain variants use the system clock.

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::Connection;

use super::baseline::{self, BaselineSeed};
use super::providers::{BaselineProvider, CandidateProvider, StoredProvider, TranscriptProvider};
use super::types::{MemoryEntry, RecallSummary, SearchResult, StatsReport};
use super::{search, stats, store, summarize};
use crate::config::{FitRecallConfig, RankingConfig};
use crate::db;
use crate::db::transcript::SqliteTranscript;
use crate::generation::{self, TextGenerator};

pub struct MemoryEngine {
    conn: Connection,
    ranking: RankingConfig,
    stats_limit: usize,
    seeds: Vec<BaselineSeed>,
    generator: Option<Arc<dyn TextGenerator>>,
}

impl MemoryEngine {
    /// Open the configured database and generator.
    pub fn open(config: &FitRecallConfig) -> Result<Self> {
        let conn = db::open_database(config.resolved_db_path())?;
        let generator = generation::create_generator(&config.generation)?;
        Self::new(conn, config, generator)
    }

    /// Build an engine over an already-open connection.
    pub fn new(
        conn: Connection,
        config: &FitRecallConfig,
        generator: Option<Arc<dyn TextGenerator>>,
    ) -> Result<Self> {
        let seeds = baseline::load_seeds(&conn, config.resolved_baseline_path().as_deref());
        tracing::info!(seeds = seeds.len(), generator = generator.is_some(), "memory engine ready");
        Ok(Self {
            conn,
            ranking: config.ranking.clone(),
            stats_limit: config.retrieval.stats_limit,
            seeds,
            generator,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Persist an entry for activity text; `None` for text with no signal.
    pub fn store(
        &mut self,
        user_id: &str,
        source_text: &str,
        media_ref: Option<&str>,
    ) -> Result<Option<MemoryEntry>> {
        self.store_at(user_id, source_text, media_ref, Utc::now())
    }

    pub fn store_at(
        &mut self,
        user_id: &str,
        source_text: &str,
        media_ref: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Option<MemoryEntry>> {
        store::store_memory(&mut self.conn, user_id, source_text, media_ref, now)
    }

    /// Append a chat message to the transcript the engine reads from.
    pub fn log_message(
        &self,
        user_id: &str,
        conversation: &str,
        text: &str,
        is_from_user: bool,
    ) -> Result<i64> {
        db::transcript::append_message(&self.conn, user_id, conversation, text, is_from_user, Utc::now())
    }

    /// Ranked results across transcript, stored entries, and baseline.
    pub fn search(&self, user_id: &str, query: &str, limit: usize) -> Vec<SearchResult> {
        self.search_at(user_id, query, limit, Utc::now())
    }

    pub fn search_at(
        &self,
        user_id: &str,
        query: &str,
        limit: usize,
        now: DateTime<Utc>,
    ) -> Vec<SearchResult> {
        let transcript = TranscriptProvider::new(SqliteTranscript::new(&self.conn));
        let stored = StoredProvider::new(&self.conn);
        let baseline = BaselineProvider::new(&self.seeds);
        let providers: [&dyn CandidateProvider; 3] = [&transcript, &stored, &baseline];

        search::search(&providers, user_id, query, limit, now, &self.ranking)
    }

    /// Synthesize an answer for `results` using the configured generator.
    ///
    /// The returned future does not borrow the engine, so callers holding the
    /// engine behind a lock can release it before awaiting.
    pub fn summarize(
        &self,
        query: &str,
        results: Vec<SearchResult>,
    ) -> impl Future<Output = RecallSummary> + Send + 'static {
        let generator = self.generator.clone();
        let query = query.to_string();
        async move { summarize::summarize(&query, results, generator.as_deref()).await }
    }

    /// Totals over everything `search` can see for `user_id`.
    pub fn stats(&self, user_id: &str) -> StatsReport {
        self.stats_at(user_id, Utc::now())
    }

    pub fn stats_at(&self, user_id: &str, now: DateTime<Utc>) -> StatsReport {
        let results = self.search_at(user_id, "", self.stats_limit, now);
        stats::activity_stats(&results)
    }

    /// Write seeds into the baseline table and reload the active set.
    pub fn import_baseline(&mut self, seeds: &[BaselineSeed]) -> Result<usize> {
        let count = baseline::import_seeds(&mut self.conn, seeds)?;
        self.seeds = baseline::load_seeds(&self.conn, None);
        Ok(count)
    }

    /// Number of entries written by `store` for `user_id`.
    pub fn stored_count(&self, user_id: &str) -> Result<u64> {
        store::count_entries(&self.conn, user_id)
    }

    /// Override the baseline seeds for this engine instance.
    pub fn with_baseline(mut self, seeds: Vec<BaselineSeed>) -> Self {
        self.seeds = seeds;
        self
    }
}
