//! Activity memory and recall for a single user's fitness log.
//!
//! fitrecall pulls structured workout facts out of free text, keeps them as an
//! append-only memory log, and answers recall questions ("what did I do last
//! week?") by ranking remembered entries and summarizing the best matches.
//!
//! # Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Extraction | [`memory::extract`] | workout types, muscle groups, exercises |
//! | Temporal qualifier | [`memory::temporal`] | today / yesterday / last week / recent / unscoped |
//! | Ranking | [`memory::rank`] | temporal bonus + lexical overlap, activity floor |
//! | Merge | [`memory::search`] | transcript → stored → baseline, de-duplicated |
//! | Summary | [`memory::summarize`] | generated narrative, or a templated fallback |
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from TOML files and environment variables
//! - [`db`]: SQLite initialization, schema, migrations, transcript table, health checks
//! - [`generation`]: Text-generation collaborator used for recall narratives
//! - [`memory`]: The engine: extraction, ranking, storage, search, summaries, stats

pub mod config;
pub mod db;
pub mod generation;
pub mod memory;
