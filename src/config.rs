use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct FitRecallConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub ranking: RankingConfig,
    pub retrieval: RetrievalConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
    pub default_user: String,
    /// Optional JSON file of baseline seeds, used when the baseline table is empty.
    pub baseline_path: Option<String>,
}

/// Ranking constants. Tuned by feel, not derived.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RankingConfig {
    pub today_bonus: f64,
    pub yesterday_bonus: f64,
    pub last_week_bonus: f64,
    pub recent_bonus: f64,
    /// Added once per query token found in the entry.
    pub token_bonus: f64,
    /// Applied to activity-bearing entries when nothing else fires.
    pub activity_base: f64,
    /// Entries scoring at or below this are dropped.
    pub min_relevance: f64,
    /// Relevances this close are ordered by recency instead.
    pub tie_window: f64,
    pub last_week_days: i64,
    pub recent_days: i64,
    pub min_token_len: usize,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RetrievalConfig {
    pub default_limit: usize,
    pub stats_limit: usize,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GenerationConfig {
    /// `"none"` or `"ollama"`.
    pub provider: String,
    pub endpoint: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_fitrecall_dir()
            .join("memory.db")
            .to_string_lossy()
            .into_owned();
        Self {
            db_path,
            default_user: "default".into(),
            baseline_path: None,
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            today_bonus: 1.0,
            yesterday_bonus: 1.0,
            last_week_bonus: 0.8,
            recent_bonus: 0.7,
            token_bonus: 0.3,
            activity_base: 0.5,
            min_relevance: 0.2,
            tie_window: 0.1,
            last_week_days: 7,
            recent_days: 3,
            min_token_len: 3,
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            stats_limit: 10_000,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: "none".into(),
            endpoint: "http://localhost:11434".into(),
            model: "llama3.2".into(),
            timeout_secs: 30,
        }
    }
}

/// Returns `~/.fitrecall/`, or `./.fitrecall` when no home directory is known.
pub fn default_fitrecall_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".fitrecall")
}

/// Returns the default config file path: `~/.fitrecall/config.toml`
pub fn default_config_path() -> PathBuf {
    default_fitrecall_dir().join("config.toml")
}

impl FitRecallConfig {
    /// `~/.fitrecall/config.toml` plus `FITRECALL_*` overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// A missing file is not an error; defaults fill every unset field.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!(path = %path.display(), "config file absent, using defaults");
            FitRecallConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("FITRECALL_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("FITRECALL_USER") {
            self.storage.default_user = val;
        }
        if let Ok(val) = std::env::var("FITRECALL_LOG_LEVEL") {
            self.server.log_level = val;
        }
        if let Ok(val) = std::env::var("FITRECALL_GENERATOR") {
            self.generation.provider = val;
        }
    }

    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }

    pub fn resolved_baseline_path(&self) -> Option<PathBuf> {
        self.storage.baseline_path.as_deref().map(expand_tilde)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
