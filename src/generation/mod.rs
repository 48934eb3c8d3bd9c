//! Text-generation collaborator.
//!
//! Provides the [`TextGenerator`] trait used by the recall summarizer and an
//! Ollama-backed implementation. The provider is created via
//! [`create_generator`] from configuration; `"none"` disables generation and
//! the summarizer falls back to its templated narrative.

pub mod ollama;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::GenerationConfig;

/// Failure modes of a text-generation backend. Never surfaced past the summarizer.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generator unavailable: {0}")]
    Unavailable(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generator returned HTTP {0}")]
    Status(u16),

    #[error("invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("generator returned an empty response")]
    Empty,
}

/// Turns a prompt into text. Implementations may fail; callers must recover.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Create a generator from config, or `None` when generation is disabled.
pub fn create_generator(config: &GenerationConfig) -> anyhow::Result<Option<Arc<dyn TextGenerator>>> {
    match config.provider.as_str() {
        "none" | "" => Ok(None),
        "ollama" => {
            let generator = ollama::OllamaGenerator::new(config)?;
            tracing::info!(endpoint = %config.endpoint, model = %config.model, "text generator ready");
            Ok(Some(Arc::new(generator)))
        }
        other => anyhow::bail!("unknown generation provider: {other}. Supported: none, ollama"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_provider_disables_generation() {
        let config = GenerationConfig::default();
        assert!(create_generator(&config).unwrap().is_none());
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let config = GenerationConfig {
            provider: "carrier-pigeon".into(),
            ..GenerationConfig::default()
        };
        let err = create_generator(&config).err().unwrap();
        assert!(err.to_string().contains("unknown generation provider"));
    }

    #[test]
    fn ollama_provider_builds() {
        let config = GenerationConfig {
            provider: "ollama".into(),
            ..GenerationConfig::default()
        };
        assert!(create_generator(&config).unwrap().is_some());
    }
}
