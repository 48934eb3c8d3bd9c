//! Temporal qualifier: which time window does a query imply, and how well does
//! a timestamp fit it.
//!
//! The reference instant is always passed in so scoring stays deterministic.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::config::RankingConfig;

/// Time window implied by a recall query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalWindow {
    Today,
    Yesterday,
    LastWeek,
    Recent,
    /// No time phrase in the query.
    Unscoped,
}

impl TemporalWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::LastWeek => "last_week",
            Self::Recent => "recent",
            Self::Unscoped => "unscoped",
        }
    }
}

impl std::fmt::Display for TemporalWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phrases checked in priority order; first hit wins.
const WINDOW_PHRASES: &[(&str, TemporalWindow)] = &[
    ("today", TemporalWindow::Today),
    ("yesterday", TemporalWindow::Yesterday),
    ("last week", TemporalWindow::LastWeek),
    ("recent", TemporalWindow::Recent),
];

/// Classify the window a query refers to.
pub fn classify_window(query: &str) -> TemporalWindow {
    let lowered = query.to_lowercase();
    WINDOW_PHRASES
        .iter()
        .find(|(phrase, _)| lowered.contains(phrase))
        .map(|(_, window)| *window)
        .unwrap_or(TemporalWindow::Unscoped)
}

/// Temporal bonus for `timestamp` under `window`, relative to `now`.
///
/// A missing timestamp never matches. Future timestamps never fall inside a
/// trailing window.
pub fn score(
    timestamp: Option<DateTime<Utc>>,
    window: TemporalWindow,
    now: DateTime<Utc>,
    config: &RankingConfig,
) -> f64 {
    let Some(ts) = timestamp else {
        return 0.0;
    };

    let matched = match window {
        TemporalWindow::Today => ts.date_naive() == now.date_naive(),
        TemporalWindow::Yesterday => ts.date_naive() == (now - Duration::days(1)).date_naive(),
        TemporalWindow::LastWeek => within_trailing_days(ts, now, config.last_week_days),
        TemporalWindow::Recent => within_trailing_days(ts, now, config.recent_days),
        TemporalWindow::Unscoped => false,
    };

    if !matched {
        return 0.0;
    }

    match window {
        TemporalWindow::Today => config.today_bonus,
        TemporalWindow::Yesterday => config.yesterday_bonus,
        TemporalWindow::LastWeek => config.last_week_bonus,
        TemporalWindow::Recent => config.recent_bonus,
        TemporalWindow::Unscoped => 0.0,
    }
}

/// Parse an RFC 3339 timestamp, yielding `None` on malformed input.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| tracing::warn!(raw = %raw, error = %e, "unparseable timestamp"))
        .ok()
}

fn within_trailing_days(ts: DateTime<Utc>, now: DateTime<Utc>, days: i64) -> bool {
    ts <= now && now - ts <= Duration::days(days)
}
