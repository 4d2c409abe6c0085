//! In-memory doubles for both ports, used by tests and by the fully
//! offline mock mode.

use crate::domain::errors::{ClassifierError, FeedError};
use crate::domain::news::{FeedEntry, SentimentLabel, SentimentScore};
use crate::domain::ports::{FeedSource, SentimentClassifier};
use async_trait::async_trait;
use std::collections::HashMap;

/// Feed source serving canned entries per ticker. Unknown tickers get
/// the default entries (empty unless set).
pub struct MockFeedSource {
    entries: HashMap<String, Vec<FeedEntry>>,
    default_entries: Vec<FeedEntry>,
}

impl MockFeedSource {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            default_entries: Vec::new(),
        }
    }

    /// Canned demo feed returned for every ticker, mirroring the shape
    /// of a real headline document.
    pub fn sample() -> Self {
        let mut feed = Self::new();
        feed.default_entries = vec![
            FeedEntry {
                title: "Earnings beat sends shares higher".to_string(),
                link: "https://example.com/news/1".to_string(),
                published: "Mon, 02 Jun 2025 10:00:00 GMT".to_string(),
                summary: "The company beats estimates with record revenue.".to_string(),
            },
            FeedEntry {
                title: "Regulator opens probe".to_string(),
                link: "https://example.com/news/2".to_string(),
                published: "Tue, 03 Jun 2025 09:30:00 GMT".to_string(),
                summary: "Shares slip as an investigation begins.".to_string(),
            },
        ];
        feed
    }

    pub fn insert(&mut self, ticker: &str, entries: Vec<FeedEntry>) {
        self.entries.insert(ticker.to_string(), entries);
    }

    pub fn with_entries(ticker: &str, entries: Vec<FeedEntry>) -> Self {
        let mut feed = Self::new();
        feed.insert(ticker, entries);
        feed
    }
}

impl Default for MockFeedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn headlines(&self, ticker: &str) -> Result<Vec<FeedEntry>, FeedError> {
        Ok(self
            .entries
            .get(ticker)
            .cloned()
            .unwrap_or_else(|| self.default_entries.clone()))
    }
}

/// Classifier scoring by substring lookup. The first matching rule
/// wins; a muted rule yields an empty result set, everything else
/// falls back to Neutral at 0.5.
pub struct MockClassifier {
    rules: Vec<(String, Option<SentimentScore>)>,
    fallback: SentimentScore,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            fallback: SentimentScore {
                label: SentimentLabel::Neutral,
                score: 0.5,
            },
        }
    }

    pub fn rule(mut self, needle: &str, label: SentimentLabel, score: f64) -> Self {
        self.rules.push((
            needle.to_lowercase(),
            Some(SentimentScore { label, score }),
        ));
        self
    }

    /// Texts containing `needle` get an empty result set, the way a
    /// backend that produced nothing for an input would.
    pub fn mute(mut self, needle: &str) -> Self {
        self.rules.push((needle.to_lowercase(), None));
        self
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentClassifier for MockClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<SentimentScore>, ClassifierError> {
        let lower = text.to_lowercase();
        for (needle, outcome) in &self.rules {
            if lower.contains(needle) {
                return Ok(outcome.map(|s| vec![s]).unwrap_or_default());
            }
        }
        Ok(vec![self.fallback])
    }
}
