//! Per-ticker pipeline: fetch headlines, filter by keyword, classify
//! each matching summary, fold the scores into an aggregate view.

use crate::application::aggregator::{self, DivisorPolicy};
use crate::application::dates::normalize_pub_date;
use crate::application::filter::keyword_matches;
use crate::domain::news::{AggregateResult, Article};
use crate::domain::ports::{FeedSource, SentimentClassifier};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct TickerAnalyzer {
    feed: Arc<dyn FeedSource>,
    classifier: Arc<dyn SentimentClassifier>,
    divisor_policy: DivisorPolicy,
}

impl TickerAnalyzer {
    pub fn new(feed: Arc<dyn FeedSource>, classifier: Arc<dyn SentimentClassifier>) -> Self {
        Self {
            feed,
            classifier,
            divisor_policy: DivisorPolicy::default(),
        }
    }

    pub fn with_policy(
        feed: Arc<dyn FeedSource>,
        classifier: Arc<dyn SentimentClassifier>,
        divisor_policy: DivisorPolicy,
    ) -> Self {
        Self {
            feed,
            classifier,
            divisor_policy,
        }
    }

    /// Run the full pipeline for one ticker. Feed and classifier
    /// transport errors propagate; an article the classifier returns
    /// nothing for is logged and dropped, and an empty match set is a
    /// defined (Neutral, 0.0) result, not an error.
    pub async fn analyze(&self, ticker: &str, keyword: &str) -> Result<AggregateResult> {
        let entries = self
            .feed
            .headlines(ticker)
            .await
            .with_context(|| format!("Fetching headlines for {ticker}"))?;
        debug!("Fetched {} feed entries for {}", entries.len(), ticker);

        let mut articles = Vec::new();
        let mut scored = Vec::new();

        for entry in entries {
            if !keyword_matches(&entry.summary, keyword) {
                continue;
            }

            let candidates = self
                .classifier
                .classify(&entry.summary)
                .await
                .with_context(|| format!("Classifying article \"{}\"", entry.title))?;

            let Some(top) = candidates.first().copied() else {
                warn!(
                    "Classifier returned no result for \"{}\", skipping article",
                    entry.title
                );
                continue;
            };

            scored.push((top.label, top.score));
            let published = normalize_pub_date(&entry.published);
            articles.push(Article {
                title: entry.title,
                link: entry.link,
                published,
                published_raw: entry.published,
                summary: entry.summary,
                sentiment: top.label,
                score: top.score,
            });
        }

        let (overall, average_score) = aggregator::aggregate(&scored, self.divisor_policy);
        info!(
            "{}: {} matching articles, overall {} ({:.2})",
            ticker,
            articles.len(),
            overall,
            average_score
        );

        Ok(AggregateResult {
            articles,
            overall,
            average_score,
        })
    }
}
