use crate::domain::errors::{ClassifierError, FeedError};
use crate::domain::news::{FeedEntry, SentimentScore};
use async_trait::async_trait;

// Need async_trait for async functions in traits
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the current headlines for one ticker symbol.
    async fn headlines(&self, ticker: &str) -> Result<Vec<FeedEntry>, FeedError>;
}

#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Ranked label/confidence candidates for one text, best first.
    /// An empty result means the backend produced nothing for this
    /// text; callers treat that as a soft skip, not an error.
    async fn classify(&self, text: &str) -> Result<Vec<SentimentScore>, ClassifierError>;
}
