use crate::config::{ClassifierMode, Config};
use crate::domain::news::SentimentLabel;
use crate::domain::ports::{FeedSource, SentimentClassifier};
use crate::infrastructure::mock::{MockClassifier, MockFeedSource};
use crate::infrastructure::news::YahooFinanceFeed;
use crate::infrastructure::sentiment::{FinbertClassifier, LexiconClassifier};
use std::sync::Arc;
use tracing::info;

pub struct ServiceFactory;

impl ServiceFactory {
    /// Construct the feed and classifier services for the configured
    /// mode. Called once at startup; the returned handles are shared
    /// for the life of the process.
    pub fn create_services(
        config: &Config,
    ) -> (Arc<dyn FeedSource>, Arc<dyn SentimentClassifier>) {
        match config.classifier_mode {
            ClassifierMode::Finbert => {
                info!("Using FinBERT inference classifier ({})", config.finbert_url);
                (
                    Arc::new(YahooFinanceFeed::new(
                        &config.feed_base_url,
                        config.http_timeout_secs,
                    )),
                    Arc::new(FinbertClassifier::new(
                        &config.finbert_url,
                        &config.hf_token,
                        config.http_timeout_secs,
                    )),
                )
            }
            ClassifierMode::Lexicon => {
                info!("Using offline lexicon classifier");
                (
                    Arc::new(YahooFinanceFeed::new(
                        &config.feed_base_url,
                        config.http_timeout_secs,
                    )),
                    Arc::new(LexiconClassifier::new()),
                )
            }
            ClassifierMode::Mock => {
                info!("Using mock services");
                (
                    Arc::new(MockFeedSource::sample()),
                    Arc::new(
                        MockClassifier::new()
                            .rule("beats estimates", SentimentLabel::Positive, 0.9)
                            .rule("investigation", SentimentLabel::Negative, 0.8),
                    ),
                )
            }
        }
    }
}
