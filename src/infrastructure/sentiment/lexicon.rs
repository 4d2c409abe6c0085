//! Offline sentiment backend: VADER scoring with an equity-news
//! lexicon overlay. Useful when no inference token is available; the
//! remote FinBERT backend is the production scorer.

use crate::domain::errors::ClassifierError;
use crate::domain::news::{SentimentLabel, SentimentScore};
use crate::domain::ports::SentimentClassifier;
use async_trait::async_trait;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Equity-news phrases VADER's general lexicon misses, with the
/// weight each adds to the compound score.
const POSITIVE_TERMS: &[(&str, f64)] = &[
    ("beats estimates", 0.4),
    ("beat expectations", 0.4),
    ("tops forecasts", 0.4),
    ("raises guidance", 0.5),
    ("record revenue", 0.4),
    ("record profit", 0.4),
    ("upgrade", 0.3),
    ("upgraded", 0.3),
    ("outperform", 0.3),
    ("price target raised", 0.3),
    ("dividend increase", 0.3),
    ("buyback", 0.2),
    ("strong demand", 0.3),
    ("surge", 0.4),
    ("surges", 0.4),
    ("rally", 0.3),
    ("rallies", 0.3),
    ("all-time high", 0.4),
];

const NEGATIVE_TERMS: &[(&str, f64)] = &[
    ("misses estimates", -0.4),
    ("missed expectations", -0.4),
    ("cuts guidance", -0.5),
    ("lowers guidance", -0.5),
    ("downgrade", -0.3),
    ("downgraded", -0.3),
    ("underperform", -0.3),
    ("price target cut", -0.3),
    ("layoffs", -0.4),
    ("recall", -0.3),
    ("lawsuit", -0.4),
    ("probe", -0.3),
    ("investigation", -0.3),
    ("plunge", -0.5),
    ("plunges", -0.5),
    ("sell-off", -0.4),
    ("selloff", -0.4),
    ("bankruptcy", -0.6),
    ("fraud", -0.5),
];

/// Compound scores inside (-0.05, 0.05) are read as Neutral.
const NEUTRAL_BAND: f64 = 0.05;

pub struct LexiconClassifier {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl LexiconClassifier {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    fn lexicon_boost(&self, text: &str) -> f64 {
        let text_lower = text.to_lowercase();
        let mut boost = 0.0;

        for (term, weight) in POSITIVE_TERMS {
            if text_lower.contains(term) {
                boost += weight;
            }
        }
        for (term, weight) in NEGATIVE_TERMS {
            if text_lower.contains(term) {
                boost += weight; // weight is already negative
            }
        }

        boost
    }

    /// Combined compound score in [-1, 1].
    fn compound(&self, text: &str) -> f64 {
        let scores = self.analyzer.polarity_scores(text);
        let vader_score = scores["compound"];
        (vader_score + self.lexicon_boost(text) * 0.5).clamp(-1.0, 1.0)
    }
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentClassifier for LexiconClassifier {
    /// Maps the compound score onto the classifier contract: the label
    /// follows the sign, the confidence is the magnitude (for Neutral,
    /// the remaining distance to either pole).
    async fn classify(&self, text: &str) -> Result<Vec<SentimentScore>, ClassifierError> {
        if text.trim().is_empty() {
            return Ok(vec![SentimentScore {
                label: SentimentLabel::Neutral,
                score: 1.0,
            }]);
        }

        let compound = self.compound(text);
        let (label, score) = if compound >= NEUTRAL_BAND {
            (SentimentLabel::Positive, compound)
        } else if compound <= -NEUTRAL_BAND {
            (SentimentLabel::Negative, -compound)
        } else {
            (SentimentLabel::Neutral, 1.0 - compound.abs())
        };

        Ok(vec![SentimentScore { label, score }])
    }
}
