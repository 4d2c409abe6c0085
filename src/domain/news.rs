use serde::{Deserialize, Serialize};
use std::fmt;

/// Directional label assigned by a sentiment classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "Positive"),
            Self::Negative => write!(f, "Negative"),
            Self::Neutral => write!(f, "Neutral"),
        }
    }
}

impl SentimentLabel {
    /// Parse a classifier label string. The vocabulary is exactly
    /// positive/negative/neutral, matched case-insensitively.
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "positive" => Some(Self::Positive),
            "negative" => Some(Self::Negative),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }

    /// Signed contribution of a confidence score under this label.
    /// Neutral articles contribute nothing to the running total.
    pub fn signed(self, score: f64) -> f64 {
        match self {
            Self::Positive => score,
            Self::Negative => -score,
            Self::Neutral => 0.0,
        }
    }

    pub fn is_directional(self) -> bool {
        !matches!(self, Self::Neutral)
    }
}

/// One label/confidence candidate returned by a classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub label: SentimentLabel,
    pub score: f64,
}

/// Raw feed record as decoded from a syndication document. Missing
/// fields are normalized to empty strings at the adapter edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    pub published: String,
    pub summary: String,
}

/// A scored article. Immutable once built; not persisted anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub published_raw: String,
    /// `published_raw` re-emitted as "YYYY-MM-DD HH:MM:SS", or the raw
    /// string unchanged when it did not parse.
    pub published: String,
    pub summary: String,
    pub sentiment: SentimentLabel,
    pub score: f64,
}

/// Per-ticker view: the matching articles plus the folded signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateResult {
    pub articles: Vec<Article>,
    pub overall: SentimentLabel,
    pub average_score: f64,
}

impl AggregateResult {
    /// An overall Neutral at 0.0 is also what an empty scan yields;
    /// callers that care must check the article list.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// One row of the industry view, one per scanned company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRow {
    pub industry: String,
    pub company: String,
    pub score: f64,
    pub sentiment: SentimentLabel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parse_is_case_insensitive() {
        assert_eq!(SentimentLabel::parse("POSITIVE"), Some(SentimentLabel::Positive));
        assert_eq!(SentimentLabel::parse("Negative"), Some(SentimentLabel::Negative));
        assert_eq!(SentimentLabel::parse("neutral"), Some(SentimentLabel::Neutral));
        assert_eq!(SentimentLabel::parse("bullish"), None);
    }

    #[test]
    fn test_signed_contributions() {
        assert_eq!(SentimentLabel::Positive.signed(0.8), 0.8);
        assert_eq!(SentimentLabel::Negative.signed(0.8), -0.8);
        assert_eq!(SentimentLabel::Neutral.signed(0.8), 0.0);
    }
}
