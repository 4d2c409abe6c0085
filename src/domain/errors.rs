use thiserror::Error;

/// Errors surfaced by feed adapters. Transport and decode failures
/// propagate to the caller; nothing here is retried.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Malformed feed document: {0}")]
    Malformed(#[from] rss::Error),

    #[error("Invalid feed URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Errors surfaced by classifier adapters.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Classifier request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Classifier returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected classifier response shape: {reason}")]
    Shape { reason: String },

    #[error("Unknown sentiment label: {label}")]
    UnknownLabel { label: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_error_formatting() {
        let error = FeedError::Status {
            status: 503,
            url: "https://finance.yahoo.com/rss/headline?s=META".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("s=META"));
    }

    #[test]
    fn test_classifier_error_formatting() {
        let error = ClassifierError::UnknownLabel {
            label: "bullish".to_string(),
        };

        assert!(error.to_string().contains("bullish"));
    }
}
