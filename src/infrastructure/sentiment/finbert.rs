//! ProsusAI/FinBERT via the Hugging Face inference HTTP API.
//!
//! The model is hosted; this adapter is a thin authenticated client.
//! Construction is cheap, the handle is shared for the life of the
//! process and is stateless across calls.

use crate::domain::errors::ClassifierError;
use crate::domain::news::{SentimentLabel, SentimentScore};
use crate::domain::ports::SentimentClassifier;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct RawScore {
    label: String,
    score: f64,
}

pub struct FinbertClassifier {
    client: Client,
    url: String,
    token: String,
}

impl FinbertClassifier {
    pub fn new(url: &str, token: &str, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            url: url.to_string(),
            token: token.to_string(),
        }
    }
}

/// The inference API wraps text-classification results per input:
/// `[[{"label": "...", "score": ...}, ...]]`, ranked best first.
fn parse_response(body: &str) -> Result<Vec<SentimentScore>, ClassifierError> {
    let batches: Vec<Vec<RawScore>> =
        serde_json::from_str(body).map_err(|e| ClassifierError::Shape {
            reason: e.to_string(),
        })?;

    let ranked = batches.into_iter().next().unwrap_or_default();

    ranked
        .into_iter()
        .map(|raw| {
            let label = SentimentLabel::parse(&raw.label)
                .ok_or_else(|| ClassifierError::UnknownLabel { label: raw.label.clone() })?;
            Ok(SentimentScore {
                label,
                score: raw.score,
            })
        })
        .collect()
}

#[async_trait]
impl SentimentClassifier for FinbertClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<SentimentScore>, ClassifierError> {
        debug!("Classifying {} chars via FinBERT", text.len());

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(&InferenceRequest { inputs: text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}
