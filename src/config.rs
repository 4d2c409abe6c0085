use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Which backend scores article text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierMode {
    Finbert,
    Lexicon,
    Mock,
}

impl FromStr for ClassifierMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "finbert" => Ok(ClassifierMode::Finbert),
            "lexicon" => Ok(ClassifierMode::Lexicon),
            "mock" => Ok(ClassifierMode::Mock),
            _ => anyhow::bail!(
                "Invalid CLASSIFIER_MODE: {}. Must be 'finbert', 'lexicon' or 'mock'",
                s
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub classifier_mode: ClassifierMode,
    pub hf_token: String,
    pub finbert_url: String,
    pub feed_base_url: String,
    pub http_timeout_secs: u64,
    pub ticker: String,
    pub keyword: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mode_str = env::var("CLASSIFIER_MODE").unwrap_or_else(|_| "finbert".to_string());
        let classifier_mode = ClassifierMode::from_str(&mode_str)?;

        // The remote classifier needs a Hugging Face access token.
        // Missing token is a fatal startup condition, checked before
        // any scan can be attempted.
        let hf_token = env::var("HF_TOKEN").unwrap_or_default();
        if classifier_mode == ClassifierMode::Finbert && hf_token.is_empty() {
            anyhow::bail!("HF_TOKEN not found. Set it or switch CLASSIFIER_MODE to 'lexicon'.");
        }

        let finbert_url = env::var("FINBERT_URL").unwrap_or_else(|_| {
            "https://api-inference.huggingface.co/models/ProsusAI/finbert".to_string()
        });
        let feed_base_url = env::var("FEED_BASE_URL")
            .unwrap_or_else(|_| "https://finance.yahoo.com/rss/headline".to_string());
        let http_timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .context("Invalid HTTP_TIMEOUT_SECS")?;

        let ticker = env::var("TICKER").unwrap_or_else(|_| "META".to_string());
        let keyword = env::var("KEYWORD").unwrap_or_else(|_| "meta".to_string());

        Ok(Self {
            classifier_mode,
            hf_token,
            finbert_url,
            feed_base_url,
            http_timeout_secs,
            ticker,
            keyword,
        })
    }
}
