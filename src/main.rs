//! Finsent - headless news sentiment runner
//!
//! Fetches headlines for one ticker (or scans the industry table),
//! scores them with the configured classifier and logs the aggregate
//! view. Rendering proper belongs to a presentation layer; this binary
//! is the hosting process.
//!
//! # Usage
//! ```sh
//! HF_TOKEN=... TICKER=META KEYWORD=meta cargo run
//! ```
//!
//! # Environment Variables
//! - `CLASSIFIER_MODE` - finbert | lexicon | mock (default: finbert)
//! - `VIEW` - ticker | industry (default: ticker)
//! - `SECTOR` - industry view only: a sector name or "All" (default: All)

use anyhow::Result;
use finsent::application::system::{Application, ViewRequest, ViewResponse};
use finsent::config::Config;
use finsent::domain::industry::SectorSelection;
use tracing::{Level, info, warn};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Finsent {} starting...", env!("CARGO_PKG_VERSION"));

    // Missing HF_TOKEN in finbert mode fails here, before any scan.
    let config = Config::from_env()?;
    let app = Application::build(config.clone())?;

    let view = std::env::var("VIEW").unwrap_or_else(|_| "ticker".to_string());
    let request = match view.as_str() {
        "industry" => {
            let sector = std::env::var("SECTOR").unwrap_or_else(|_| "All".to_string());
            ViewRequest::IndustryTrends {
                selection: SectorSelection::parse(&sector),
            }
        }
        _ => ViewRequest::TickerSentiment {
            ticker: config.ticker.clone(),
            keyword: config.keyword.clone(),
        },
    };

    match app.dispatch(request).await? {
        ViewResponse::Ticker(result) => {
            info!(
                "Overall Sentiment: {} ({:.2})",
                result.overall, result.average_score
            );
            if result.is_empty() {
                info!("No articles matched the keyword.");
            }
            for article in &result.articles {
                info!(
                    "{} | {} | {} ({:.2})",
                    article.published, article.title, article.sentiment, article.score
                );
                info!("    {} -> {}", article.summary, article.link);
            }
        }
        ViewResponse::Industry(rows) => {
            if rows.is_empty() {
                warn!("No data for that selection.");
            }
            for row in &rows {
                info!(
                    "{} | {} | {:.2} | {}",
                    row.industry, row.company, row.score, row.sentiment
                );
            }
        }
    }

    Ok(())
}
