//! Application context: services are constructed once at startup and
//! handed by reference into every scan, replacing the module-level
//! singletons of earlier versions.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::application::analyzer::TickerAnalyzer;
use crate::application::scanner::IndustryScanner;
use crate::config::Config;
use crate::domain::industry::{IndustryTable, SectorSelection};
use crate::domain::news::{AggregateResult, CompanyRow};
use crate::infrastructure::factory::ServiceFactory;

/// A requested view plus its parameters. The presentation layer owns
/// navigation; dispatch here is a pure function of the request and the
/// injected services.
#[derive(Debug, Clone)]
pub enum ViewRequest {
    TickerSentiment { ticker: String, keyword: String },
    IndustryTrends { selection: SectorSelection },
}

#[derive(Debug, Clone)]
pub enum ViewResponse {
    Ticker(AggregateResult),
    Industry(Vec<CompanyRow>),
}

pub struct Application {
    pub config: Config,
    analyzer: Arc<TickerAnalyzer>,
    scanner: IndustryScanner,
}

impl Application {
    pub fn build(config: Config) -> Result<Self> {
        info!(
            "Building Finsent application (classifier: {:?})...",
            config.classifier_mode
        );

        let (feed, classifier) = ServiceFactory::create_services(&config);
        let analyzer = Arc::new(TickerAnalyzer::new(feed, classifier));
        let scanner = IndustryScanner::new(analyzer.clone(), IndustryTable::default());

        Ok(Self {
            config,
            analyzer,
            scanner,
        })
    }

    pub async fn dispatch(&self, request: ViewRequest) -> Result<ViewResponse> {
        match request {
            ViewRequest::TickerSentiment { ticker, keyword } => {
                let result = self.analyzer.analyze(&ticker, &keyword).await?;
                Ok(ViewResponse::Ticker(result))
            }
            ViewRequest::IndustryTrends { selection } => {
                let rows = self.scanner.scan(&selection).await?;
                Ok(ViewResponse::Industry(rows))
            }
        }
    }
}
