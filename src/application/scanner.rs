//! Sector-wide scan: the per-ticker pipeline applied across the
//! industry table, one row per company.

use crate::application::analyzer::TickerAnalyzer;
use crate::domain::industry::{IndustryTable, SectorSelection};
use crate::domain::news::CompanyRow;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

pub struct IndustryScanner {
    analyzer: Arc<TickerAnalyzer>,
    table: IndustryTable,
}

impl IndustryScanner {
    pub fn new(analyzer: Arc<TickerAnalyzer>, table: IndustryTable) -> Self {
        Self { analyzer, table }
    }

    pub fn table(&self) -> &IndustryTable {
        &self.table
    }

    /// Scan every company in the selected sectors, sequentially and in
    /// table order. The company display name is both the row label and
    /// the summary-filter keyword; the ticker is the fetch key. Output
    /// order is iteration order, never re-sorted by score.
    pub async fn scan(&self, selection: &SectorSelection) -> Result<Vec<CompanyRow>> {
        let mut rows = Vec::new();

        for sector in self.table.sectors() {
            if !selection.selects(&sector.name) {
                continue;
            }
            for company in &sector.companies {
                let result = self.analyzer.analyze(&company.ticker, &company.name).await?;
                rows.push(CompanyRow {
                    industry: sector.name.clone(),
                    company: company.name.clone(),
                    score: result.average_score,
                    sentiment: result.overall,
                });
            }
        }

        info!("Industry scan produced {} rows", rows.len());
        Ok(rows)
    }
}
