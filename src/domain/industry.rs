//! Static sector/company reference table for the industry view.
//!
//! Read-only data defined at process start. Iteration order is
//! definition order, which is also the output order of a scan.

use serde::{Deserialize, Serialize};

/// Sector name, company display names and their ticker symbols.
/// The company name doubles as the summary-filter keyword when the
/// company is scanned.
const INDUSTRY_TABLE: &[(&str, &[(&str, &str)])] = &[
    (
        "Tech",
        &[
            ("Apple", "AAPL"),
            ("Microsoft", "MSFT"),
            ("Amazon", "AMZN"),
            ("Alphabet", "GOOGL"),
            ("Meta", "META"),
            ("Nvidia", "NVDA"),
            ("Intel", "INTC"),
            ("Oracle", "ORCL"),
            ("Adobe", "ADBE"),
            ("Salesforce", "CRM"),
            ("Tesla", "TSLA"),
        ],
    ),
    (
        "Commodity Market",
        &[
            ("Freeport-McMoRan", "FCX"),
            ("Newmont", "NEM"),
            ("Barrick Gold", "GOLD"),
            ("Vale", "VALE"),
            ("BHP Group", "BHP"),
            ("Teck Resources", "TECK"),
            ("Nutrien", "NTR"),
            ("Glencore", "GLNCY"),
            ("Anglo American", "NGLOY"),
            ("Rio Tinto", "RIO"),
        ],
    ),
    (
        "Fast-moving Consumer Goods (FMCG)",
        &[
            ("Procter & Gamble", "PG"),
            ("Unilever", "UL"),
            ("Nestlé", "NSRGY"),
            ("Coca-Cola", "KO"),
            ("PepsiCo", "PEP"),
            ("Colgate-Palmolive", "CL"),
            ("Mondelez International", "MDLZ"),
            ("Kimberly-Clark", "KMB"),
            ("Philip Morris International", "PM"),
            ("Diageo", "DEO"),
        ],
    ),
    (
        "Medical",
        &[
            ("Johnson & Johnson", "JNJ"),
            ("Pfizer", "PFE"),
            ("Merck & Co.", "MRK"),
            ("AbbVie", "ABBV"),
            ("Medtronic", "MDT"),
            ("UnitedHealth Group", "UNH"),
            ("Amgen", "AMGN"),
            ("Gilead Sciences", "GILD"),
            ("Bristol-Myers Squibb", "BMY"),
            ("Eli Lilly", "LLY"),
        ],
    ),
    (
        "New Energy",
        &[
            ("NextEra Energy", "NEE"),
            ("Enphase Energy", "ENPH"),
            ("Plug Power", "PLUG"),
            ("First Solar", "FSLR"),
            ("SolarEdge Technologies", "SEDG"),
            ("Bloom Energy", "BE"),
            ("Brookfield Renewable Partners", "BEP"),
            ("ChargePoint Holdings", "CHPT"),
            ("FuelCell Energy", "FCEL"),
        ],
    ),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyEntry {
    pub name: String,
    pub ticker: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorEntry {
    pub name: String,
    pub companies: Vec<CompanyEntry>,
}

/// Ordered sector table. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct IndustryTable {
    sectors: Vec<SectorEntry>,
}

impl IndustryTable {
    pub fn new(sectors: Vec<SectorEntry>) -> Self {
        Self { sectors }
    }

    pub fn sectors(&self) -> &[SectorEntry] {
        &self.sectors
    }

    pub fn get(&self, name: &str) -> Option<&SectorEntry> {
        self.sectors.iter().find(|s| s.name == name)
    }

    pub fn sector_names(&self) -> Vec<String> {
        self.sectors.iter().map(|s| s.name.clone()).collect()
    }
}

impl Default for IndustryTable {
    fn default() -> Self {
        let sectors = INDUSTRY_TABLE
            .iter()
            .map(|(name, companies)| SectorEntry {
                name: (*name).to_string(),
                companies: companies
                    .iter()
                    .map(|(company, ticker)| CompanyEntry {
                        name: (*company).to_string(),
                        ticker: (*ticker).to_string(),
                    })
                    .collect(),
            })
            .collect();
        Self { sectors }
    }
}

/// Which sectors an industry scan covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectorSelection {
    All,
    Only(Vec<String>),
}

impl SectorSelection {
    /// "All" (case-insensitive) selects everything; any other string
    /// names a single sector. Unknown names select nothing.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(vec![s.to_string()])
        }
    }

    pub fn selects(&self, sector: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(names) => names.iter().any(|n| n == sector),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_order_is_stable() {
        let table = IndustryTable::default();
        let names = table.sector_names();
        assert_eq!(names[0], "Tech");
        assert_eq!(names[4], "New Energy");
        assert_eq!(table.sectors().len(), 5);

        // Companies keep definition order too
        let tech = table.get("Tech").unwrap();
        assert_eq!(tech.companies[0].ticker, "AAPL");
        assert_eq!(tech.companies[4].ticker, "META");
    }

    #[test]
    fn test_selection_parse() {
        assert_eq!(SectorSelection::parse("All"), SectorSelection::All);
        assert_eq!(SectorSelection::parse("ALL"), SectorSelection::All);
        assert_eq!(
            SectorSelection::parse("Medical"),
            SectorSelection::Only(vec!["Medical".to_string()])
        );
    }

    #[test]
    fn test_selection_selects() {
        let only = SectorSelection::parse("Tech");
        assert!(only.selects("Tech"));
        assert!(!only.selects("Medical"));
        assert!(SectorSelection::All.selects("anything"));
    }
}
