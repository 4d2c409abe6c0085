pub mod yahoo;

pub use yahoo::YahooFinanceFeed;
