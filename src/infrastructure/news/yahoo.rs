//! Yahoo Finance headline feed, one RSS document per ticker.

use crate::domain::errors::FeedError;
use crate::domain::news::FeedEntry;
use crate::domain::ports::FeedSource;
use async_trait::async_trait;
use reqwest::Client;
use rss::Channel;
use std::io::Cursor;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

pub struct YahooFinanceFeed {
    client: Client,
    base_url: String,
}

impl YahooFinanceFeed {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            base_url: base_url.to_string(),
        }
    }

    /// Templated feed URL keyed by ticker, e.g.
    /// `https://finance.yahoo.com/rss/headline?s=META`.
    fn feed_url(&self, ticker: &str) -> Result<Url, FeedError> {
        let mut url = Url::parse(&self.base_url)?;
        url.query_pairs_mut().append_pair("s", ticker);
        Ok(url)
    }
}

#[async_trait]
impl FeedSource for YahooFinanceFeed {
    async fn headlines(&self, ticker: &str) -> Result<Vec<FeedEntry>, FeedError> {
        let url = self.feed_url(ticker)?;
        debug!("Fetching RSS feed: {}", url);

        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(FeedError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        let channel = Channel::read_from(Cursor::new(bytes))?;

        let entries: Vec<FeedEntry> = channel
            .items()
            .iter()
            .map(|item| FeedEntry {
                title: item.title().unwrap_or("").to_string(),
                link: item.link().unwrap_or("").to_string(),
                published: item.pub_date().unwrap_or("").to_string(),
                summary: item.description().unwrap_or("").to_string(),
            })
            .collect();

        info!("Fetched {} feed entries for {}", entries.len(), ticker);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_url_encodes_ticker() {
        let feed = YahooFinanceFeed::new("https://finance.yahoo.com/rss/headline", 10);
        let url = feed.feed_url("BRK.B").unwrap();
        assert_eq!(
            url.as_str(),
            "https://finance.yahoo.com/rss/headline?s=BRK.B"
        );
    }

    #[test]
    fn test_channel_items_map_to_entries() {
        let xml = r#"<?xml version="1.0"?>
            <rss version="2.0"><channel>
              <title>Yahoo Finance</title>
              <link>https://finance.yahoo.com</link>
              <description>Headlines</description>
              <item>
                <title>Meta beats estimates</title>
                <link>https://example.com/a</link>
                <pubDate>Mon, 02 Jun 2025 10:00:00 GMT</pubDate>
                <description>Meta posted record revenue.</description>
              </item>
              <item>
                <title>Untitled wire item</title>
              </item>
            </channel></rss>"#;

        let channel = Channel::read_from(Cursor::new(xml.as_bytes())).unwrap();
        let items = channel.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title(), Some("Meta beats estimates"));
        // Missing fields decode to None and land as empty strings
        assert!(items[1].description().is_none());
    }
}
