//! End-to-end runs of the per-ticker pipeline over mock services.

use finsent::application::aggregator::DivisorPolicy;
use finsent::application::analyzer::TickerAnalyzer;
use finsent::domain::news::{FeedEntry, SentimentLabel};
use finsent::infrastructure::mock::{MockClassifier, MockFeedSource};
use std::sync::Arc;

fn entry(title: &str, published: &str, summary: &str) -> FeedEntry {
    FeedEntry {
        title: title.to_string(),
        link: format!("https://example.com/{}", title.replace(' ', "-")),
        published: published.to_string(),
        summary: summary.to_string(),
    }
}

fn meta_feed() -> MockFeedSource {
    MockFeedSource::with_entries(
        "META",
        vec![
            entry(
                "Meta beats estimates",
                "Mon, 02 Jun 2025 10:00:00 GMT",
                "Meta posted record revenue this quarter.",
            ),
            entry(
                "Meta faces probe",
                "Mon, 02 Jun 2025 11:00:00 GMT",
                "Regulators opened an investigation into Meta.",
            ),
            entry(
                "Chip sector roundup",
                "Mon, 02 Jun 2025 12:00:00 GMT",
                "A quiet day for semiconductor names.",
            ),
        ],
    )
}

#[tokio::test]
async fn keyword_filter_limits_articles() {
    let classifier = MockClassifier::new()
        .rule("record revenue", SentimentLabel::Positive, 0.9)
        .rule("investigation", SentimentLabel::Negative, 0.2);
    let analyzer = TickerAnalyzer::new(Arc::new(meta_feed()), Arc::new(classifier));

    let result = analyzer.analyze("META", "meta").await.unwrap();

    // The semiconductor entry does not mention the keyword
    assert_eq!(result.articles.len(), 2);
    assert!(
        result
            .articles
            .iter()
            .all(|a| a.summary.to_lowercase().contains("meta"))
    );

    // (0.9 - 0.2) / 2 = 0.35 -> Positive
    assert_eq!(result.overall, SentimentLabel::Positive);
    assert!((result.average_score - 0.35).abs() < 1e-12);
}

#[tokio::test]
async fn empty_keyword_matches_every_entry() {
    let analyzer = TickerAnalyzer::new(Arc::new(meta_feed()), Arc::new(MockClassifier::new()));

    let result = analyzer.analyze("META", "").await.unwrap();
    assert_eq!(result.articles.len(), 3);
}

#[tokio::test]
async fn no_matching_articles_is_neutral_zero_not_error() {
    let analyzer = TickerAnalyzer::new(Arc::new(meta_feed()), Arc::new(MockClassifier::new()));

    let result = analyzer.analyze("META", "no such keyword").await.unwrap();
    assert!(result.is_empty());
    assert_eq!(result.overall, SentimentLabel::Neutral);
    assert_eq!(result.average_score, 0.0);
}

#[tokio::test]
async fn unknown_ticker_yields_empty_result() {
    let analyzer = TickerAnalyzer::new(
        Arc::new(MockFeedSource::new()),
        Arc::new(MockClassifier::new()),
    );

    let result = analyzer.analyze("ZZZZ", "anything").await.unwrap();
    assert!(result.is_empty());
    assert_eq!(result.overall, SentimentLabel::Neutral);
}

#[tokio::test]
async fn published_dates_are_normalized_with_passthrough() {
    let feed = MockFeedSource::with_entries(
        "META",
        vec![
            entry(
                "Dated item",
                "Mon, 02 Jun 2025 10:00:00 GMT",
                "meta update one",
            ),
            entry("Undated item", "sometime last week", "meta update two"),
        ],
    );
    let analyzer = TickerAnalyzer::new(Arc::new(feed), Arc::new(MockClassifier::new()));

    let result = analyzer.analyze("META", "meta").await.unwrap();
    assert_eq!(result.articles[0].published, "2025-06-02 10:00:00");
    assert_eq!(result.articles[0].published_raw, "Mon, 02 Jun 2025 10:00:00 GMT");
    // Unparseable dates pass through unchanged
    assert_eq!(result.articles[1].published, "sometime last week");
}

#[tokio::test]
async fn article_with_no_classifier_output_is_dropped() {
    let classifier = MockClassifier::new()
        .mute("investigation")
        .rule("record revenue", SentimentLabel::Positive, 0.9);
    let analyzer = TickerAnalyzer::new(Arc::new(meta_feed()), Arc::new(classifier));

    let result = analyzer.analyze("META", "meta").await.unwrap();

    // The muted article is excluded from the list and the divisor
    assert_eq!(result.articles.len(), 1);
    assert_eq!(result.articles[0].title, "Meta beats estimates");
    assert!((result.average_score - 0.9).abs() < 1e-12);
}

#[tokio::test]
async fn divisor_policy_changes_the_average() {
    let feed = MockFeedSource::with_entries(
        "META",
        vec![
            entry("Strong quarter", "", "meta beats expectations"),
            entry("Filler one", "", "meta housekeeping note"),
            entry("Filler two", "", "meta schedule update"),
        ],
    );
    let classifier = MockClassifier::new().rule("beats", SentimentLabel::Positive, 0.6);

    // AllScored: 0.6 / 3 = 0.2 -> Positive
    let analyzer = TickerAnalyzer::new(Arc::new(feed), Arc::new(classifier));
    let result = analyzer.analyze("META", "meta").await.unwrap();
    assert_eq!(result.overall, SentimentLabel::Positive);
    assert!((result.average_score - 0.2).abs() < 1e-12);

    // DirectionalOnly: 0.6 / 1 = 0.6
    let feed = MockFeedSource::with_entries(
        "META",
        vec![
            entry("Strong quarter", "", "meta beats expectations"),
            entry("Filler one", "", "meta housekeeping note"),
            entry("Filler two", "", "meta schedule update"),
        ],
    );
    let classifier = MockClassifier::new().rule("beats", SentimentLabel::Positive, 0.6);
    let analyzer =
        TickerAnalyzer::with_policy(Arc::new(feed), Arc::new(classifier), DivisorPolicy::DirectionalOnly);
    let result = analyzer.analyze("META", "meta").await.unwrap();
    assert!((result.average_score - 0.6).abs() < 1e-12);
}
