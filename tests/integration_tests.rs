use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use sentiment_report::analyzers::assemble::assemble;
use sentiment_report::analyzers::label::SentimentLabel;
use sentiment_report::analyzers::types::{AggregateResult, FeedItem};
use sentiment_report::config::Config;
use sentiment_report::error::{ReportError, Result};
use sentiment_report::infra::pdf::PdfRenderer;
use sentiment_report::infra::sample::{
    SAMPLE_NARRATIVE, SAMPLE_SCORE, SAMPLE_TICKER, SampleNarrator,
};
use sentiment_report::parser::parse_feed;
use sentiment_report::pipeline::{run_live, run_sample};
use sentiment_report::services::narrative::NarrativeGenerator;
use sentiment_report::services::news_api::NewsSentimentApi;
use sentiment_report::services::renderer::{DocumentRenderer, ReportDocument};

const FIXTURE: &[u8] = include_bytes!("fixtures/news_sentiment_amzn.json");

struct StaticNews(Vec<FeedItem>);

#[async_trait::async_trait]
impl NewsSentimentApi for StaticNews {
    async fn news_sentiment(&self, _ticker: &str) -> Result<Vec<FeedItem>> {
        Ok(self.0.clone())
    }
}

struct FailingNews;

#[async_trait::async_trait]
impl NewsSentimentApi for FailingNews {
    async fn news_sentiment(&self, _ticker: &str) -> Result<Vec<FeedItem>> {
        Err(ReportError::Fetch("connection reset".into()))
    }
}

struct FailingNarrator;

#[async_trait::async_trait]
impl NarrativeGenerator for FailingNarrator {
    async fn generate(&self, _result: &AggregateResult) -> Result<String> {
        Err(ReportError::Narrative("model unavailable".into()))
    }
}

#[derive(Default)]
struct RecordingRenderer {
    rendered: Mutex<Vec<ReportDocument>>,
}

impl DocumentRenderer for RecordingRenderer {
    fn render(&self, document: &ReportDocument, _path: &Path) -> Result<()> {
        self.rendered.lock().unwrap().push(document.clone());
        Ok(())
    }
}

fn fixture_feed() -> Vec<FeedItem> {
    parse_feed(FIXTURE).expect("Failed to parse fixture")
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_fixture_aggregation() {
    let feed = fixture_feed();
    assert_eq!(feed.len(), 6);

    let result = assemble(&feed, "AMZN", 5).unwrap();

    // the NVDA-only article is excluded
    assert_eq!(result.article_count, 5);
    assert!((result.average_score - 0.1).abs() < 1e-9);
    assert_eq!(result.label, SentimentLabel::Neutral);

    let urls: Vec<_> = result.top_articles.iter().map(|a| a.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://news.example.com/amzn-antitrust",
            "https://news.example.com/aws-ai-chips",
            "https://news.example.com/retail-slide",
            "https://news.example.com/prime-video-ads",
            "https://news.example.com/logistics-costs",
        ]
    );
}

#[test]
fn test_fixture_other_ticker() {
    let feed = fixture_feed();
    let result = assemble(&feed, "NVDA", 5).unwrap();

    assert_eq!(result.article_count, 2);
    assert!((result.average_score - 0.225).abs() < 1e-9);
    assert_eq!(result.label, SentimentLabel::SomewhatBullish);
    assert_eq!(result.top_articles[0].url, "https://news.example.com/chip-rally");
}

#[tokio::test]
async fn test_live_pipeline_writes_pdf_and_history() {
    let dir = temp_dir("sentiment_report_live_pipeline");
    let config = Config {
        output_path: dir.join("report.pdf"),
        history_path: Some(dir.join("history.csv")),
        ..Default::default()
    };

    let news = StaticNews(fixture_feed());
    let result = run_live(&config, &news, &SampleNarrator, &PdfRenderer)
        .await
        .unwrap();

    assert_eq!(result.ticker, "AMZN");
    let pdf = fs::read(&config.output_path).unwrap();
    assert!(pdf.starts_with(b"%PDF"));

    let history = fs::read_to_string(dir.join("history.csv")).unwrap();
    assert_eq!(history.lines().count(), 2);
    assert!(history.contains("AMZN"));

    fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_live_pipeline_passes_aggregate_to_renderer() {
    let renderer = RecordingRenderer::default();
    let news = StaticNews(fixture_feed());

    run_live(&Config::default(), &news, &SampleNarrator, &renderer)
        .await
        .unwrap();

    let rendered = renderer.rendered.lock().unwrap();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].ticker, "AMZN");
    assert_eq!(rendered[0].label, SentimentLabel::Neutral);
    assert_eq!(rendered[0].narrative, SAMPLE_NARRATIVE);
}

#[tokio::test]
async fn test_fetch_failure_stops_before_render() {
    let renderer = RecordingRenderer::default();

    let err = run_live(&Config::default(), &FailingNews, &SampleNarrator, &renderer)
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::Fetch(_)));
    assert!(renderer.rendered.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_ticker_stops_before_render() {
    let renderer = RecordingRenderer::default();
    let config = Config {
        ticker: "TSLA".into(),
        ..Default::default()
    };

    let err = run_live(&config, &StaticNews(fixture_feed()), &SampleNarrator, &renderer)
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::EmptyInput { ref ticker } if ticker == "TSLA"));
    assert!(renderer.rendered.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_narrative_failure_stops_before_render() {
    let renderer = RecordingRenderer::default();

    let err = run_live(
        &Config::default(),
        &StaticNews(fixture_feed()),
        &FailingNarrator,
        &renderer,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ReportError::Narrative(_)));
    assert!(renderer.rendered.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_sample_pipeline() {
    let dir = temp_dir("sentiment_report_sample_pipeline");
    let config = Config {
        output_path: dir.join("sample.pdf"),
        ..Default::default()
    };

    let document = run_sample(&config, &PdfRenderer).await.unwrap();

    assert_eq!(document.average_score, SAMPLE_SCORE);
    assert_eq!(document.label, SentimentLabel::Neutral);
    assert!(fs::read(&config.output_path).unwrap().starts_with(b"%PDF"));

    fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_sample_pipeline_ignores_ticker_and_history() {
    let dir = temp_dir("sentiment_report_sample_overrides");
    let config = Config {
        ticker: "TSLA".into(),
        output_path: dir.join("sample.pdf"),
        history_path: Some(dir.join("history.csv")),
        ..Default::default()
    };

    let document = run_sample(&config, &PdfRenderer).await.unwrap();

    assert_eq!(document.ticker, SAMPLE_TICKER);
    assert!(config.output_path.exists());
    assert!(!dir.join("history.csv").exists());

    fs::remove_dir_all(&dir).unwrap();
}
