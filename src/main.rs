//! CLI entry point for the sentiment report generator.
//!
//! Asks whether to use real data (unless `--mode` is given), then either runs
//! the live pipeline or renders the bundled sample report.

use anyhow::{Context, Result};
use clap::Parser;
use sentiment_report::analyzers::rank::DEFAULT_TOP_N;
use sentiment_report::config::{
    ApiKeys, Config, DEFAULT_FEED_LIMIT, DEFAULT_MODEL, DEFAULT_OPENAI_BASE_URL, DEFAULT_OUTPUT,
    DEFAULT_TICKER, DEFAULT_TIMEOUT_SECS, DEFAULT_VANTAGE_BASE_URL, Mode,
};
use sentiment_report::infra::alphavantage::AlphaVantageClient;
use sentiment_report::infra::openai::OpenAiNarrator;
use sentiment_report::infra::pdf::PdfRenderer;
use sentiment_report::pipeline::{run_live, run_sample};
use std::ffi::OsStr;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "sentiment_report")]
#[command(about = "Generate a PDF news-sentiment report for a stock ticker", long_about = None)]
struct Cli {
    /// Run mode; when omitted you are asked whether to use real data
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Ticker symbol to analyze (live mode only)
    #[arg(short, long, env = "TICKER", default_value = DEFAULT_TICKER)]
    ticker: String,

    /// PDF file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Chat model used for the narrative
    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Number of most relevant articles passed to the narrative
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    /// Maximum number of articles requested from the news provider
    #[arg(long, default_value_t = DEFAULT_FEED_LIMIT)]
    feed_limit: u32,

    /// Timeout for each HTTP request, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Optional CSV file to append a row per live run to (ignored in sample mode)
    #[arg(long)]
    history: Option<PathBuf>,

    #[arg(long, env = "VANTAGE_BASE_URL", default_value = DEFAULT_VANTAGE_BASE_URL, hide = true)]
    vantage_base_url: String,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_OPENAI_BASE_URL, hide = true)]
    openai_base_url: String,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            ticker: self.ticker.trim().to_string(),
            output_path: self.output.clone(),
            history_path: self.history.clone(),
            top_n: self.top_n,
            feed_limit: self.feed_limit,
            model: self.model.clone(),
            request_timeout: Duration::from_secs(self.timeout),
            vantage_base_url: self.vantage_base_url.clone(),
            openai_base_url: self.openai_base_url.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/sentiment_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("sentiment_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    let mode = match cli.mode {
        Some(mode) => mode,
        None => ask_mode()?,
    };
    info!(?mode, ticker = %config.ticker, "Starting report run");

    let outcome: Result<&str> = match mode {
        Mode::Sample => run_sample(&config, &PdfRenderer)
            .await
            .map(|_| "Sample Report Created.")
            .map_err(Into::into),
        Mode::Live => live(&config).await.map(|_| "Report Created."),
    };

    match outcome {
        Ok(message) => {
            println!("{message}");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Report run failed");
            Err(e)
        }
    }
}

async fn live(config: &Config) -> Result<()> {
    let keys = ApiKeys::from_env()?;
    let news = AlphaVantageClient::from_config(config, &keys)
        .context("failed to build news client")?;
    let narrator =
        OpenAiNarrator::from_config(config, &keys).context("failed to build narrative client")?;

    run_live(config, &news, &narrator, &PdfRenderer).await?;
    Ok(())
}

/// Asks `Real Data? (y/n)` on stdout and reads one line from stdin.
fn ask_mode() -> Result<Mode> {
    let mut stdout = std::io::stdout();
    writeln!(stdout, "Real Data? (y/n) ")?;
    stdout.flush()?;

    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("failed to read answer from stdin")?;
    Ok(Mode::from_answer(&answer))
}
