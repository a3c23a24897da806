//! Run configuration.
//!
//! Everything that used to be process-wide (ticker, keys, output file) is
//! carried explicitly in [`Config`] and [`ApiKeys`].

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::analyzers::rank::DEFAULT_TOP_N;
use crate::error::{ReportError, Result};

pub const VANTAGE_KEY_VAR: &str = "VANTAGE_APIKEY";
pub const OPENAI_KEY_VAR: &str = "OPENAI_APIKEY";

pub const DEFAULT_TICKER: &str = "AMZN";
pub const DEFAULT_OUTPUT: &str = "AI_Financial_Impact.pdf";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_FEED_LIMIT: u32 = 50;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_VANTAGE_BASE_URL: &str = "https://www.alphavantage.co";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Which pipeline to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Fetch real data, generate a narrative and render it.
    Live,
    /// Render the bundled sample report without network access.
    Sample,
}

impl Mode {
    /// Interprets the answer to `Real Data? (y/n)`: only `n` selects the sample.
    pub fn from_answer(answer: &str) -> Self {
        if answer.trim().eq_ignore_ascii_case("n") {
            Mode::Sample
        } else {
            Mode::Live
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub ticker: String,
    pub output_path: PathBuf,
    pub history_path: Option<PathBuf>,
    pub top_n: usize,
    pub feed_limit: u32,
    pub model: String,
    pub request_timeout: Duration,
    pub vantage_base_url: String,
    pub openai_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ticker: DEFAULT_TICKER.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            history_path: None,
            top_n: DEFAULT_TOP_N,
            feed_limit: DEFAULT_FEED_LIMIT,
            model: DEFAULT_MODEL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            vantage_base_url: DEFAULT_VANTAGE_BASE_URL.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.ticker.trim().is_empty() {
            return Err(ReportError::Config("ticker must not be empty".into()));
        }
        if self.request_timeout.is_zero() {
            return Err(ReportError::Config("request timeout must be positive".into()));
        }
        Ok(())
    }
}

/// Secrets needed by the live pipeline. `Debug` never prints the values.
#[derive(Clone)]
pub struct ApiKeys {
    pub vantage: String,
    pub openai: String,
}

impl ApiKeys {
    /// Reads both keys from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads both keys through `lookup`; empty values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ReportError::Config(format!("{name} must be set")))
        };
        Ok(Self {
            vantage: get(VANTAGE_KEY_VAR)?,
            openai: get(OPENAI_KEY_VAR)?,
        })
    }
}

impl fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeys")
            .field("vantage", &"***")
            .field("openai", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_mode_from_answer() {
        assert_eq!(Mode::from_answer("n"), Mode::Sample);
        assert_eq!(Mode::from_answer("N\n"), Mode::Sample);
        assert_eq!(Mode::from_answer("y"), Mode::Live);
        assert_eq!(Mode::from_answer(""), Mode::Live);
        assert_eq!(Mode::from_answer("no"), Mode::Live);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ticker, "AMZN");
        assert_eq!(config.output_path, PathBuf::from("AI_Financial_Impact.pdf"));
        assert_eq!(config.top_n, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_ticker() {
        let config = Config {
            ticker: " ".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ReportError::Config(_))));
    }

    #[test]
    fn test_keys_from_lookup() {
        let keys = ApiKeys::from_lookup(lookup(&[
            (VANTAGE_KEY_VAR, "av-key"),
            (OPENAI_KEY_VAR, "sk-test"),
        ]))
        .unwrap();
        assert_eq!(keys.vantage, "av-key");
        assert_eq!(keys.openai, "sk-test");
    }

    #[test]
    fn test_keys_missing_or_empty() {
        let err = ApiKeys::from_lookup(lookup(&[(VANTAGE_KEY_VAR, "av-key")])).unwrap_err();
        assert!(err.to_string().contains(OPENAI_KEY_VAR));

        let err = ApiKeys::from_lookup(lookup(&[
            (VANTAGE_KEY_VAR, ""),
            (OPENAI_KEY_VAR, "sk-test"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains(VANTAGE_KEY_VAR));
    }

    #[test]
    fn test_keys_debug_is_redacted() {
        let keys = ApiKeys {
            vantage: "secret-a".into(),
            openai: "secret-b".into(),
        };
        let printed = format!("{keys:?}");
        assert!(!printed.contains("secret"));
    }
}
