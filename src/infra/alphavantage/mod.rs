//! Alpha Vantage `NEWS_SENTIMENT` client.

mod client;

pub use client::AlphaVantageClient;
