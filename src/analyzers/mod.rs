//! Sentiment aggregation and article ranking.
//!
//! Pure functions over an already-fetched feed: the per-ticker average
//! score and its label, the most relevant articles, and the combined
//! [`AggregateResult`](types::AggregateResult) handed to the narrative and
//! renderer.

pub mod aggregate;
pub mod assemble;
pub mod label;
pub mod rank;
pub mod types;
pub mod utility;
