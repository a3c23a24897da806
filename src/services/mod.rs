//! Seams between the pipeline and its external collaborators.
//!
//! [`NewsSentimentApi`](news_api::NewsSentimentApi) supplies the feed,
//! [`NarrativeGenerator`](narrative::NarrativeGenerator) writes the text and
//! [`DocumentRenderer`](renderer::DocumentRenderer) lays it out. Concrete
//! implementations live under [`crate::infra`].

pub mod narrative;
pub mod news_api;
pub mod renderer;
