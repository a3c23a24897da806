//! Bundled sample report used by sample mode and as a narrative test double.

use async_trait::async_trait;

use crate::analyzers::label::SentimentLabel;
use crate::analyzers::types::AggregateResult;
use crate::error::Result;
use crate::services::narrative::NarrativeGenerator;

pub const SAMPLE_TICKER: &str = "AAPL";
pub const SAMPLE_SCORE: f64 = 0.120123;
pub const SAMPLE_LABEL: SentimentLabel = SentimentLabel::Neutral;
pub const SAMPLE_ARTICLE_COUNT: usize = 50;

pub const SAMPLE_NARRATIVE: &str = "\
Apple Inc. (AAPL) currently has a sentiment score of 0.1171, which is labeled as Neutral. \
This score is derived from averaging fifty different articles, indicating a mixed perception among \
investors and analysts. The articles suggest relevant issues surrounding potential changes in the \
company's credit card partner, fluctuations in iPhone sales in China, stock projections, consumer \
product testimonies, and overall investor concerns about the company's direction and challenges.

The selection of articles provides an insightful snapshot into Apple's current landscape. One \
significant article highlights Apple's potential move away from Goldman Sachs, its current credit card \
partner, to either Barclays or Synchrony. This strategic shift indicates a possible restructuring in \
Apple's financial services approach. Another key article points to declining iPhone sales in China, a \
market of critical importance to Apple's revenue streams. This trend might reflect broader economic \
challenges or competitive pressures in this significant market. Additionally, an article about Apple's \
longer-term stock potential posits varying perspectives, with analysts debating its performance in the \
coming years, emphasizing Apple's pivotal role in innovation and market adaptability. On the tech \
innovation front, the Apple Watch's ability to save a life by providing emergency alerts showcases \
Apple's successful entry into health monitoring, underlining consumer trust and product relevance. \
Conversely, some reports illustrate anxiety about Apple's future amidst several competitive and \
operational hurdles.

In conclusion, despite experiencing mixed sentiment and market challenges, Apple maintains a steady, \
neutral outlook. Its strategic endeavors and innovation across product segments continue to underpin \
its significant market position. Investors remain watchful, analyzing current challenges against \
long-term viability and growth potential.";

/// The aggregate the sample narrative was written for.
pub fn sample_result() -> AggregateResult {
    AggregateResult {
        ticker: SAMPLE_TICKER.to_string(),
        average_score: SAMPLE_SCORE,
        label: SAMPLE_LABEL,
        article_count: SAMPLE_ARTICLE_COUNT,
        top_articles: Vec::new(),
    }
}

/// Returns [`SAMPLE_NARRATIVE`] for any input without touching the network.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleNarrator;

#[async_trait]
impl NarrativeGenerator for SampleNarrator {
    async fn generate(&self, _result: &AggregateResult) -> Result<String> {
        Ok(SAMPLE_NARRATIVE.to_string())
    }
}
