use serde::Serialize;

use crate::analyzers::types::{AggregateResult, ArticleSummary};
use crate::error::Result;

/// Fixed instruction sent as the system message.
pub const SYSTEM_PROMPT: &str = concat!(
    "You are a financial analyst. You are to create a report based on data supplied by the user. ",
    "You do not need a title. ",
    "Do not use any markdown. Only pure text. ",
    "You must only use characters compatible with latin-1 encoding, avoiding special characters ",
    "like curly apostrophes, quotes, or non-ASCII symbols. ",
    "You are to create a short summary of the data entered by the user (~100 words). ",
    "You are then to analyze and get the key insights and themes from a set of articles provided. ",
    "Include dates when possible when referencing articles. ",
    "This is the main body and should be around 200 words. ",
    "You need to finish with a conclusion of only ~50 words. ",
    "Highlight the main takeaway on the current state of the company."
);

#[derive(Serialize)]
struct PromptArticle<'a> {
    #[serde(rename = "Relevance")]
    relevance: f64,
    #[serde(rename = "URL")]
    url: &'a str,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
}

impl<'a> From<&'a ArticleSummary> for PromptArticle<'a> {
    fn from(article: &'a ArticleSummary) -> Self {
        Self {
            relevance: article.relevance_score,
            url: &article.url,
            date: article.published_date(),
            title: article.title.as_deref(),
        }
    }
}

/// Builds the user message describing `result`.
pub fn user_prompt(result: &AggregateResult) -> Result<String> {
    let articles: Vec<PromptArticle<'_>> = result.top_articles.iter().map(Into::into).collect();
    let articles_json = serde_json::to_string(&articles)?;

    Ok(format!(
        "The sentiment score for the company given by the ticker {ticker} is {score:.3}. \
         This sentiment score was calculated by averaging over {count} articles. \
         This sentiment score has the equivalent label: {label}. \
         The most relevant articles are in the following json: {articles_json}. \
         They have a Relevance score, URL, and Date.",
        ticker = result.ticker,
        score = result.average_score,
        count = result.article_count,
        label = result.label,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::label::SentimentLabel;

    fn result() -> AggregateResult {
        AggregateResult {
            ticker: "AMZN".into(),
            average_score: 0.18765,
            label: SentimentLabel::SomewhatBullish,
            article_count: 42,
            top_articles: vec![ArticleSummary {
                url: "https://example.com/a".into(),
                published_at: "20240305T143000".into(),
                relevance_score: 0.9,
                title: None,
            }],
        }
    }

    #[test]
    fn test_user_prompt_contents() {
        let prompt = user_prompt(&result()).unwrap();
        assert!(prompt.contains("ticker AMZN is 0.188."));
        assert!(prompt.contains("averaging over 42 articles"));
        assert!(prompt.contains("label: Somewhat-Bullish."));
        assert!(prompt.contains(
            r#"[{"Relevance":0.9,"URL":"https://example.com/a","Date":"2024-03-05 14:30"}]"#
        ));
    }

    #[test]
    fn test_system_prompt_word_targets() {
        assert!(SYSTEM_PROMPT.contains("~100 words"));
        assert!(SYSTEM_PROMPT.contains("around 200 words"));
        assert!(SYSTEM_PROMPT.contains("~50 words"));
        assert!(SYSTEM_PROMPT.contains("latin-1"));
    }
}
