use serde::{Deserialize, Serialize};
use std::fmt;

/// Discretized sentiment bucket, named the way the news provider labels
/// its own scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Bearish,
    #[serde(rename = "Somewhat-Bearish")]
    SomewhatBearish,
    Neutral,
    #[serde(rename = "Somewhat-Bullish")]
    SomewhatBullish,
    Bullish,
}

/// Coarse direction of a label; the renderer colours by family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFamily {
    Bearish,
    Neutral,
    Bullish,
}

impl SentimentLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Bearish => "Bearish",
            SentimentLabel::SomewhatBearish => "Somewhat-Bearish",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::SomewhatBullish => "Somewhat-Bullish",
            SentimentLabel::Bullish => "Bullish",
        }
    }

    pub fn family(self) -> LabelFamily {
        match self {
            SentimentLabel::Bearish | SentimentLabel::SomewhatBearish => LabelFamily::Bearish,
            SentimentLabel::Neutral => LabelFamily::Neutral,
            SentimentLabel::SomewhatBullish | SentimentLabel::Bullish => LabelFamily::Bullish,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts an average sentiment score into a label.
///
/// | Range                  | Label            |
/// |------------------------|------------------|
/// | <= -0.35               | Bearish          |
/// | (-0.35, -0.15]         | Somewhat-Bearish |
/// | (-0.15, 0.15)          | Neutral          |
/// | [0.15, 0.35)           | Somewhat-Bullish |
/// | >= 0.35                | Bullish          |
///
/// NaN falls through every range and is reported as Neutral.
pub fn classify(score: f64) -> SentimentLabel {
    match score {
        s if s <= -0.35 => SentimentLabel::Bearish,
        s if s <= -0.15 => SentimentLabel::SomewhatBearish,
        s if s < 0.15 => SentimentLabel::Neutral,
        s if s < 0.35 => SentimentLabel::SomewhatBullish,
        s if s >= 0.35 => SentimentLabel::Bullish,
        _ => SentimentLabel::Neutral,
    }
}
