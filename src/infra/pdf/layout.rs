//! Page geometry and text helpers for the PDF report.
//!
//! All lengths are millimetres measured from the top-left corner of an A4
//! page; the renderer flips them into PDF's bottom-left coordinate space.

use crate::analyzers::label::{LabelFamily, SentimentLabel};

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const MARGIN: f32 = 10.0;

pub const BAR_X: f32 = 55.0;
pub const BAR_Y: f32 = 30.0;
pub const BAR_WIDTH: f32 = 100.0;
pub const BAR_HEIGHT: f32 = 10.0;

pub const TITLE_SIZE: f32 = 16.0;
pub const TITLE_HEIGHT: f32 = 10.0;
pub const SCORE_SIZE: f32 = 14.0;
pub const SCORE_HEIGHT: f32 = 15.0;
/// Gap between the top of the bar and the top of the score line.
pub const SCORE_OFFSET: f32 = 15.0;
pub const BODY_SIZE: f32 = 12.0;
pub const BODY_LINE_HEIGHT: f32 = 9.0;

const PT_TO_MM: f32 = 0.3528;
/// Average glyph advance of the Times faces, as a fraction of the font size.
const AVG_GLYPH_EM: f32 = 0.47;

/// Width of the filled part of the sentiment bar for `score` in [-1, 1].
pub fn bar_fill_width(score: f64) -> f32 {
    let fraction = ((score + 1.0) / 2.0).clamp(0.0, 1.0);
    fraction as f32 * BAR_WIDTH
}

/// Bar colour as 0-255 RGB: dark blue, dark red or dark green by label family.
pub fn fill_rgb(label: SentimentLabel) -> (u8, u8, u8) {
    match label.family() {
        LabelFamily::Neutral => (0, 0, 139),
        LabelFamily::Bearish => (139, 0, 0),
        LabelFamily::Bullish => (0, 100, 0),
    }
}

/// Approximate rendered width of `text` at `size_pt`, in millimetres.
pub fn text_width(text: &str, size_pt: f32) -> f32 {
    text.chars().count() as f32 * size_pt * PT_TO_MM * AVG_GLYPH_EM
}

/// Distance from the top of a cell to the text baseline.
pub fn baseline_offset(cell_height: f32, size_pt: f32) -> f32 {
    cell_height / 2.0 + size_pt * PT_TO_MM * 0.35
}

/// How many characters of body text fit between the margins.
pub fn body_chars_per_line() -> usize {
    let usable = PAGE_WIDTH - 2.0 * MARGIN;
    (usable / (BODY_SIZE * PT_TO_MM * AVG_GLYPH_EM)).floor() as usize
}

/// Maps text onto the characters the built-in PDF fonts can show.
///
/// Typographic quotes, dashes and ellipses become their ASCII forms; any
/// other character outside printable ASCII becomes `?`.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push('\n'),
            '\r' => {}
            '\t' | '\u{00A0}' => out.push(' '),
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => out.push('"'),
            '\u{2010}'..='\u{2015}' | '\u{2212}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            c if c.is_ascii() && !c.is_ascii_control() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

/// Greedy word wrap of a single paragraph to at most `max_chars` per line.
///
/// Words longer than a line are split. An empty paragraph yields one empty
/// line so blank lines still take vertical space.
pub fn wrap_text(paragraph: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in paragraph.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let word: String = word.into_iter().collect();
        let needed = if current.is_empty() {
            word.len()
        } else {
            current.len() + 1 + word.len()
        };

        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_fill_width() {
        assert_eq!(bar_fill_width(-1.0), 0.0);
        assert_eq!(bar_fill_width(0.0), 50.0);
        assert_eq!(bar_fill_width(1.0), 100.0);
        assert_eq!(bar_fill_width(0.5), 75.0);
    }

    #[test]
    fn test_bar_fill_width_clamps() {
        assert_eq!(bar_fill_width(-3.0), 0.0);
        assert_eq!(bar_fill_width(2.0), BAR_WIDTH);
    }

    #[test]
    fn test_fill_rgb_by_family() {
        assert_eq!(fill_rgb(SentimentLabel::Neutral), (0, 0, 139));
        assert_eq!(fill_rgb(SentimentLabel::Bearish), (139, 0, 0));
        assert_eq!(fill_rgb(SentimentLabel::SomewhatBearish), (139, 0, 0));
        assert_eq!(fill_rgb(SentimentLabel::SomewhatBullish), (0, 100, 0));
        assert_eq!(fill_rgb(SentimentLabel::Bullish), (0, 100, 0));
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(
            sanitize("Apple\u{2019}s \u{201C}edge\u{201D} \u{2014} up\u{2026}"),
            "Apple's \"edge\" - up..."
        );
        assert_eq!(sanitize("caf\u{e9}\r\n"), "caf?\n");
        assert_eq!(sanitize("a\tb"), "a b");
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let text = "the quick brown fox jumps over the lazy dog";
        let lines = wrap_text(text, 10);
        assert!(lines.iter().all(|l| l.len() <= 10));
        assert_eq!(lines.join(" "), text);
        assert_eq!(lines[0], "the quick");
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        let lines = wrap_text("ab abcdefghijkl", 5);
        assert_eq!(lines, vec!["ab", "abcde", "fghij", "kl"]);
    }

    #[test]
    fn test_wrap_text_empty_paragraph() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
        assert_eq!(wrap_text("   ", 10), vec![String::new()]);
    }

    #[test]
    fn test_body_chars_per_line_is_reasonable() {
        let n = body_chars_per_line();
        assert!((80..=110).contains(&n), "unexpected line width {n}");
    }
}
