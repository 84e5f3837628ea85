//! Sentiment normalization and the fixed label set used for summaries.

use crate::core::Sentiment;
use serde::Serialize;

/// Resolves either sentiment shape to its label.
///
/// Strings pass through unchanged, even when they are not one of the
/// known labels. A missing sentiment yields the empty label, which means
/// "no sentiment" and is distinct from `"neutral"`.
pub fn normalize(sentiment: Option<&Sentiment>) -> &str {
    match sentiment {
        Some(Sentiment::Plain(label)) => label,
        Some(Sentiment::Structured { label }) => label,
        None => "",
    }
}

/// The three labels counted in sentiment summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Maps a canonical label onto the counted set.
    ///
    /// Exact, case-sensitive match; anything else is `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "positive" => Some(SentimentLabel::Positive),
            "negative" => Some(SentimentLabel::Negative),
            "neutral" => Some(SentimentLabel::Neutral),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }

    /// Korean badge text shown next to an item
    pub fn display_name(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "긍정",
            SentimentLabel::Negative => "부정",
            SentimentLabel::Neutral => "중립",
        }
    }

    /// Badge style for any label.
    ///
    /// Everything that is not positive or negative is drawn in the
    /// neutral style, including unknown and empty labels.
    pub fn badge_style(label: &str) -> Self {
        match Self::from_label(label) {
            Some(SentimentLabel::Positive) => SentimentLabel::Positive,
            Some(SentimentLabel::Negative) => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }

    /// Badge text for any label; empty for labels outside the set.
    pub fn badge_text(label: &str) -> &'static str {
        Self::from_label(label)
            .map(|l| l.display_name())
            .unwrap_or("")
    }

    pub fn all() -> &'static [SentimentLabel] {
        &[
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
        ]
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_shapes_normalize_to_same_label() {
        let plain = Sentiment::Plain("positive".into());
        let structured = Sentiment::Structured {
            label: "positive".into(),
        };
        assert_eq!(normalize(Some(&plain)), "positive");
        assert_eq!(normalize(Some(&structured)), "positive");
    }

    #[test]
    fn test_missing_sentiment_is_empty() {
        assert_eq!(normalize(None), "");
    }

    #[test]
    fn test_unknown_labels_pass_through() {
        let mixed = Sentiment::Plain("Mixed".into());
        assert_eq!(normalize(Some(&mixed)), "Mixed");
    }

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(
            SentimentLabel::from_label("negative"),
            Some(SentimentLabel::Negative)
        );
        assert_eq!(SentimentLabel::from_label("Negative"), None);
        assert_eq!(SentimentLabel::from_label(""), None);
    }

    #[test]
    fn test_badge_for_unknown_label_uses_neutral_style_without_text() {
        assert_eq!(SentimentLabel::badge_style("unknown"), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::badge_text("unknown"), "");
        assert_eq!(SentimentLabel::badge_text("neutral"), "중립");
        assert_eq!(SentimentLabel::badge_text("positive"), "긍정");
    }

    #[test]
    fn test_all_labels() {
        assert_eq!(SentimentLabel::all().len(), 3);
        for label in SentimentLabel::all() {
            assert_eq!(SentimentLabel::from_label(label.as_str()), Some(*label));
        }
    }
}
