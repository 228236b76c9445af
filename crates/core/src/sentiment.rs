//! Keyword-count sentiment scoring.
//!
//! Counts how many lexicon entries occur as substrings of the lower-cased text.
//! No tokenization and no word boundaries: `"unhappy"` counts as `"happy"`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::metrics::round_to;

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "love",
    "best",
    "fantastic",
    "wonderful",
    "awesome",
    "perfect",
    "happy",
    "satisfied",
    "impressed",
    "recommend",
    "helpful",
    "thank",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "worst",
    "hate",
    "awful",
    "horrible",
    "disappointed",
    "angry",
    "frustrated",
    "broken",
    "defective",
    "useless",
    "damaged",
    "poor",
    "complaint",
    "refund",
];

/// Scores above this get the stronger emoji.
const INTENSITY_THRESHOLD: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: SentimentLabel,
    pub score: f64,
    pub emoji: String,
    pub positive_words: usize,
    pub negative_words: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentimentAnalyzer {
    positive_words: Vec<String>,
    negative_words: Vec<String>,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::with_lexicon(
            POSITIVE_WORDS.iter().map(|word| word.to_string()).collect(),
            NEGATIVE_WORDS.iter().map(|word| word.to_string()).collect(),
        )
    }
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(positive_words: Vec<String>, negative_words: Vec<String>) -> Self {
        let fold = |words: Vec<String>| words.into_iter().map(|word| word.to_lowercase()).collect();
        Self { positive_words: fold(positive_words), negative_words: fold(negative_words) }
    }

    pub fn analyze(&self, text: &str) -> SentimentResult {
        let normalized = text.to_lowercase();
        let positive = count_hits(&normalized, &self.positive_words);
        let negative = count_hits(&normalized, &self.negative_words);
        score(positive, negative)
    }
}

fn count_hits(normalized: &str, lexicon: &[String]) -> usize {
    lexicon.iter().filter(|word| normalized.contains(word.as_str())).count()
}

fn score(positive: usize, negative: usize) -> SentimentResult {
    let total = positive + negative;
    let (sentiment, score, emoji) = if total == 0 {
        (SentimentLabel::Neutral, 0.5, "😐")
    } else if positive > negative {
        let score = round_to(positive as f64 / total as f64, 2);
        (SentimentLabel::Positive, score, if score > INTENSITY_THRESHOLD { "😊" } else { "🙂" })
    } else if negative > positive {
        let score = round_to(negative as f64 / total as f64, 2);
        (SentimentLabel::Negative, score, if score > INTENSITY_THRESHOLD { "😞" } else { "😕" })
    } else {
        (SentimentLabel::Mixed, 0.5, "🤔")
    };

    SentimentResult {
        sentiment,
        score,
        emoji: emoji.to_string(),
        positive_words: positive,
        negative_words: negative,
    }
}
