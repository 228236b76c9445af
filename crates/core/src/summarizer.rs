//! Conversation summaries computed from a transcript.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::transcript::{ChatMessage, Role};
use crate::sentiment::SentimentLabel;

const TOPIC_VOCABULARY: &[&str] = &[
    "shipping",
    "return",
    "product",
    "order",
    "payment",
    "track",
    "refund",
    "warranty",
    "electronics",
    "fashion",
];

const MAX_TOPICS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentOverview {
    #[serde(rename = "N/A")]
    NotAvailable,
    #[serde(rename = "Mostly Positive")]
    MostlyPositive,
    #[serde(rename = "Some Concerns")]
    SomeConcerns,
    Neutral,
}

impl SentimentOverview {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotAvailable => "N/A",
            Self::MostlyPositive => "Mostly Positive",
            Self::SomeConcerns => "Some Concerns",
            Self::Neutral => "Neutral",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::NotAvailable => "",
            Self::MostlyPositive => "😊",
            Self::SomeConcerns => "😞",
            Self::Neutral => "😐",
        }
    }
}

impl fmt::Display for SentimentOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub total_messages: usize,
    pub user_messages: usize,
    pub bot_messages: usize,
    pub topics: Vec<String>,
    pub sentiment_overview: SentimentOverview,
}

pub fn summarize(messages: &[ChatMessage]) -> ConversationSummary {
    if messages.is_empty() {
        return ConversationSummary {
            total_messages: 0,
            user_messages: 0,
            bot_messages: 0,
            topics: Vec::new(),
            sentiment_overview: SentimentOverview::NotAvailable,
        };
    }

    let user_messages = messages.iter().filter(|message| message.role == Role::User);
    let bot_messages = messages.iter().filter(|message| message.role == Role::Assistant);

    let user_text = user_messages
        .clone()
        .map(|message| message.content.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let topics = TOPIC_VOCABULARY
        .iter()
        .filter(|word| user_text.contains(**word))
        .take(MAX_TOPICS)
        .map(|word| word.to_string())
        .collect();

    let labels = bot_messages
        .clone()
        .filter_map(|message| message.data.as_ref()?.sentiment())
        .map(|sentiment| sentiment.sentiment);

    ConversationSummary {
        total_messages: messages.len(),
        user_messages: user_messages.count(),
        bot_messages: bot_messages.count(),
        topics,
        sentiment_overview: overview(labels),
    }
}

fn overview(labels: impl Iterator<Item = SentimentLabel>) -> SentimentOverview {
    let (positive, negative) = labels.fold((0usize, 0usize), |(positive, negative), label| {
        match label {
            SentimentLabel::Positive => (positive + 1, negative),
            SentimentLabel::Negative => (positive, negative + 1),
            SentimentLabel::Neutral | SentimentLabel::Mixed => (positive, negative),
        }
    });

    if positive > negative {
        SentimentOverview::MostlyPositive
    } else if negative > positive {
        SentimentOverview::SomeConcerns
    } else {
        SentimentOverview::Neutral
    }
}
