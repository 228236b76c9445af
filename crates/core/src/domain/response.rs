use serde::{Deserialize, Serialize};

use crate::domain::metrics::{MetricsScope, ScopedMetrics};
use crate::domain::product::Product;
use crate::domain::social::{ContentType, SocialTemplate};
use crate::sentiment::SentimentResult;

/// Structured result of one `process_query` call, tagged by `type`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentResponse {
    Faq {
        response: String,
        escalate: bool,
        category: String,
    },
    Escalation {
        response: String,
        escalate: bool,
        ticket_number: String,
    },
    General {
        response: String,
        escalate: bool,
    },
    Recommendations {
        response: String,
        products: Vec<Product>,
    },
    SocialContent {
        response: String,
        ideas: Vec<SocialTemplate>,
        content_type: ContentType,
        sentiment: SentimentResult,
    },
    Analytics {
        response: String,
        agent_type: MetricsScope,
        metrics: ScopedMetrics,
    },
}

impl AgentResponse {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Faq { .. } => "faq",
            Self::Escalation { .. } => "escalation",
            Self::General { .. } => "general",
            Self::Recommendations { .. } => "recommendations",
            Self::SocialContent { .. } => "social_content",
            Self::Analytics { .. } => "analytics",
        }
    }

    pub fn response(&self) -> &str {
        match self {
            Self::Faq { response, .. }
            | Self::Escalation { response, .. }
            | Self::General { response, .. }
            | Self::Recommendations { response, .. }
            | Self::SocialContent { response, .. }
            | Self::Analytics { response, .. } => response,
        }
    }

    pub fn escalates(&self) -> bool {
        match self {
            Self::Faq { escalate, .. }
            | Self::Escalation { escalate, .. }
            | Self::General { escalate, .. } => *escalate,
            _ => false,
        }
    }

    pub fn ticket_number(&self) -> Option<&str> {
        match self {
            Self::Escalation { ticket_number, .. } => Some(ticket_number),
            _ => None,
        }
    }

    pub fn sentiment(&self) -> Option<&SentimentResult> {
        match self {
            Self::SocialContent { sentiment, .. } => Some(sentiment),
            _ => None,
        }
    }
}
