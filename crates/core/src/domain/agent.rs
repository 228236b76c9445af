use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    Support,
    Product,
    Social,
    Analytics,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown agent `{0}` (expected support|product|social|analytics)")]
pub struct UnknownAgentKind(pub String);

impl AgentKind {
    pub const ALL: [AgentKind; 4] = [Self::Support, Self::Product, Self::Social, Self::Analytics];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Support => "support",
            Self::Product => "product",
            Self::Social => "social",
            Self::Analytics => "analytics",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Support => "💬 Support Assistant",
            Self::Product => "🛍️ Product Recommender",
            Self::Social => "📱 Social Media Agent",
            Self::Analytics => "📊 Analytics Dashboard",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Support => "FAQs & Escalations",
            Self::Product => "Smart Suggestions",
            Self::Social => "Content Generation",
            Self::Analytics => "Insights & Metrics",
        }
    }

    /// Quick-action queries offered to the user for this agent.
    pub fn suggestions(&self) -> [&'static str; 4] {
        match self {
            Self::Support => [
                "What's your return policy?",
                "How can I track my order?",
                "This product arrived damaged",
                "What payment methods do you accept?",
            ],
            Self::Product => [
                "Show me budget electronics",
                "Recommend premium products",
                "What's in the fashion category?",
                "Show me top-rated items",
            ],
            Self::Social => [
                "Create a product launch post",
                "Give me engagement ideas",
                "Write a sale promotion",
                "Generate contest content",
            ],
            Self::Analytics => [
                "Show overall metrics",
                "Support agent performance",
                "Product recommendation stats",
                "Social media engagement",
            ],
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = UnknownAgentKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "support" => Ok(Self::Support),
            "product" | "products" => Ok(Self::Product),
            "social" => Ok(Self::Social),
            "analytics" => Ok(Self::Analytics),
            other => Err(UnknownAgentKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AgentKind, UnknownAgentKind};

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Support".parse::<AgentKind>(), Ok(AgentKind::Support));
        assert_eq!(" products ".parse::<AgentKind>(), Ok(AgentKind::Product));
        assert_eq!("ANALYTICS".parse::<AgentKind>(), Ok(AgentKind::Analytics));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!("billing".parse::<AgentKind>(), Err(UnknownAgentKind("billing".to_string())));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for kind in AgentKind::ALL {
            assert_eq!(kind.to_string().parse::<AgentKind>(), Ok(kind));
        }
    }
}
