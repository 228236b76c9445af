use agenthub_core::classify::{KeywordRule, RuleSet};
use agenthub_core::domain::agent::AgentKind;
use agenthub_core::domain::response::AgentResponse;
use agenthub_core::domain::social::ContentType;
use agenthub_core::sentiment::SentimentAnalyzer;
use agenthub_core::templates::{TemplateSource, TemplateStore};
use tracing::{debug, info};

use crate::agent::Agent;

pub const IDEAS_PER_QUERY: usize = 3;

pub fn content_rules() -> RuleSet<ContentType> {
    RuleSet::new(
        vec![
            KeywordRule::new(
                ContentType::Launch,
                &["launch", "announce", "new product", "introduce"],
            ),
            KeywordRule::new(
                ContentType::Engagement,
                &["engagement", "interact", "community", "question"],
            ),
            KeywordRule::new(
                ContentType::Promotion,
                &["sale", "promo", "discount", "offer", "deal"],
            ),
            KeywordRule::new(
                ContentType::Contest,
                &["contest", "giveaway", "competition", "sweepstake"],
            ),
        ],
        ContentType::General,
    )
}

#[derive(Clone, Debug)]
pub struct SocialAgent {
    templates: TemplateStore,
    analyzer: SentimentAnalyzer,
    rules: RuleSet<ContentType>,
}

impl SocialAgent {
    pub fn new(templates: TemplateStore) -> Self {
        Self::with_analyzer(templates, SentimentAnalyzer::new())
    }

    pub fn with_analyzer(templates: TemplateStore, analyzer: SentimentAnalyzer) -> Self {
        Self { templates, analyzer, rules: content_rules() }
    }

    pub fn classify(&self, query: &str) -> ContentType {
        self.rules.classify(query)
    }
}

impl Agent for SocialAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Social
    }

    fn process_query(&self, query: &str) -> AgentResponse {
        let sentiment = self.analyzer.analyze(query);
        let content_type = self.classify(query);
        let resolved = self.templates.resolve(content_type.as_str(), IDEAS_PER_QUERY);

        match resolved.source {
            TemplateSource::Requested => debug!(
                event_name = "agent.social.templates",
                content_type = content_type.as_str(),
                count = resolved.items.len(),
                "templates resolved"
            ),
            TemplateSource::Fallback | TemplateSource::Builtin => info!(
                event_name = "agent.social.template_fallback",
                content_type = content_type.as_str(),
                served_from = %resolved.category,
                builtin = resolved.source == TemplateSource::Builtin,
                "no templates for content type; using fallback"
            ),
        }

        AgentResponse::SocialContent {
            response: format!(
                "{}\n\nHere are {} ready-to-use social media posts:",
                content_type.title(),
                resolved.items.len()
            ),
            ideas: resolved.items,
            content_type,
            sentiment,
        }
    }
}
