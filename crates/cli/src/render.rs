//! Plain-text rendering for terminal output.

use agenthub_core::domain::metrics::ScopedMetrics;
use agenthub_core::domain::product::Product;
use agenthub_core::domain::response::AgentResponse;
use agenthub_core::domain::social::SocialTemplate;
use agenthub_core::sentiment::SentimentResult;
use agenthub_core::summarizer::ConversationSummary;

pub fn response(response: &AgentResponse) -> String {
    let mut out = response.response().to_string();
    match response {
        AgentResponse::Faq { .. } | AgentResponse::General { .. } => {}
        AgentResponse::Escalation { ticket_number, .. } => {
            out.push_str(&format!(
                "\n\n🎫 Escalated. Reference {ticket_number} when contacting us."
            ));
        }
        AgentResponse::Recommendations { products, .. } => {
            if products.is_empty() {
                out.push_str("\n\nNo products available right now.");
            }
            for product in products {
                out.push_str("\n\n");
                out.push_str(&product_card(product));
            }
        }
        AgentResponse::SocialContent { ideas, sentiment, .. } => {
            out.push_str("\n\n");
            out.push_str(&sentiment_caption(sentiment));
            for (index, idea) in ideas.iter().enumerate() {
                out.push_str("\n\n");
                out.push_str(&post(index + 1, idea));
            }
        }
        AgentResponse::Analytics { metrics, .. } => {
            out.push_str(&metrics_block(metrics));
        }
    }
    out
}

pub fn product_card(product: &Product) -> String {
    let mut card = format!(
        "**{}**\n💰 ${:.2} | {} {:.1}",
        product.name,
        product.price,
        product.star_rating(),
        product.rating
    );
    if !product.category.is_empty() {
        card.push_str(&format!(" | {}", product.category));
    }
    if !product.features.is_empty() {
        card.push_str(&format!("\n✨ {}", product.features.join(" • ")));
    }
    card
}

pub fn sentiment_caption(sentiment: &SentimentResult) -> String {
    format!(
        "Query sentiment: {} {} ({:.0}% confidence)",
        sentiment.emoji,
        sentiment.sentiment,
        sentiment.score * 100.0
    )
}

fn post(number: usize, idea: &SocialTemplate) -> String {
    format!("📱 Post {number}: {} ({})\n{}", idea.platform, idea.post_type, idea.content)
}

fn metrics_block(metrics: &ScopedMetrics) -> String {
    let mut out = String::new();
    if let Some(support) = &metrics.support {
        out.push_str("\n\n💬 Support");
        out.push_str(&format!("\n- Total queries: {}", support.total_queries));
        out.push_str(&format!("\n- Resolved: {}", support.resolved));
        out.push_str(&format!("\n- Avg response time: {} min", support.avg_response_time));
        out.push_str(&format!("\n- Satisfaction: {}%", support.satisfaction_rate));
        out.push_str(&format!("\n- Escalation rate: {}%", support.escalation_rate));
    }
    if let Some(products) = &metrics.products {
        out.push_str("\n\n🛍️ Products");
        out.push_str(&format!("\n- Recommendations made: {}", products.recommendations_made));
        out.push_str(&format!("\n- Conversion rate: {}%", products.conversion_rate));
        out.push_str(&format!("\n- Avg order value: ${:.2}", products.avg_order_value));
        out.push_str(&format!("\n- Top category: {}", products.top_category));
    }
    if let Some(social) = &metrics.social {
        out.push_str("\n\n📱 Social");
        out.push_str(&format!("\n- Posts generated: {}", social.posts_generated));
        out.push_str(&format!("\n- Engagement rate: {}%", social.engagement_rate));
        out.push_str(&format!("\n- Reach: {}", social.reach));
        out.push_str(&format!("\n- Best performing: {}", social.best_performing));
    }
    out
}

pub fn summary(summary: &ConversationSummary) -> String {
    let topics =
        if summary.topics.is_empty() { "none".to_string() } else { summary.topics.join(", ") };
    let overview = summary.sentiment_overview;
    let sentiment = if overview.emoji().is_empty() {
        overview.label().to_string()
    } else {
        format!("{} {}", overview.emoji(), overview.label())
    };
    format!(
        concat!(
            "📋 Conversation Summary\n- Total messages: {}\n- Your messages: {}\n",
            "- Agent responses: {}\n- Topics: {topics}\n- Sentiment: {sentiment}"
        ),
        summary.total_messages, summary.user_messages, summary.bot_messages,
        topics = topics,
        sentiment = sentiment
    )
}

#[cfg(test)]
mod tests {
    use agenthub_core::domain::product::Product;
    use agenthub_core::domain::response::AgentResponse;
    use agenthub_core::summarizer::summarize;
    use rust_decimal::Decimal;

    use super::{product_card, response, summary};

    #[test]
    fn product_card_shows_price_stars_and_features() {
        let card = product_card(&Product {
            name: "Lamp".to_string(),
            price: Decimal::new(395, 1),
            rating: 4.3,
            features: vec!["Dimmable".to_string(), "LED".to_string()],
            category: "home".to_string(),
        });
        assert_eq!(card, "**Lamp**\n💰 $39.50 | ⭐⭐⭐⭐ 4.3 | home\n✨ Dimmable • LED");
    }

    #[test]
    fn escalation_mentions_ticket() {
        let text = response(&AgentResponse::Escalation {
            response: "Escalating".to_string(),
            escalate: true,
            ticket_number: "TKT-00042".to_string(),
        });
        assert!(text.starts_with("Escalating"));
        assert!(text.contains("TKT-00042"));
    }

    #[test]
    fn empty_summary_renders_not_available() {
        let text = summary(&summarize(&[]));
        assert!(text.contains("Total messages: 0"));
        assert!(text.contains("Topics: none"));
        assert!(text.ends_with("Sentiment: N/A"));
    }
}
