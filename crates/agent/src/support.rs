use std::sync::atomic::{AtomicU64, Ordering};

use agenthub_core::classify::{contains_any, normalize_query};
use agenthub_core::domain::agent::AgentKind;
use agenthub_core::domain::faq::FaqBook;
use agenthub_core::domain::response::AgentResponse;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::agent::Agent;

/// Phrases that route a query to a human when no FAQ answers it.
pub const COMPLEX_KEYWORDS: &[&str] = &[
    "complaint",
    "damaged",
    "refund",
    "speak to manager",
    "urgent",
    "broken",
    "defective",
    "not working",
];

const TICKET_SPACE: u64 = 100_000;

const HELP_MENU: &str = "👋 **How Can I Help?**\n\nI can assist with:\n\
📦 Shipping & Delivery\n\
↩️ Returns & Refunds\n\
💳 Payment Methods\n\
📍 Order Tracking\n\
🛡️ Warranties & Guarantees\n\n\
What would you like to know?";

#[derive(Debug, Default)]
pub struct SupportAgent {
    faqs: FaqBook,
    escalation_count: AtomicU64,
}

impl SupportAgent {
    pub fn new(faqs: FaqBook) -> Self {
        Self { faqs, escalation_count: AtomicU64::new(0) }
    }

    /// Escalations raised since construction.
    pub fn escalation_count(&self) -> u64 {
        self.escalation_count.load(Ordering::Relaxed)
    }
}

/// `TKT-NNNNN`, derived from a SHA-256 of the query. Identical queries share a ticket.
pub fn ticket_number(query: &str) -> String {
    let digest = Sha256::digest(query.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    format!("TKT-{:05}", u64::from_be_bytes(prefix) % TICKET_SPACE)
}

impl Agent for SupportAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Support
    }

    fn process_query(&self, query: &str) -> AgentResponse {
        let normalized = normalize_query(query);

        if let Some((faq_id, entry)) = self.faqs.find(&normalized) {
            debug!(event_name = "agent.support.faq_matched", faq_id, "answered from faq");
            return AgentResponse::Faq {
                response: format!("💡 **{}**\n\n{}", entry.title(), entry.answer),
                escalate: false,
                category: entry.category_or_default().to_string(),
            };
        }

        if contains_any(&normalized, COMPLEX_KEYWORDS) {
            let escalations = self.escalation_count.fetch_add(1, Ordering::Relaxed) + 1;
            let ticket = ticket_number(query);
            info!(
                event_name = "agent.support.escalated",
                ticket = %ticket,
                escalations,
                "query escalated to support team"
            );
            return AgentResponse::Escalation {
                response: format!(
                    "⚠️ **Escalating to Support Team**\n\nTicket: {ticket}\n\n\
                     You'll receive an email within 1 hour."
                ),
                escalate: true,
                ticket_number: ticket,
            };
        }

        AgentResponse::General { response: HELP_MENU.to_string(), escalate: false }
    }
}

#[cfg(test)]
mod tests {
    use agenthub_core::data::builtin;
    use agenthub_core::domain::faq::{FaqBook, FaqEntry};
    use agenthub_core::domain::response::AgentResponse;
    use indexmap::IndexMap;

    use super::{ticket_number, SupportAgent};
    use crate::agent::Agent;

    fn agent() -> SupportAgent {
        SupportAgent::new(builtin::faq_book())
    }

    #[test]
    fn faq_match_is_answered_without_escalation() {
        let response = agent().process_query("How long does SHIPPING take?");
        match response {
            AgentResponse::Faq { response, escalate, category } => {
                assert!(!escalate);
                assert_eq!(category, "shipping");
                assert!(response.starts_with("💡 **Shipping**\n\n"));
            }
            other => panic!("expected faq response, got {other:?}"),
        }
    }

    #[test]
    fn faq_takes_priority_over_complex_keywords() {
        let response = agent().process_query("my return is urgent");
        assert_eq!(response.type_name(), "faq");
        assert!(!response.escalates());
    }

    #[test]
    fn complex_query_escalates_with_stable_ticket() {
        let agent = agent();
        let first = agent.process_query("The item arrived damaged");
        let second = agent.process_query("The item arrived damaged");

        assert!(first.escalates());
        let ticket = first.ticket_number().expect("ticket expected").to_string();
        assert_eq!(ticket.len(), "TKT-00000".len());
        assert!(ticket.starts_with("TKT-"));
        assert!(ticket[4..].chars().all(|digit| digit.is_ascii_digit()));
        assert_eq!(second.ticket_number(), Some(ticket.as_str()));
        assert!(first.response().contains(&format!("Ticket: {ticket}")));
        assert_eq!(agent.escalation_count(), 2);
    }

    #[test]
    fn ticket_number_is_deterministic_and_zero_padded() {
        assert_eq!(ticket_number("refund please"), ticket_number("refund please"));
        assert_eq!(ticket_number("").len(), 9);
    }

    #[test]
    fn unmatched_query_gets_help_menu() {
        let agent = agent();
        for query in ["hello there", ""] {
            let response = agent.process_query(query);
            assert_eq!(response.type_name(), "general");
            assert!(!response.escalates());
            assert!(response.response().starts_with("👋 **How Can I Help?**"));
        }
        assert_eq!(agent.escalation_count(), 0);
    }

    #[test]
    fn faq_order_decides_between_overlapping_entries() {
        let mut entries = IndexMap::new();
        entries.insert(
            "late".to_string(),
            FaqEntry {
                keywords: vec!["order".to_string()],
                category: None,
                answer: "first".to_string(),
            },
        );
        entries.insert(
            "status".to_string(),
            FaqEntry {
                keywords: vec!["order status".to_string()],
                category: Some("order status".to_string()),
                answer: "second".to_string(),
            },
        );
        let response = SupportAgent::new(FaqBook::new(entries)).process_query("order status?");

        assert_eq!(response.response(), "💡 **Info**\n\nfirst");
        assert!(matches!(
            response,
            AgentResponse::Faq { ref category, .. } if category == "general"
        ));
    }
}
