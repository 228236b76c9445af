//! Dashboard metrics. The snapshot is drawn once from a [`MetricsSource`] when
//! the agent is built and then served unchanged, scoped by the query.

use agenthub_core::classify::{KeywordRule, RuleSet};
use agenthub_core::domain::agent::AgentKind;
use agenthub_core::domain::metrics::{
    round_to, MetricsScope, MetricsSnapshot, ProductMetrics, SocialMetrics, SupportMetrics,
};
use agenthub_core::domain::response::AgentResponse;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::agent::Agent;

pub trait MetricsSource {
    fn generate(&mut self) -> MetricsSnapshot;
}

/// Uniformly random metrics within plausible dashboard ranges.
#[derive(Debug)]
pub struct RandomMetrics {
    rng: StdRng,
}

impl RandomMetrics {
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_default()
    }

    fn decimal(&mut self, low: f64, high: f64, places: i32) -> f64 {
        round_to(self.rng.gen_range(low..=high), places)
    }
}

impl Default for RandomMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSource for RandomMetrics {
    fn generate(&mut self) -> MetricsSnapshot {
        MetricsSnapshot {
            support: SupportMetrics {
                total_queries: self.rng.gen_range(450..=550),
                resolved: self.rng.gen_range(400..=450),
                avg_response_time: self.decimal(1.5, 3.5, 1),
                satisfaction_rate: self.decimal(85.0, 95.0, 1),
                escalation_rate: self.decimal(8.0, 15.0, 1),
            },
            products: ProductMetrics {
                recommendations_made: self.rng.gen_range(200..=300),
                conversion_rate: self.decimal(12.0, 18.0, 1),
                avg_order_value: self.decimal(150.0, 250.0, 2),
                top_category: "Electronics".to_string(),
            },
            social: SocialMetrics {
                posts_generated: self.rng.gen_range(80..=120),
                engagement_rate: self.decimal(4.5, 7.5, 1),
                reach: self.rng.gen_range(15_000..=25_000),
                best_performing: "Product Launch".to_string(),
            },
        }
    }
}

/// Always yields the same snapshot.
#[derive(Clone, Debug)]
pub struct FixedMetrics(pub MetricsSnapshot);

impl MetricsSource for FixedMetrics {
    fn generate(&mut self) -> MetricsSnapshot {
        self.0.clone()
    }
}

pub fn scope_rules() -> RuleSet<MetricsScope> {
    RuleSet::new(
        vec![
            KeywordRule::new(MetricsScope::Support, &["support"]),
            KeywordRule::new(MetricsScope::Products, &["product", "sales"]),
            KeywordRule::new(MetricsScope::Social, &["social", "marketing"]),
        ],
        MetricsScope::All,
    )
}

#[derive(Clone, Debug)]
pub struct AnalyticsAgent {
    snapshot: MetricsSnapshot,
    rules: RuleSet<MetricsScope>,
}

impl AnalyticsAgent {
    pub fn new<S: MetricsSource>(mut source: S) -> Self {
        Self { snapshot: source.generate(), rules: scope_rules() }
    }

    pub fn snapshot(&self) -> &MetricsSnapshot {
        &self.snapshot
    }
}

impl Agent for AnalyticsAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Analytics
    }

    fn process_query(&self, query: &str) -> AgentResponse {
        let scope = self.rules.classify(query);
        debug!(event_name = "agent.analytics.scoped", scope = ?scope, "metrics scoped");
        AgentResponse::Analytics {
            response: scope.title().to_string(),
            agent_type: scope,
            metrics: self.snapshot.scoped(scope),
        }
    }
}
