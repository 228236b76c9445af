use std::cmp::Ordering;

use agenthub_core::classify::{normalize_query, KeywordRule, RuleSet};
use agenthub_core::domain::agent::AgentKind;
use agenthub_core::domain::product::{Product, ProductCatalog};
use agenthub_core::domain::response::AgentResponse;
use tracing::debug;

use crate::agent::Agent;

pub const RECOMMENDATION_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// A catalog category was named in the query.
    Category,
    Budget,
    Premium,
    TopRated,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Budget => "budget",
            Self::Premium => "premium",
            Self::TopRated => "top_rated",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProductAgent {
    catalog: ProductCatalog,
    price_rules: RuleSet<Strategy>,
}

impl ProductAgent {
    pub fn new(catalog: ProductCatalog) -> Self {
        let price_rules = RuleSet::new(
            vec![
                KeywordRule::new(Strategy::Budget, &["budget", "cheap", "affordable"]),
                KeywordRule::new(Strategy::Premium, &["premium", "luxury", "expensive"]),
            ],
            Strategy::TopRated,
        );
        Self { catalog, price_rules }
    }

    /// Picks the strategy and the (unlimited) ordered candidates for a query.
    pub fn rank(&self, query: &str) -> (Strategy, Vec<&Product>) {
        let normalized = normalize_query(query);
        if let Some((_, products)) = self.catalog.category_mentioned_in(&normalized) {
            if !products.is_empty() {
                return (Strategy::Category, products.iter().collect());
            }
        }

        let strategy = self.price_rules.classify(&normalized);
        let mut products = self.catalog.all_products();
        match strategy {
            Strategy::Budget => products.sort_by(|left, right| left.price.cmp(&right.price)),
            Strategy::Premium => products.sort_by(|left, right| right.price.cmp(&left.price)),
            Strategy::TopRated | Strategy::Category => products.sort_by(|left, right| {
                right.rating.partial_cmp(&left.rating).unwrap_or(Ordering::Equal)
            }),
        }
        (strategy, products)
    }
}

impl Agent for ProductAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Product
    }

    fn process_query(&self, query: &str) -> AgentResponse {
        let (strategy, ranked) = self.rank(query);
        let products: Vec<Product> =
            ranked.into_iter().take(RECOMMENDATION_LIMIT).cloned().collect();
        debug!(
            event_name = "agent.product.recommended",
            strategy = strategy.as_str(),
            count = products.len(),
            "recommendations selected"
        );
        AgentResponse::Recommendations {
            response: "🎯 **Top Recommendations:**".to_string(),
            products,
        }
    }
}
