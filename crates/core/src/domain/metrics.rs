use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupportMetrics {
    pub total_queries: u32,
    pub resolved: u32,
    /// Minutes.
    pub avg_response_time: f64,
    pub satisfaction_rate: f64,
    pub escalation_rate: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductMetrics {
    pub recommendations_made: u32,
    pub conversion_rate: f64,
    pub avg_order_value: f64,
    pub top_category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialMetrics {
    pub posts_generated: u32,
    pub engagement_rate: f64,
    pub reach: u32,
    pub best_performing: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub support: SupportMetrics,
    pub products: ProductMetrics,
    pub social: SocialMetrics,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricsScope {
    Support,
    Products,
    Social,
    All,
}

impl MetricsScope {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Support => "📊 Support Analytics",
            Self::Products => "📊 Product Analytics",
            Self::Social => "📊 Social Media Analytics",
            Self::All => "📊 Overall Analytics Dashboard",
        }
    }

    pub fn includes(&self, section: MetricsScope) -> bool {
        *self == MetricsScope::All || *self == section
    }
}

/// The sections of a snapshot selected by a [`MetricsScope`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScopedMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<SupportMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<ProductMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialMetrics>,
}

impl MetricsSnapshot {
    pub fn scoped(&self, scope: MetricsScope) -> ScopedMetrics {
        ScopedMetrics {
            support: scope.includes(MetricsScope::Support).then(|| self.support.clone()),
            products: scope.includes(MetricsScope::Products).then(|| self.products.clone()),
            social: scope.includes(MetricsScope::Social).then(|| self.social.clone()),
        }
    }
}

pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
