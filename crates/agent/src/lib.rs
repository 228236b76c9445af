//! Keyword-routed assistant agents.
//!
//! Four agents share the [`Agent`] trait:
//! - [`SupportAgent`] answers FAQs, escalates complaints and falls back to a help menu.
//! - [`ProductAgent`] recommends catalog items by category, price or rating.
//! - [`SocialAgent`] drafts social posts from templates and scores query sentiment.
//! - [`AnalyticsAgent`] serves a fixed metrics snapshot scoped by the query.
//!
//! [`AgentHub`] ties them into a session with history, summaries and export.

pub mod agent;
pub mod analytics;
pub mod hub;
pub mod product;
pub mod social;
pub mod support;

pub use agent::Agent;
pub use analytics::{AnalyticsAgent, FixedMetrics, MetricsSource, RandomMetrics};
pub use hub::AgentHub;
pub use product::ProductAgent;
pub use social::SocialAgent;
pub use support::{ticket_number, SupportAgent};
