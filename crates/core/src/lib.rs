pub mod classify;
pub mod config;
pub mod data;
pub mod domain;
pub mod errors;
pub mod sentiment;
pub mod summarizer;
pub mod templates;

pub use classify::{normalize_query, KeywordRule, RuleSet};
pub use config::{AppConfig, ConfigError, LoadOptions, LogFormat};
pub use data::{DataOrigin, DataSet, Loaded};
pub use domain::agent::{AgentKind, UnknownAgentKind};
pub use domain::faq::{FaqBook, FaqEntry};
pub use domain::metrics::{MetricsScope, MetricsSnapshot, ScopedMetrics};
pub use domain::product::{Product, ProductCatalog};
pub use domain::response::AgentResponse;
pub use domain::social::{ContentType, SocialTemplate};
pub use domain::transcript::{ChatMessage, ConversationHistory, Role, TranscriptExport};
pub use errors::{DataError, SessionError};
pub use sentiment::{SentimentAnalyzer, SentimentLabel, SentimentResult};
pub use summarizer::{summarize, ConversationSummary, SentimentOverview};
pub use templates::{ResolvedTemplates, TemplateSource, TemplateStore};
