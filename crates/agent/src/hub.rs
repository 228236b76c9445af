use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use agenthub_core::config::AppConfig;
use agenthub_core::data::DataSet;
use agenthub_core::domain::agent::AgentKind;
use agenthub_core::domain::metrics::round_to;
use agenthub_core::domain::response::AgentResponse;
use agenthub_core::domain::transcript::{ChatMessage, ConversationHistory, TranscriptExport};
use agenthub_core::errors::SessionError;
use agenthub_core::summarizer::{summarize, ConversationSummary};
use tracing::info;
use uuid::Uuid;

use crate::agent::Agent;
use crate::analytics::{AnalyticsAgent, MetricsSource, RandomMetrics};
use crate::product::ProductAgent;
use crate::social::SocialAgent;
use crate::support::SupportAgent;

/// One chat session: the four agents, which one is active, and the turns so far.
#[derive(Debug)]
pub struct AgentHub {
    session_id: Uuid,
    active: AgentKind,
    history: ConversationHistory,
    support: SupportAgent,
    product: ProductAgent,
    social: SocialAgent,
    analytics: AnalyticsAgent,
}

impl AgentHub {
    pub fn new<S: MetricsSource>(data: DataSet, metrics: S, active: AgentKind) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            active,
            history: ConversationHistory::new(),
            support: SupportAgent::new(data.faqs.value),
            product: ProductAgent::new(data.catalog.value),
            social: SocialAgent::new(data.templates.value),
            analytics: AnalyticsAgent::new(metrics),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            DataSet::load(&config.data),
            RandomMetrics::from_seed(config.analytics.seed),
            config.session.default_agent,
        )
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn active(&self) -> AgentKind {
        self.active
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn support(&self) -> &SupportAgent {
        &self.support
    }

    pub fn agent(&self, kind: AgentKind) -> &dyn Agent {
        match kind {
            AgentKind::Support => &self.support,
            AgentKind::Product => &self.product,
            AgentKind::Social => &self.social,
            AgentKind::Analytics => &self.analytics,
        }
    }

    /// Routes `query` to the active agent and records both turns.
    pub fn ask(&mut self, query: &str) -> AgentResponse {
        self.history.push(ChatMessage::user(query));

        let started = Instant::now();
        let response = self.agent(self.active).process_query(query);
        let elapsed_ms = round_to(started.elapsed().as_secs_f64() * 1000.0, 2);

        info!(
            event_name = "session.turn",
            agent = self.active.as_str(),
            response_type = response.type_name(),
            elapsed_ms,
            "query answered"
        );
        self.history.push(ChatMessage::assistant(response.clone(), elapsed_ms));
        response
    }

    /// History is kept across switches.
    pub fn switch_agent(&mut self, kind: AgentKind) {
        if kind != self.active {
            info!(
                event_name = "session.agent_switched",
                from = self.active.as_str(),
                to = kind.as_str(),
                "active agent changed"
            );
            self.active = kind;
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn summary(&self) -> ConversationSummary {
        summarize(self.history.messages())
    }

    pub fn export(&self) -> Result<TranscriptExport, SessionError> {
        if self.history.is_empty() {
            return Err(SessionError::EmptyTranscript);
        }
        Ok(TranscriptExport::new(self.active, self.session_id, self.history.messages().to_vec()))
    }

    /// Writes the export as pretty JSON into `dir` and returns the file path.
    pub fn write_export(&self, dir: &Path) -> Result<PathBuf, SessionError> {
        let export = self.export()?;
        let body = serde_json::to_string_pretty(&export)
            .map_err(|source| SessionError::Serialize { message: source.to_string() })?;

        let path = dir.join(export.file_name());
        fs::create_dir_all(dir)
            .and_then(|()| fs::write(&path, body))
            .map_err(|source| SessionError::Export {
                path: path.clone(),
                message: source.to_string(),
            })?;

        info!(
            event_name = "session.exported",
            path = %path.display(),
            messages = export.total_messages,
            "session exported"
        );
        Ok(path)
    }
}
