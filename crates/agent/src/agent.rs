use agenthub_core::domain::agent::AgentKind;
use agenthub_core::domain::response::AgentResponse;

/// A keyword-routed responder. `process_query` never fails: every query,
/// including an empty one, maps to some response.
pub trait Agent: Send + Sync {
    fn kind(&self) -> AgentKind;

    fn process_query(&self, query: &str) -> AgentResponse;
}
