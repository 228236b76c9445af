use agenthub_agent::AgentHub;
use agenthub_core::config::{AppConfig, ConfigError};
use agenthub_core::domain::agent::AgentKind;

use crate::commands::{load_config, to_json, CommandResult};
use crate::render;

pub fn run(
    loaded: &Result<AppConfig, ConfigError>,
    agent: Option<AgentKind>,
    query: &str,
    json: bool,
) -> CommandResult {
    let config = match load_config("ask", loaded) {
        Ok(config) => config,
        Err(failure) => return failure,
    };

    let mut hub = AgentHub::from_config(&config);
    if let Some(agent) = agent {
        hub.switch_agent(agent);
    }
    let response = hub.ask(query);

    if json {
        return to_json("ask", &response);
    }
    CommandResult::output(render::response(&response))
}
