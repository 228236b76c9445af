pub mod agents;
pub mod ask;
pub mod chat;
pub mod config;
pub mod doctor;
pub mod summarize;

use agenthub_core::config::{AppConfig, ConfigError};
use serde::Serialize;

pub const EXIT_CONFIG: u8 = 2;
pub const EXIT_SESSION: u8 = 3;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    /// Raw output, printed as-is.
    pub fn output(output: impl Into<String>) -> Self {
        Self { exit_code: 0, output: output.into() }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }
}

pub(crate) fn load_config(
    command: &str,
    loaded: &Result<AppConfig, ConfigError>,
) -> Result<AppConfig, CommandResult> {
    match loaded {
        Ok(config) => Ok(config.clone()),
        Err(error) => Err(CommandResult::failure(
            command,
            "config_validation",
            format!("configuration issue: {error}"),
            EXIT_CONFIG,
        )),
    }
}

pub(crate) fn to_json<T: Serialize>(command: &str, value: &T) -> CommandResult {
    match serde_json::to_string_pretty(value) {
        Ok(json) => CommandResult::output(json),
        Err(error) => {
            CommandResult::failure(command, "serialization", error.to_string(), EXIT_SESSION)
        }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            concat!(
                "{{\"command\":\"unknown\",\"status\":\"error\",",
                "\"error_class\":\"serialization\",\"message\":\"{}\"}}"
            ),
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
