use std::fs;
use std::path::Path;

use agenthub_core::domain::transcript::parse_transcript;
use agenthub_core::errors::SessionError;
use agenthub_core::summarizer::summarize;

use crate::commands::{to_json, CommandResult, EXIT_SESSION};
use crate::render;

pub fn run(transcript: &Path, json: bool) -> CommandResult {
    let messages = match fs::read_to_string(transcript)
        .map_err(|source| SessionError::TranscriptRead {
            path: transcript.to_path_buf(),
            message: source.to_string(),
        })
        .and_then(|raw| parse_transcript(&raw))
    {
        Ok(messages) => messages,
        Err(error) => {
            return CommandResult::failure(
                "summarize",
                error.error_class(),
                format!("{} ({error})", error.user_message()),
                EXIT_SESSION,
            );
        }
    };

    let summary = summarize(&messages);
    if json {
        return to_json("summarize", &summary);
    }
    CommandResult::output(render::summary(&summary))
}
