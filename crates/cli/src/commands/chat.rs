use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use agenthub_agent::AgentHub;
use agenthub_core::config::{AppConfig, ConfigError};
use agenthub_core::domain::agent::AgentKind;
use anyhow::Context;

use crate::commands::{load_config, CommandResult, EXIT_SESSION};
use crate::render;

const HELP: &str = "commands:
  /agent <support|product|social|analytics>  switch agent (history is kept)
  /suggest                                   show quick actions for the current agent
  /summary                                   summarize the conversation so far
  /export [dir]                              write the conversation as JSON
  /clear                                     clear the conversation
  /help                                      show this help
  /quit                                      leave the chat";

#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Query(&'a str),
    Agent(&'a str),
    Suggest,
    Summary,
    Export(Option<&'a str>),
    Clear,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_input(line: &str) -> Option<Input<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let Some(command) = line.strip_prefix('/') else {
        return Some(Input::Query(line));
    };

    let (name, argument) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, Some(rest.trim()).filter(|rest| !rest.is_empty())),
        None => (command, None),
    };
    Some(match (name, argument) {
        ("agent", Some(kind)) => Input::Agent(kind),
        ("suggest", _) => Input::Suggest,
        ("summary", _) => Input::Summary,
        ("export", dir) => Input::Export(dir),
        ("clear", _) => Input::Clear,
        ("help", _) => Input::Help,
        ("quit" | "exit", _) => Input::Quit,
        _ => Input::Unknown(line),
    })
}

pub fn run(loaded: &Result<AppConfig, ConfigError>, agent: Option<AgentKind>) -> CommandResult {
    let config = match load_config("chat", loaded) {
        Ok(config) => config,
        Err(failure) => return failure,
    };

    let mut hub = AgentHub::from_config(&config);
    if let Some(agent) = agent {
        hub.switch_agent(agent);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = run_session(&mut hub, stdin.lock(), stdout.lock(), &config.session.export_dir)
        .with_context(|| {
            format!("chat session {} ended on a terminal I/O error", hub.session_id())
        });
    match session {
        Ok(()) => CommandResult::output(String::new()),
        Err(error) => CommandResult::failure("chat", "io", format!("{error:#}"), EXIT_SESSION),
    }
}

/// Drives one interactive session until `/quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    hub: &mut AgentHub,
    input: R,
    mut output: W,
    export_dir: &Path,
) -> io::Result<()> {
    writeln!(output, "{} ready. Type /help for commands.", hub.active().display_name())?;
    prompt(&mut output, hub)?;

    for line in input.lines() {
        let line = line?;
        match parse_input(&line) {
            None => {}
            Some(Input::Query(query)) => {
                let response = hub.ask(query);
                writeln!(output, "{}", render::response(&response))?;
            }
            Some(Input::Agent(name)) => match name.parse::<AgentKind>() {
                Ok(kind) => {
                    hub.switch_agent(kind);
                    writeln!(output, "switched to {}", kind.display_name())?;
                }
                Err(error) => writeln!(output, "{error}")?,
            },
            Some(Input::Suggest) => {
                for suggestion in hub.active().suggestions() {
                    writeln!(output, "• {suggestion}")?;
                }
            }
            Some(Input::Summary) => writeln!(output, "{}", render::summary(&hub.summary()))?,
            Some(Input::Export(dir)) => {
                let dir = dir.map(PathBuf::from).unwrap_or_else(|| export_dir.to_path_buf());
                match hub.write_export(&dir) {
                    Ok(path) => writeln!(output, "✅ Chat exported to {}", path.display())?,
                    Err(error) => writeln!(output, "{} ({error})", error.user_message())?,
                }
            }
            Some(Input::Clear) => {
                hub.clear_history();
                writeln!(output, "conversation cleared")?;
            }
            Some(Input::Help) => writeln!(output, "{HELP}")?,
            Some(Input::Quit) => break,
            Some(Input::Unknown(command)) => {
                writeln!(output, "unknown command `{command}`; type /help")?
            }
        }
        prompt(&mut output, hub)?;
    }

    writeln!(output, "bye ({} messages)", hub.history().len())?;
    output.flush()
}

fn prompt<W: Write>(output: &mut W, hub: &AgentHub) -> io::Result<()> {
    write!(output, "[{}]> ", hub.active().as_str())?;
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::{parse_input, Input};

    #[test]
    fn parses_commands_and_queries() {
        assert_eq!(parse_input("  "), None);
        assert_eq!(parse_input("where is my order"), Some(Input::Query("where is my order")));
        assert_eq!(parse_input("/agent social"), Some(Input::Agent("social")));
        assert_eq!(parse_input("/export"), Some(Input::Export(None)));
        assert_eq!(parse_input("/export  out/dir "), Some(Input::Export(Some("out/dir"))));
        assert_eq!(parse_input("/exit"), Some(Input::Quit));
        assert_eq!(parse_input("/agent"), Some(Input::Unknown("/agent")));
        assert_eq!(parse_input("/dance"), Some(Input::Unknown("/dance")));
    }
}
