pub mod commands;
pub mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use agenthub_core::config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};
use agenthub_core::domain::agent::AgentKind;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "agenthub",
    about = "Keyword-routed support, product, social and analytics assistants",
    long_about = "Ask one-off questions, run an interactive chat session, summarize exported \
                  transcripts, and inspect configuration and data readiness.",
    after_help = "Examples:\n  \
                  agenthub ask --agent product \"show me budget electronics\"\n  \
                  agenthub chat --agent social\n  \
                  agenthub summarize ai_agent_chat_20240101_120000.json --json\n  \
                  agenthub doctor --json"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to an agenthub.toml config file")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Override logging.level (trace|debug|info|warn|error)")]
    log_level: Option<String>,
    #[arg(long, global = true, help = "Seed analytics metrics for reproducible output")]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Send one query to an agent and print the response")]
    Ask {
        #[arg(long, short, help = "Agent to ask (defaults to session.default_agent)")]
        agent: Option<AgentKind>,
        #[arg(long, help = "Emit the structured response as JSON")]
        json: bool,
        #[arg(required = true, num_args = 1.., help = "Query text")]
        query: Vec<String>,
    },
    #[command(about = "Start an interactive chat session on stdin/stdout")]
    Chat {
        #[arg(long, short, help = "Agent to start with (defaults to session.default_agent)")]
        agent: Option<AgentKind>,
    },
    #[command(about = "Summarize an exported chat transcript")]
    Summarize {
        #[arg(help = "Transcript JSON (session export or message array)")]
        transcript: PathBuf,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "List agents and their quick-action suggestions")]
    Agents,
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config and check each data file and the export directory")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

impl Cli {
    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            config_path: self.config.clone(),
            require_file: self.config.is_some(),
            overrides: ConfigOverrides {
                log_level: self.log_level.clone(),
                analytics_seed: self.seed,
                ..ConfigOverrides::default()
            },
        }
    }
}

fn init_logging(loaded: &Result<AppConfig, ConfigError>) {
    use tracing::Level;

    let fallback = AppConfig::default();
    let config = loaded.as_ref().unwrap_or(&fallback);
    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::WARN);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(std::io::stderr);

    match config.logging.format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }

    if let Err(error) = loaded {
        tracing::debug!(
            event_name = "logging.default_config",
            error = %error,
            "logging with default settings; config failed to load"
        );
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let options = cli.load_options();
    let loaded = AppConfig::load(options.clone());
    init_logging(&loaded);

    let result = match cli.command {
        Command::Ask { agent, json, query } => {
            commands::ask::run(&loaded, agent, &query.join(" "), json)
        }
        Command::Chat { agent } => commands::chat::run(&loaded, agent),
        Command::Summarize { transcript, json } => commands::summarize::run(&transcript, json),
        Command::Agents => commands::CommandResult::output(commands::agents::run()),
        Command::Config => {
            commands::CommandResult::output(commands::config::run(&options, &loaded))
        }
        Command::Doctor { json } => {
            let (output, healthy) = commands::doctor::run(&loaded, json);
            let exit_code = if healthy { 0 } else { commands::EXIT_CONFIG };
            commands::CommandResult { exit_code, output }
        }
    };

    if !result.output.is_empty() {
        println!("{}", result.output);
    }
    ExitCode::from(result.exit_code)
}
