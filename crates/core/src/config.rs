use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::agent::AgentKind;

pub const DEFAULT_CONFIG_FILE: &str = "agenthub.toml";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub data: DataConfig,
    pub analytics: AnalyticsConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataConfig {
    pub faqs_path: PathBuf,
    pub products_path: PathBuf,
    pub templates_path: PathBuf,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalyticsConfig {
    /// Fixed RNG seed for the per-session metrics snapshot; `None` seeds from entropy.
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub default_agent: AgentKind,
    pub export_dir: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
    pub default_agent: Option<AgentKind>,
    pub analytics_seed: Option<u64>,
    pub export_dir: Option<PathBuf>,
    pub faqs_path: Option<PathBuf>,
    pub products_path: Option<PathBuf>,
    pub templates_path: Option<PathBuf>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig {
                faqs_path: PathBuf::from("data/faqs.json"),
                products_path: PathBuf::from("data/products.json"),
                templates_path: PathBuf::from("data/social_templates.json"),
            },
            analytics: AnalyticsConfig::default(),
            session: SessionConfig {
                default_agent: AgentKind::Support,
                export_dir: PathBuf::from("."),
            },
            logging: LoggingConfig { level: "warn".to_string(), format: LogFormat::Compact },
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected =
                options.config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(data) = patch.data {
            if let Some(faqs_path) = data.faqs_path {
                self.data.faqs_path = faqs_path;
            }
            if let Some(products_path) = data.products_path {
                self.data.products_path = products_path;
            }
            if let Some(templates_path) = data.templates_path {
                self.data.templates_path = templates_path;
            }
        }

        if let Some(analytics) = patch.analytics {
            if let Some(seed) = analytics.seed {
                self.analytics.seed = Some(seed);
            }
        }

        if let Some(session) = patch.session {
            if let Some(default_agent) = session.default_agent {
                self.session.default_agent = default_agent;
            }
            if let Some(export_dir) = session.export_dir {
                self.session.export_dir = export_dir;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("AGENTHUB_DATA_FAQS_PATH") {
            self.data.faqs_path = PathBuf::from(value);
        }
        if let Some(value) = read_env("AGENTHUB_DATA_PRODUCTS_PATH") {
            self.data.products_path = PathBuf::from(value);
        }
        if let Some(value) = read_env("AGENTHUB_DATA_TEMPLATES_PATH") {
            self.data.templates_path = PathBuf::from(value);
        }

        if let Some(value) = read_env("AGENTHUB_ANALYTICS_SEED") {
            self.analytics.seed = Some(parse_u64("AGENTHUB_ANALYTICS_SEED", &value)?);
        }

        if let Some(value) = read_env("AGENTHUB_SESSION_DEFAULT_AGENT") {
            self.session.default_agent = parse_agent("AGENTHUB_SESSION_DEFAULT_AGENT", &value)?;
        }
        if let Some(value) = read_env("AGENTHUB_SESSION_EXPORT_DIR") {
            self.session.export_dir = PathBuf::from(value);
        }

        let log_level =
            read_env("AGENTHUB_LOGGING_LEVEL").or_else(|| read_env("AGENTHUB_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("AGENTHUB_LOGGING_FORMAT").or_else(|| read_env("AGENTHUB_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
        if let Some(log_format) = overrides.log_format {
            self.logging.format = log_format;
        }
        if let Some(default_agent) = overrides.default_agent {
            self.session.default_agent = default_agent;
        }
        if let Some(seed) = overrides.analytics_seed {
            self.analytics.seed = Some(seed);
        }
        if let Some(export_dir) = overrides.export_dir {
            self.session.export_dir = export_dir;
        }
        if let Some(faqs_path) = overrides.faqs_path {
            self.data.faqs_path = faqs_path;
        }
        if let Some(products_path) = overrides.products_path {
            self.data.products_path = products_path;
        }
        if let Some(templates_path) = overrides.templates_path {
            self.data.templates_path = templates_path;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_data(&self.data)?;
        validate_session(&self.session)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from("config").join(DEFAULT_CONFIG_FILE)]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    let interpolated = interpolate_env_vars(&raw)?;
    toml::from_str::<ConfigPatch>(&interpolated)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut key = String::new();

            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(next) => key.push(next),
                    None => return Err(ConfigError::UnterminatedInterpolation),
                }
            }

            let value = env::var(&key)
                .map_err(|_| ConfigError::MissingEnvInterpolation { var: key.clone() })?;
            output.push_str(&value);
            continue;
        }

        output.push(ch);
    }

    Ok(output)
}

fn validate_data(data: &DataConfig) -> Result<(), ConfigError> {
    let paths = [
        ("data.faqs_path", &data.faqs_path),
        ("data.products_path", &data.products_path),
        ("data.templates_path", &data.templates_path),
    ];
    for (key, path) in paths {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{key} must not be empty (point it at a JSON file, or remove it to use the default)"
            )));
        }
        if path.is_dir() {
            return Err(ConfigError::Validation(format!(
                "{key} points at a directory (`{}`); expected a JSON file",
                path.display()
            )));
        }
    }
    Ok(())
}

fn validate_session(session: &SessionConfig) -> Result<(), ConfigError> {
    if session.export_dir.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "session.export_dir must not be empty (use `.` for the working directory)".to_string(),
        ));
    }
    if session.export_dir.is_file() {
        return Err(ConfigError::Validation(format!(
            "session.export_dir points at a file (`{}`); expected a directory",
            session.export_dir.display()
        )));
    }
    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_agent(key: &str, value: &str) -> Result<AgentKind, ConfigError> {
    value.parse::<AgentKind>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    data: Option<DataPatch>,
    analytics: Option<AnalyticsPatch>,
    session: Option<SessionPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct DataPatch {
    faqs_path: Option<PathBuf>,
    products_path: Option<PathBuf>,
    templates_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct AnalyticsPatch {
    seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct SessionPatch {
    default_agent: Option<AgentKind>,
    export_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}
