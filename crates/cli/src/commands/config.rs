use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use agenthub_core::config::{AppConfig, ConfigError, LoadOptions, DEFAULT_CONFIG_FILE};
use toml::Value;

pub fn run(options: &LoadOptions, loaded: &Result<AppConfig, ConfigError>) -> String {
    let config = match loaded {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = detect_config_path(options.config_path.as_deref());
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let overrides = &options.overrides;
    let source = |key_path: &str, override_source: Option<&str>, env_keys: &[&str]| {
        if let Some(label) = override_source {
            return label.to_string();
        }
        field_source(key_path, env_keys, config_file_doc.as_ref(), config_file_path.as_deref())
    };

    let mut lines = vec![
        "effective config (source precedence: cli/override > env > file > default):".to_string()
    ];

    lines.push(render_line(
        "data.faqs_path",
        &config.data.faqs_path.display().to_string(),
        source(
            "data.faqs_path",
            overrides.faqs_path.as_ref().map(|_| "override (faqs_path)"),
            &["AGENTHUB_DATA_FAQS_PATH"],
        ),
    ));
    lines.push(render_line(
        "data.products_path",
        &config.data.products_path.display().to_string(),
        source(
            "data.products_path",
            overrides.products_path.as_ref().map(|_| "override (products_path)"),
            &["AGENTHUB_DATA_PRODUCTS_PATH"],
        ),
    ));
    lines.push(render_line(
        "data.templates_path",
        &config.data.templates_path.display().to_string(),
        source(
            "data.templates_path",
            overrides.templates_path.as_ref().map(|_| "override (templates_path)"),
            &["AGENTHUB_DATA_TEMPLATES_PATH"],
        ),
    ));

    let seed = config.analytics.seed.map(|seed| seed.to_string());
    lines.push(render_line(
        "analytics.seed",
        seed.as_deref().unwrap_or("<unset>"),
        source(
            "analytics.seed",
            overrides.analytics_seed.map(|_| "cli (--seed)"),
            &["AGENTHUB_ANALYTICS_SEED"],
        ),
    ));

    lines.push(render_line(
        "session.default_agent",
        config.session.default_agent.as_str(),
        source(
            "session.default_agent",
            overrides.default_agent.map(|_| "override (default_agent)"),
            &["AGENTHUB_SESSION_DEFAULT_AGENT"],
        ),
    ));
    lines.push(render_line(
        "session.export_dir",
        &config.session.export_dir.display().to_string(),
        source(
            "session.export_dir",
            overrides.export_dir.as_ref().map(|_| "override (export_dir)"),
            &["AGENTHUB_SESSION_EXPORT_DIR"],
        ),
    ));

    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        source(
            "logging.level",
            overrides.log_level.as_ref().map(|_| "cli (--log-level)"),
            &["AGENTHUB_LOGGING_LEVEL", "AGENTHUB_LOG_LEVEL"],
        ),
    ));
    lines.push(render_line(
        "logging.format",
        config.logging.format.as_str(),
        source(
            "logging.format",
            overrides.log_format.map(|_| "override (log_format)"),
            &["AGENTHUB_LOGGING_FORMAT", "AGENTHUB_LOG_FORMAT"],
        ),
    ));

    lines.join("\n")
}

fn detect_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return path.exists().then(|| path.to_path_buf());
    }

    let root = PathBuf::from(DEFAULT_CONFIG_FILE);
    if root.exists() {
        return Some(root);
    }

    let nested = PathBuf::from("config").join(DEFAULT_CONFIG_FILE);
    if nested.exists() {
        return Some(nested);
    }

    None
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys
        .iter()
        .find(|key| env::var(key).is_ok_and(|value| !value.trim().is_empty()))
    {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
