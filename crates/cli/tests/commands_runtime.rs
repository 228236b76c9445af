use std::env;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use agenthub_agent::{AgentHub, RandomMetrics};
use agenthub_cli::commands::{agents, ask, chat, config, doctor, summarize};
use agenthub_core::config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions};
use agenthub_core::data::DataSet;
use agenthub_core::domain::agent::AgentKind;
use serde_json::Value;
use tempfile::TempDir;

const PRODUCTS_JSON: &str = r#"{
  "electronics": [
    {"name": "Earbuds", "price": 59.99, "rating": 4.5, "features": ["ANC"]},
    {"name": "Charger", "price": 19.99, "rating": 4.0}
  ],
  "home": [
    {"name": "Lamp", "price": 24.5, "rating": 4.9}
  ]
}"#;

#[test]
fn ask_escalates_complaint_with_ticket() {
    with_env(&[], || {
        let dir = temp_dir();
        let result =
            ask::run(&load(dir.path()), Some(AgentKind::Support), "My order arrived damaged", true);
        assert_eq!(result.exit_code, 0, "expected successful ask");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["type"], "escalation");
        assert_eq!(payload["escalate"], true);
        let ticket = payload["ticket_number"].as_str().unwrap_or_default();
        assert!(ticket.starts_with("TKT-") && ticket.len() == 9, "unexpected ticket `{ticket}`");
    });
}

#[test]
fn ask_budget_query_reads_catalog_file() {
    with_env(&[], || {
        let dir = temp_dir();
        fs::write(dir.path().join("products.json"), PRODUCTS_JSON).expect("catalog written");

        let result =
            ask::run(&load(dir.path()), Some(AgentKind::Product), "something cheap", true);
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["type"], "recommendations");
        let names: Vec<&str> = payload["products"]
            .as_array()
            .map(|products| {
                products.iter().filter_map(|product| product["name"].as_str()).collect()
            })
            .unwrap_or_default();
        assert_eq!(names, vec!["Charger", "Lamp", "Earbuds"]);
    });
}

#[test]
fn ask_uses_default_agent_from_env_and_renders_text() {
    with_env(&[("AGENTHUB_SESSION_DEFAULT_AGENT", "social")], || {
        let dir = temp_dir();
        let result = ask::run(&load(dir.path()), None, "Generate contest content", false);
        assert_eq!(result.exit_code, 0);
        assert!(result.output.starts_with("🎁 Contest & Giveaway Ideas"));
        assert!(result.output.contains("Query sentiment:"));
    });
}

#[test]
fn ask_returns_config_failure_for_invalid_log_level() {
    with_env(&[("AGENTHUB_LOG_LEVEL", "chatty")], || {
        let dir = temp_dir();
        let result = ask::run(&load(dir.path()), None, "hello", false);
        assert_eq!(result.exit_code, 2, "expected config validation failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "ask");
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "config_validation");
    });
}

#[test]
fn chat_session_switches_agents_summarizes_and_exports() {
    let dir = temp_dir();
    let export_dir = dir.path().join("exports");
    let mut hub = AgentHub::new(DataSet::builtin(), RandomMetrics::seeded(9), AgentKind::Support);
    let script = concat!(
        "How do I track my order?\n/agent product\nshow me fashion\n",
        "/summary\n/export\n/quit\nignored after quit\n",
    );
    let mut output = Vec::new();

    chat::run_session(&mut hub, Cursor::new(script), &mut output, &export_dir)
        .expect("session should run");
    let transcript = String::from_utf8(output).expect("utf8 output");

    assert!(transcript.contains("💡 **Order Tracking**"));
    assert!(transcript.contains("switched to 🛍️ Product Recommender"));
    assert!(transcript.contains("🎯 **Top Recommendations:**"));
    assert!(transcript.contains("- Topics: order, track, fashion"));
    assert!(transcript.contains("✅ Chat exported to"));
    assert!(transcript.trim_end().ends_with("bye (4 messages)"));

    let exported: Vec<PathBuf> = fs::read_dir(&export_dir)
        .expect("export dir created")
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .collect();
    assert_eq!(exported.len(), 1);
}

#[test]
fn chat_export_of_empty_session_explains_itself() {
    let dir = temp_dir();
    let mut hub =
        AgentHub::new(DataSet::builtin(), RandomMetrics::seeded(9), AgentKind::Analytics);
    let mut output = Vec::new();

    chat::run_session(&mut hub, Cursor::new("/export\n/agent janitor\n"), &mut output, dir.path())
        .expect("session should run");
    let transcript = String::from_utf8(output).expect("utf8 output");

    assert!(transcript.contains("Start a conversation to export!"));
    assert!(transcript.contains("unknown agent `janitor`"));
}

#[test]
fn summarize_reads_exported_transcript() {
    let dir = temp_dir();
    let mut hub = AgentHub::new(DataSet::builtin(), RandomMetrics::seeded(9), AgentKind::Social);
    hub.ask("I love this new product launch");
    hub.ask("awful, terrible sale");
    hub.ask("great, amazing giveaway");
    let path = hub.write_export(dir.path()).expect("export written");

    let result = summarize::run(&path, true);
    assert_eq!(result.exit_code, 0);
    let payload = parse_payload(&result.output);
    assert_eq!(payload["total_messages"], 6);
    assert_eq!(payload["user_messages"], 3);
    assert_eq!(payload["bot_messages"], 3);
    assert_eq!(payload["topics"], serde_json::json!(["product"]));
    assert_eq!(payload["sentiment_overview"], "Mostly Positive");
}

#[test]
fn summarize_accepts_bare_message_array() {
    let dir = temp_dir();
    let path = dir.path().join("messages.json");
    fs::write(
        &path,
        r#"[
            {"role": "user", "content": "Refund for my ORDER"},
            {"role": "assistant", "content": "ok"}
        ]"#,
    )
    .expect("transcript written");

    let result = summarize::run(&path, false);
    assert_eq!(result.exit_code, 0);
    assert!(result.output.contains("- Topics: order, refund"));
    assert!(result.output.contains("Sentiment: 😐 Neutral"));
}

#[test]
fn summarize_accepts_export_with_naive_timestamp() {
    let dir = temp_dir();
    let path = dir.path().join("ai_agent_chat_20240101_120000.json");
    fs::write(
        &path,
        r#"{
          "agent": "support",
          "timestamp": "2024-01-01T12:00:00.123456",
          "total_messages": 2,
          "messages": [
            {"role": "user", "content": "Where is my order? The delivery is late"},
            {
              "role": "assistant",
              "content": "Use the tracking link",
              "data": {"category": "tracking"}
            }
          ]
        }"#,
    )
    .expect("transcript written");

    let result = summarize::run(&path, true);
    assert_eq!(result.exit_code, 0, "unexpected failure: {}", result.output);
    let payload = parse_payload(&result.output);
    assert_eq!(payload["total_messages"], 2);
    assert_eq!(payload["user_messages"], 1);
    assert_eq!(payload["topics"], serde_json::json!(["order"]));
}

#[test]
fn summarize_reports_missing_and_corrupt_transcripts() {
    let dir = temp_dir();
    let missing = summarize::run(&dir.path().join("nope.json"), false);
    assert_eq!(missing.exit_code, 3);
    assert_eq!(parse_payload(&missing.output)["error_class"], "transcript_io");

    let corrupt_path = dir.path().join("corrupt.json");
    fs::write(&corrupt_path, "{\"messages\": 4").expect("file written");
    let corrupt = summarize::run(&corrupt_path, false);
    assert_eq!(corrupt.exit_code, 3);
    let payload = parse_payload(&corrupt.output);
    assert_eq!(payload["command"], "summarize");
    assert_eq!(payload["error_class"], "transcript_parse");
}

#[test]
fn doctor_passes_with_all_data_files_present() {
    with_env(&[], || {
        let dir = temp_dir();
        fs::write(dir.path().join("products.json"), PRODUCTS_JSON).expect("catalog written");
        fs::write(
            dir.path().join("faqs.json"),
            r#"{"hours": {"keywords": ["open"], "category": "hours", "answer": "9 to 5"}}"#,
        )
        .expect("faqs written");
        fs::write(
            dir.path().join("social_templates.json"),
            r#"{"general": [{"platform": "X", "content": "Hi", "type": "General"}]}"#,
        )
        .expect("templates written");

        let (output, healthy) = doctor::run(&load(dir.path()), true);
        assert!(healthy);
        let payload = parse_payload(&output);
        assert_eq!(payload["overall_status"], "pass");
        assert_eq!(payload["checks"].as_array().map(Vec::len), Some(5));
    });
}

#[test]
fn doctor_warns_when_falling_back_to_builtin_data() {
    with_env(&[], || {
        let dir = temp_dir();
        fs::write(dir.path().join("faqs.json"), "{ broken").expect("faqs written");

        let (output, healthy) = doctor::run(&load(dir.path()), false);
        assert!(healthy, "fallbacks are not failures");
        assert!(output.starts_with("doctor: ready, running on built-in fallbacks"));
        assert!(output.contains("- [warn] faqs_data:"));
        assert!(output.contains("is corrupt"));
        assert!(output.contains("is missing"));
    });
}

#[test]
fn doctor_fails_and_skips_when_config_invalid() {
    with_env(&[("AGENTHUB_ANALYTICS_SEED", "not-a-number")], || {
        let dir = temp_dir();
        let (output, healthy) = doctor::run(&load(dir.path()), true);
        assert!(!healthy);
        let payload = parse_payload(&output);
        assert_eq!(payload["overall_status"], "fail");
        assert_eq!(payload["checks"][1]["status"], "skipped");
    });
}

#[test]
fn config_attributes_env_and_file_sources() {
    with_env(&[("AGENTHUB_SESSION_DEFAULT_AGENT", "analytics")], || {
        let dir = temp_dir();
        let config_path = dir.path().join("agenthub.toml");
        fs::write(&config_path, "[analytics]\nseed = 99\n").expect("config written");

        let options = LoadOptions {
            config_path: Some(config_path.clone()),
            require_file: true,
            overrides: ConfigOverrides::default(),
        };
        let output = config::run(&options, &AppConfig::load(options.clone()));

        assert!(output.contains(&format!(
            "- analytics.seed = 99 (source: file ({}))",
            config_path.display()
        )));
        assert!(output.contains(
            "- session.default_agent = analytics (source: env (AGENTHUB_SESSION_DEFAULT_AGENT))"
        ));
        assert!(output.contains("- logging.format = compact (source: default)"));
    });
}

#[test]
fn config_attributes_cli_flags_over_env_and_file() {
    with_env(&[("AGENTHUB_LOG_LEVEL", "error")], || {
        let dir = temp_dir();
        let config_path = dir.path().join("agenthub.toml");
        fs::write(&config_path, "[analytics]\nseed = 99\n").expect("config written");

        let options = LoadOptions {
            config_path: Some(config_path),
            require_file: true,
            overrides: ConfigOverrides {
                analytics_seed: Some(7),
                log_level: Some("debug".to_string()),
                ..ConfigOverrides::default()
            },
        };
        let output = config::run(&options, &AppConfig::load(options.clone()));

        assert!(output.contains("- analytics.seed = 7 (source: cli (--seed))"));
        assert!(output.contains("- logging.level = debug (source: cli (--log-level))"));
        assert!(output.contains("- session.export_dir = . (source: default)"));
    });
}

#[test]
fn agents_lists_every_agent_with_suggestions() {
    let output = agents::run();
    for kind in ["support", "product", "social", "analytics"] {
        assert!(output.contains(&format!("- {kind} (")), "missing agent {kind}");
    }
    assert!(output.contains("• Generate contest content"));
}

fn load(dir: &Path) -> Result<AppConfig, ConfigError> {
    AppConfig::load(options_for(dir))
}

fn options_for(dir: &Path) -> LoadOptions {
    LoadOptions {
        config_path: None,
        require_file: false,
        overrides: ConfigOverrides {
            faqs_path: Some(dir.join("faqs.json")),
            products_path: Some(dir.join("products.json")),
            templates_path: Some(dir.join("social_templates.json")),
            export_dir: Some(dir.to_path_buf()),
            analytics_seed: Some(1),
            ..ConfigOverrides::default()
        },
    }
}

fn temp_dir() -> TempDir {
    TempDir::new().expect("temp dir should be created")
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "AGENTHUB_DATA_FAQS_PATH",
        "AGENTHUB_DATA_PRODUCTS_PATH",
        "AGENTHUB_DATA_TEMPLATES_PATH",
        "AGENTHUB_ANALYTICS_SEED",
        "AGENTHUB_SESSION_DEFAULT_AGENT",
        "AGENTHUB_SESSION_EXPORT_DIR",
        "AGENTHUB_LOGGING_LEVEL",
        "AGENTHUB_LOGGING_FORMAT",
        "AGENTHUB_LOG_LEVEL",
        "AGENTHUB_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
