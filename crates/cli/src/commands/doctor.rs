use std::path::Path;

use agenthub_core::config::{AppConfig, ConfigError};
use agenthub_core::data::{self, DataOrigin};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Warn,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

/// Returns the rendered report and whether every check passed or only warned.
pub fn run(loaded: &Result<AppConfig, ConfigError>, json_output: bool) -> (String, bool) {
    let report = build_report(loaded);
    let healthy = report.overall_status != CheckStatus::Fail;

    if json_output {
        let output = serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                concat!(
                    "{{\"overall_status\":\"fail\",",
                    "\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}"
                ),
                escape_json(&error.to_string())
            )
        });
        return (output, healthy);
    }

    (render_human(&report), healthy)
}

const DATA_CHECKS: [&str; 3] = ["faqs_data", "products_data", "templates_data"];

fn build_report(loaded: &Result<AppConfig, ConfigError>) -> DoctorReport {
    let mut checks = Vec::new();

    match loaded {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            let faqs = data::load_faqs(&config.data.faqs_path);
            checks.push(check_data(
                "faqs_data",
                &config.data.faqs_path,
                faqs.origin,
                faqs.value.len(),
            ));
            let catalog = data::load_catalog(&config.data.products_path);
            checks.push(check_data(
                "products_data",
                &config.data.products_path,
                catalog.origin,
                catalog.value.len(),
            ));
            let templates = data::load_templates(&config.data.templates_path);
            checks.push(check_data(
                "templates_data",
                &config.data.templates_path,
                templates.origin,
                templates.value.categories().count(),
            ));
            checks.push(check_export_dir(&config.session.export_dir));
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            for name in DATA_CHECKS.into_iter().chain(["export_dir"]) {
                checks.push(DoctorCheck {
                    name,
                    status: CheckStatus::Skipped,
                    details: "skipped because configuration did not load".to_string(),
                });
            }
        }
    }

    let failed = checks.iter().any(|check| check.status == CheckStatus::Fail);
    let warned = checks.iter().any(|check| check.status == CheckStatus::Warn);
    let (overall_status, summary) = match (failed, warned) {
        (true, _) => (CheckStatus::Fail, "doctor: one or more readiness checks failed"),
        (false, true) => (CheckStatus::Warn, "doctor: ready, running on built-in fallbacks"),
        (false, false) => (CheckStatus::Pass, "doctor: all readiness checks passed"),
    };

    DoctorReport { overall_status, summary: summary.to_string(), checks }
}

fn check_data(name: &'static str, path: &Path, origin: DataOrigin, entries: usize) -> DoctorCheck {
    match origin {
        DataOrigin::File { .. } => DoctorCheck {
            name,
            status: CheckStatus::Pass,
            details: format!("loaded `{}` ({entries} entries)", path.display()),
        },
        DataOrigin::Builtin { reason } => DoctorCheck {
            name,
            status: CheckStatus::Warn,
            details: format!("`{}` is {reason}; using built-in defaults", path.display()),
        },
    }
}

fn check_export_dir(dir: &Path) -> DoctorCheck {
    if dir.is_dir() {
        DoctorCheck {
            name: "export_dir",
            status: CheckStatus::Pass,
            details: format!("`{}` exists", dir.display()),
        }
    } else {
        DoctorCheck {
            name: "export_dir",
            status: CheckStatus::Warn,
            details: format!(
                "`{}` does not exist yet; it is created on first export",
                dir.display()
            ),
        }
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Warn => "warn",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
