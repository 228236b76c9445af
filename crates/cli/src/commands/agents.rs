use agenthub_core::domain::agent::AgentKind;

pub fn run() -> String {
    let mut lines = vec!["available agents:".to_string()];
    for kind in AgentKind::ALL {
        lines.push(format!(
            "- {} ({}): {}",
            kind.as_str(),
            kind.display_name(),
            kind.description()
        ));
        for suggestion in kind.suggestions() {
            lines.push(format!("    • {suggestion}"));
        }
    }
    lines.join("\n")
}
