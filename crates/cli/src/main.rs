use std::process::ExitCode;

fn main() -> ExitCode {
    agenthub_cli::run()
}
