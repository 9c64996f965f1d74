//! Entry point for FalloutLauncher.
use std::process::ExitCode;

use fallout_launcher::{app, console::Terminal, telemetry};

fn main() -> ExitCode {
    if let Err(err) = telemetry::init_tracing() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    let mut console = Terminal;
    match app::run(&mut console) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
