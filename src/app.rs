//! Run orchestration: resolve configuration, discover paths, dispatch, launch.

use std::{env, io, path::Path, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::{
    cli::LauncherArgs,
    config::{ini, AutoStart, IniStatus, LauncherConfig},
    console::Console,
    discovery,
    launch,
    menu::{self, MenuChoice},
    runlog::{RunLog, LOG_FILE},
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One full run: everything between the START and END log banners.
pub fn run(console: &mut dyn Console) -> Result<ExitCode> {
    let mut log = RunLog::open(Path::new(LOG_FILE))
        .with_context(|| format!("failed to open log file {LOG_FILE}"))?;
    log.start_banner(VERSION)?;

    // The INI comes first; command-line flags override whatever it sets.
    let ini_values = match ini::load(Path::new(ini::INI_FILE)) {
        Ok(IniStatus::NotFound) => None,
        Ok(IniStatus::TemplateCreated) => {
            log.write_and_log(console, &format!("Created INI template at {}", ini::INI_FILE))?;
            log.end_banner()?;
            return Ok(ExitCode::SUCCESS);
        }
        Ok(IniStatus::Loaded(values)) => Some(values),
        Err(err) => {
            log.write_and_log(console, &err.to_string())?;
            wait_for_acknowledgement(console)?;
            log.end_banner()?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let raw_args: Vec<String> = env::args().skip(1).collect();
    if !raw_args.is_empty() {
        log.line(&format!("arguments: {}", raw_args.join(" ")))?;
    }

    let overrides = match LauncherArgs::try_parse() {
        Ok(args) => args.into_overrides(),
        Err(err) => {
            let rendered = err.to_string();
            let summary = rendered.lines().next().unwrap_or("invalid arguments");
            log.line(&format!("{summary}; exiting without launching"))?;
            console.write_line(&rendered)?;
            wait_for_acknowledgement(console)?;
            log.end_banner()?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut config = LauncherConfig::resolve(ini_values.as_ref(), &overrides);
    write_config_block(&config, &mut log)?;
    apply_discovery(&mut config, &mut log)?;
    let config = config;

    dispatch(&config, &mut log, console)?;

    log.end_banner()?;
    Ok(ExitCode::SUCCESS)
}

/// Log the resolved configuration and which targets exist on disk.
fn write_config_block(config: &LauncherConfig, log: &mut RunLog) -> io::Result<()> {
    for target in [&config.launcher, &config.fose, &config.mod_organizer] {
        log.line(&target.name)?;
        log.line(&format!("    path: {}", target.path.display()))?;
        log.line(&format!("    arguments: {}", target.arguments))?;
    }
    log.line(&config.custom.name)?;
    log.line(&format!("    name: {}", config.custom.name))?;
    log.line(&format!("    path: {}", config.custom.path.display()))?;
    log.line(&format!("    arguments: {}", config.custom.arguments))?;
    log.line("-")?;

    for target in [&config.launcher, &config.fose, &config.mod_organizer] {
        log.line(&format!("{} found: {}", target.name, target.exists()))?;
    }
    log.line(&format!("custom option enabled: {}", config.custom_enabled()))?;
    if config.custom_enabled() {
        log.line(&format!("custom option found: {}", config.custom.exists()))?;
    }
    log.line("-")
}

/// Replace still-default paths with whatever the working directory offers.
fn apply_discovery(config: &mut LauncherConfig, log: &mut RunLog) -> io::Result<()> {
    let cwd = env::current_dir().unwrap_or_else(|_| ".".into());

    if config.launcher_path_is_default() {
        if let Some(found) = discovery::find_launcher(&cwd) {
            log.line(&format!(
                "found {} at: {}",
                config.launcher.name,
                found.display()
            ))?;
            config.launcher.path = found;
        }
    }

    if config.mod_organizer_path_is_default() {
        if let Some(found) = discovery::find_mod_organizer(&cwd) {
            log.line(&format!(
                "found {} at: {}",
                config.mod_organizer.name,
                found.display()
            ))?;
            config.mod_organizer.path = found;
        }
    }

    Ok(())
}

/// Pick a target via auto-start or the menu, then launch it.
fn dispatch(config: &LauncherConfig, log: &mut RunLog, console: &mut dyn Console) -> io::Result<()> {
    let kind = match config.auto_start {
        Some(AutoStart::Custom) if !config.custom_enabled() => {
            log.write_and_log(
                console,
                &format!("{} was selected, but its path is empty.", config.custom.name),
            )?;
            wait_for_acknowledgement(console)?;
            return Ok(());
        }
        Some(auto) => {
            info!(
                target: "fallout_launcher::app",
                auto_start = ?auto,
                "Auto-start selected; menu bypassed"
            );
            auto.kind()
        }
        None => match menu::select(config, log, console)? {
            MenuChoice::Launch(kind) => kind,
            MenuChoice::Exit => return Ok(()),
        },
    };

    launch::start(config.target(kind), launch::QUIET, log, console)?;
    Ok(())
}

fn wait_for_acknowledgement(console: &mut dyn Console) -> io::Result<()> {
    console.write_line("")?;
    console.write_line("Press any key to exit...")?;
    console.read_key().map(drop)
}
