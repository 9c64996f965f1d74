//! Interactive menu: one key press selects a target or ends the run.
//!
//! Invalid input loops back to the menu (an explicit loop, so repeated bad
//! keys cannot grow the call stack).

use std::io;

use tracing::debug;

use crate::{
    config::{LauncherConfig, TargetKind},
    console::{Console, Key},
    runlog::RunLog,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Launch(TargetKind),
    Exit,
}

/// Render the menu and block until the user picks a target or exits.
pub fn select(
    config: &LauncherConfig,
    log: &mut RunLog,
    console: &mut dyn Console,
) -> io::Result<MenuChoice> {
    loop {
        render(config, console)?;
        let key = console.read_key()?;
        log.line(&format!("input: {key}"))?;

        match key {
            Key::Char('1') => return Ok(MenuChoice::Launch(TargetKind::Launcher)),
            Key::Char('2') => return Ok(MenuChoice::Launch(TargetKind::Fose)),
            Key::Char('3') => return Ok(MenuChoice::Launch(TargetKind::ModOrganizer)),
            Key::Char('4') if config.custom_enabled() => {
                return Ok(MenuChoice::Launch(TargetKind::Custom))
            }
            Key::Escape => {
                log.line("exiting...")?;
                return Ok(MenuChoice::Exit);
            }
            other => {
                debug!(
                    target: "fallout_launcher::menu",
                    key = %other,
                    "Unrecognized menu input"
                );
                log.write_and_log(console, &format!("Unrecognized input: {{{other}}}"))?;
                console.write_line("")?;
                console.write_line("Press any key to continue...")?;
                console.read_key()?;
            }
        }
    }
}

fn render(config: &LauncherConfig, console: &mut dyn Console) -> io::Result<()> {
    console.clear_screen()?;
    console.write_line(&format!("1:   {}", config.launcher.name))?;
    console.write_line(&format!("2:   {}", config.fose.name))?;
    console.write_line(&format!("3:   {}", config.mod_organizer.name))?;
    if config.custom_enabled() {
        console.write_line(&format!("4:   {}", config.custom.name))?;
    }
    console.write_line("")?;
    console.write_line("Esc: Exit")?;
    console.write_line("")?;
    console.write("Select an option: ")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::tempdir;

    use super::*;
    use crate::{
        config::{CliOverrides, IniValues, LauncherConfig, SectionValues},
        console::testing::ScriptedConsole,
    };

    fn plain_config() -> LauncherConfig {
        LauncherConfig::resolve(None, &CliOverrides::default())
    }

    fn config_with_custom(name: &str) -> LauncherConfig {
        let ini = IniValues {
            custom: SectionValues {
                path: Some("custom.exe".to_string()),
                arguments: None,
            },
            custom_name: Some(name.to_string()),
            ..IniValues::default()
        };
        LauncherConfig::resolve(Some(&ini), &CliOverrides::default())
    }

    fn open_log(dir: &std::path::Path) -> RunLog {
        RunLog::open(&dir.join("run.log")).expect("log should open")
    }

    #[test]
    fn digit_selects_target_positionally() {
        let temp = tempdir().expect("can create temp directory");
        let mut log = open_log(temp.path());
        let mut console = ScriptedConsole::new([Key::Char('2')]);

        let choice =
            select(&plain_config(), &mut log, &mut console).expect("select should not error");

        assert_eq!(choice, MenuChoice::Launch(TargetKind::Fose));
        assert_eq!(console.clears, 1);
        assert!(console.printed("2:   FOSE"));
    }

    #[test]
    fn escape_exits() {
        let temp = tempdir().expect("can create temp directory");
        let mut log = open_log(temp.path());
        let mut console = ScriptedConsole::new([Key::Escape]);

        let choice =
            select(&plain_config(), &mut log, &mut console).expect("select should not error");

        assert_eq!(choice, MenuChoice::Exit);
    }

    #[test]
    fn custom_option_hidden_and_rejected_while_disabled() {
        let temp = tempdir().expect("can create temp directory");
        let mut log = open_log(temp.path());
        // '4' is refused, acknowledged with 'x', then '1' is accepted.
        let mut console = ScriptedConsole::new([Key::Char('4'), Key::Char('x'), Key::Char('1')]);

        let choice =
            select(&plain_config(), &mut log, &mut console).expect("select should not error");

        assert_eq!(choice, MenuChoice::Launch(TargetKind::Launcher));
        assert!(console.printed("Unrecognized input: {4}"));
        assert!(
            !console.printed("4:   Custom"),
            "disabled custom entry must not be listed"
        );
        assert_eq!(console.clears, 2, "menu re-renders after bad input");
    }

    #[test]
    fn custom_option_selectable_when_enabled() {
        let temp = tempdir().expect("can create temp directory");
        let mut log = open_log(temp.path());
        let mut console = ScriptedConsole::new([Key::Char('4')]);
        let config = config_with_custom("GECK");

        let choice = select(&config, &mut log, &mut console).expect("select should not error");

        assert_eq!(choice, MenuChoice::Launch(TargetKind::Custom));
        assert!(console.printed("4:   GECK"));
        assert_eq!(config.custom.path, PathBuf::from("custom.exe"));
    }

    #[test]
    fn bad_input_loops_until_something_valid_arrives() {
        let temp = tempdir().expect("can create temp directory");
        let mut log = open_log(temp.path());
        let mut console = ScriptedConsole::new([
            Key::Char('z'),
            Key::Other,
            Key::Enter,
            Key::Other,
            Key::Char('3'),
        ]);

        let choice =
            select(&plain_config(), &mut log, &mut console).expect("select should not error");

        assert_eq!(choice, MenuChoice::Launch(TargetKind::ModOrganizer));
        assert_eq!(console.clears, 3);
    }
}
