//! CLI argument definitions and conversion into configuration overrides.
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{AutoStart, CliOverrides};

/// Command-line arguments.
///
/// Any flag the parser rejects, including a bad `--start` value, is treated
/// by the caller as a fatal configuration error: logged, acknowledged with a
/// key press, and the run ends without launching anything.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fallout-launcher",
    version,
    about = "Menu front-end for Fallout 3 launch targets",
    long_about = None
)]
pub struct LauncherArgs {
    /// Path to the FOSE loader executable.
    #[arg(long = "fose", value_name = "PATH")]
    pub fose: Option<PathBuf>,
    /// Path to the vanilla Fallout 3 launcher executable.
    #[arg(long = "launcher", value_name = "PATH")]
    pub launcher: Option<PathBuf>,
    /// Path to the Mod Organizer executable.
    #[arg(long = "mo", value_name = "PATH")]
    pub mo: Option<PathBuf>,
    /// Skip the menu and start this target immediately.
    #[arg(long = "start", value_enum, value_name = "TARGET")]
    pub start: Option<AutoStartArg>,
}

/// `--start` values as they appear on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AutoStartArg {
    Launcher,
    Fose,
    Mo,
    Custom,
}

impl From<AutoStartArg> for AutoStart {
    fn from(value: AutoStartArg) -> Self {
        match value {
            AutoStartArg::Launcher => AutoStart::Launcher,
            AutoStartArg::Fose => AutoStart::Fose,
            AutoStartArg::Mo => AutoStart::ModOrganizer,
            AutoStartArg::Custom => AutoStart::Custom,
        }
    }
}

impl LauncherArgs {
    pub fn into_overrides(self) -> CliOverrides {
        CliOverrides {
            launcher_path: self.launcher,
            fose_path: self.fose,
            mod_organizer_path: self.mo,
            auto_start: self.start.map(AutoStart::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;

    use super::*;

    #[test]
    fn path_flags_consume_one_value_each() {
        let args = LauncherArgs::try_parse_from([
            "fallout-launcher",
            "--fose",
            "fose.exe",
            "--launcher",
            "launcher.exe",
            "--mo",
            "mo.exe",
        ])
        .expect("flags should parse");

        let overrides = args.into_overrides();
        assert_eq!(overrides.fose_path.as_deref(), Some(Path::new("fose.exe")));
        assert_eq!(
            overrides.launcher_path.as_deref(),
            Some(Path::new("launcher.exe"))
        );
        assert_eq!(
            overrides.mod_organizer_path.as_deref(),
            Some(Path::new("mo.exe"))
        );
        assert!(overrides.auto_start.is_none());
    }

    #[test]
    fn start_flag_selects_auto_start_target() {
        let args = LauncherArgs::try_parse_from(["fallout-launcher", "--start", "mo"])
            .expect("--start mo should parse");

        assert_eq!(
            args.into_overrides().auto_start,
            Some(AutoStart::ModOrganizer)
        );
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let error = LauncherArgs::try_parse_from(["fallout-launcher", "--bogus", "x"])
            .expect_err("unknown flags must be rejected");

        assert!(error.to_string().contains("--bogus"), "{error}");
    }

    #[test]
    fn unknown_start_value_is_rejected() {
        LauncherArgs::try_parse_from(["fallout-launcher", "--start", "bogus"])
            .expect_err("bad --start values follow the same fatal path as unknown flags");
    }

    #[test]
    fn flag_missing_its_value_is_rejected() {
        LauncherArgs::try_parse_from(["fallout-launcher", "--launcher"])
            .expect_err("--launcher requires a path");
    }
}
