//! Typed launcher configuration and layered resolution.
//!
//! Values are resolved in one pass: compiled-in defaults, then the INI
//! settings file, then command-line overrides. The result is a single
//! `LauncherConfig` that the rest of the program treats as immutable.

use std::path::{Path, PathBuf};

use tracing::debug;

pub mod ini;

pub use ini::{IniStatus, IniValues, SectionValues, INI_FILE};

pub const DEFAULT_LAUNCHER_PATH: &str = "FalloutLauncher_ORG.exe";
pub const DEFAULT_FOSE_PATH: &str = "fose_loader.exe";
pub const DEFAULT_MOD_ORGANIZER_PATH: &str = "Mod Organizer/ModOrganizer.exe";
pub const DEFAULT_CUSTOM_NAME: &str = "Custom";

pub const LAUNCHER_NAME: &str = "Fallout 3 Launcher";
pub const FOSE_NAME: &str = "FOSE";
pub const MOD_ORGANIZER_NAME: &str = "Mod Organizer";

/// One of the four launchable entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Launcher,
    Fose,
    ModOrganizer,
    Custom,
}

/// Target selected by `--start`, bypassing the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoStart {
    Launcher,
    Fose,
    ModOrganizer,
    Custom,
}

impl AutoStart {
    pub fn kind(self) -> TargetKind {
        match self {
            AutoStart::Launcher => TargetKind::Launcher,
            AutoStart::Fose => TargetKind::Fose,
            AutoStart::ModOrganizer => TargetKind::ModOrganizer,
            AutoStart::Custom => TargetKind::Custom,
        }
    }
}

/// Resolved launch entry: display name, executable path, argument string.
///
/// `path` and `arguments` are always present; empty means "not configured",
/// never absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetConfig {
    pub name: String,
    pub path: PathBuf,
    pub arguments: String,
}

impl TargetConfig {
    fn with_defaults(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: PathBuf::from(path),
            arguments: String::new(),
        }
    }

    /// Whether the configured path currently points at an existing file.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

/// Path and auto-start overrides taken from the command line.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub launcher_path: Option<PathBuf>,
    pub fose_path: Option<PathBuf>,
    pub mod_organizer_path: Option<PathBuf>,
    pub auto_start: Option<AutoStart>,
}

/// The full resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    pub launcher: TargetConfig,
    pub fose: TargetConfig,
    pub mod_organizer: TargetConfig,
    pub custom: TargetConfig,
    pub auto_start: Option<AutoStart>,
}

impl LauncherConfig {
    /// Apply INI values over the defaults, then CLI overrides over both.
    pub fn resolve(ini: Option<&IniValues>, cli: &CliOverrides) -> Self {
        let mut config = Self {
            launcher: TargetConfig::with_defaults(LAUNCHER_NAME, DEFAULT_LAUNCHER_PATH),
            fose: TargetConfig::with_defaults(FOSE_NAME, DEFAULT_FOSE_PATH),
            mod_organizer: TargetConfig::with_defaults(
                MOD_ORGANIZER_NAME,
                DEFAULT_MOD_ORGANIZER_PATH,
            ),
            custom: TargetConfig::with_defaults(DEFAULT_CUSTOM_NAME, ""),
            auto_start: None,
        };

        if let Some(values) = ini {
            apply_section(&mut config.launcher, &values.launcher);
            apply_section(&mut config.fose, &values.fose);
            apply_section(&mut config.mod_organizer, &values.mod_organizer);
            apply_section(&mut config.custom, &values.custom);
            if let Some(name) = &values.custom_name {
                config.custom.name = name.clone();
            }
        }

        if let Some(path) = &cli.launcher_path {
            config.launcher.path = path.clone();
        }
        if let Some(path) = &cli.fose_path {
            config.fose.path = path.clone();
        }
        if let Some(path) = &cli.mod_organizer_path {
            config.mod_organizer.path = path.clone();
        }
        config.auto_start = cli.auto_start;

        debug!(
            target: "fallout_launcher::config",
            launcher = %config.launcher.path.display(),
            fose = %config.fose.path.display(),
            mod_organizer = %config.mod_organizer.path.display(),
            custom = %config.custom.path.display(),
            auto_start = ?config.auto_start,
            "Resolved configuration"
        );
        config
    }

    pub fn target(&self, kind: TargetKind) -> &TargetConfig {
        match kind {
            TargetKind::Launcher => &self.launcher,
            TargetKind::Fose => &self.fose,
            TargetKind::ModOrganizer => &self.mod_organizer,
            TargetKind::Custom => &self.custom,
        }
    }

    /// The custom entry takes part in the menu only when a path is set.
    pub fn custom_enabled(&self) -> bool {
        !self.custom.path.as_os_str().is_empty()
    }

    /// True while the launcher path was never overridden, so auto-discovery
    /// may replace it.
    pub fn launcher_path_is_default(&self) -> bool {
        self.launcher.path == Path::new(DEFAULT_LAUNCHER_PATH)
    }

    /// True while the Mod Organizer path was never overridden.
    pub fn mod_organizer_path_is_default(&self) -> bool {
        self.mod_organizer.path == Path::new(DEFAULT_MOD_ORGANIZER_PATH)
    }
}

fn apply_section(target: &mut TargetConfig, values: &SectionValues) {
    if let Some(path) = &values.path {
        target.path = PathBuf::from(path);
    }
    if let Some(arguments) = &values.arguments {
        target.arguments = arguments.clone();
    }
}
