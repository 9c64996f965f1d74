//! `FalloutLauncher.ini`: optional user settings and the first-run template.
//!
//! An existing but blank file is the first-run signal: a skeleton with all
//! four section headers is written for the user to fill in, and the caller
//! exits without launching anything.

use std::{fs, path::Path};

use ini::{EscapePolicy, Ini, ParseOption};
use tracing::{debug, info};

use crate::errors::ConfigError;

pub const INI_FILE: &str = "FalloutLauncher.ini";

pub const SECTION_LAUNCHER: &str = "Fallout Launcher";
pub const SECTION_FOSE: &str = "FOSE";
pub const SECTION_MOD_ORGANIZER: &str = "Mod Organizer";
pub const SECTION_CUSTOM: &str = "Custom";

const KEY_PATH: &str = "Path";
const KEY_ARGUMENTS: &str = "Arguments";
const KEY_NAME: &str = "Name";

/// `Path`/`Arguments` pair of one section. Blank entries count as unset so
/// the untouched template keeps the compiled-in defaults alive.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SectionValues {
    pub path: Option<String>,
    pub arguments: Option<String>,
}

/// Everything the settings file can contribute.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IniValues {
    pub launcher: SectionValues,
    pub fose: SectionValues,
    pub mod_organizer: SectionValues,
    pub custom: SectionValues,
    pub custom_name: Option<String>,
}

/// Outcome of looking for the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IniStatus {
    /// No file; defaults stand.
    NotFound,
    /// The file existed but was blank; a template was written and the run
    /// must stop before launching anything.
    TemplateCreated,
    Loaded(IniValues),
}

/// Load the settings file, creating the template when it exists empty.
pub fn load(path: &Path) -> Result<IniStatus, ConfigError> {
    if !path.exists() {
        debug!(
            target: "fallout_launcher::config",
            path = %path.display(),
            "No settings file; using compiled-in defaults"
        );
        return Ok(IniStatus::NotFound);
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::IniRead {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        write_template(path)?;
        return Ok(IniStatus::TemplateCreated);
    }

    let document =
        Ini::load_from_str_opt(&content, parse_options()).map_err(|source| {
            ConfigError::IniParse {
                path: path.to_path_buf(),
                source,
            }
        })?;

    let values = collect_values(&document);
    info!(
        target: "fallout_launcher::config",
        path = %path.display(),
        "Settings file loaded"
    );
    Ok(IniStatus::Loaded(values))
}

/// Write the skeleton INI the user fills in on first run.
pub fn write_template(path: &Path) -> Result<(), ConfigError> {
    let mut template = Ini::new();
    template
        .with_section(Some(SECTION_LAUNCHER))
        .set(KEY_PATH, "")
        .set(KEY_ARGUMENTS, "");
    template
        .with_section(Some(SECTION_FOSE))
        .set(KEY_PATH, "")
        .set(KEY_ARGUMENTS, "");
    template
        .with_section(Some(SECTION_MOD_ORGANIZER))
        .set(KEY_PATH, "")
        .set(KEY_ARGUMENTS, "");
    template
        .with_section(Some(SECTION_CUSTOM))
        .set(KEY_NAME, "")
        .set(KEY_PATH, "")
        .set(KEY_ARGUMENTS, "");

    template
        .write_to_file_policy(path, EscapePolicy::Nothing)
        .map_err(|source| ConfigError::TemplateWrite {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        target: "fallout_launcher::config",
        path = %path.display(),
        "Created settings template"
    );
    Ok(())
}

// Escapes stay disabled so Windows paths survive a load/save round-trip.
fn parse_options() -> ParseOption {
    ParseOption {
        enabled_escape: false,
        ..ParseOption::default()
    }
}

fn collect_values(document: &Ini) -> IniValues {
    IniValues {
        launcher: section_values(document, SECTION_LAUNCHER),
        fose: section_values(document, SECTION_FOSE),
        mod_organizer: section_values(document, SECTION_MOD_ORGANIZER),
        custom: section_values(document, SECTION_CUSTOM),
        custom_name: document
            .section(Some(SECTION_CUSTOM))
            .and_then(|properties| non_empty(properties.get(KEY_NAME))),
    }
}

fn section_values(document: &Ini, section: &str) -> SectionValues {
    match document.section(Some(section)) {
        Some(properties) => SectionValues {
            path: non_empty(properties.get(KEY_PATH)),
            arguments: non_empty(properties.get(KEY_ARGUMENTS)),
        },
        None => SectionValues::default(),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
}
