//! Best-effort auto-discovery of target executables.
//!
//! Runs only for paths still at their compiled-in defaults. Misses and scan
//! errors fall back to the default path; nothing here ever fails the run.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

/// Launcher candidates below this size are installer stubs and are skipped.
pub const MIN_LAUNCHER_SIZE: u64 = 1_000_000;

/// Scan `dir` (non-recursively) for a `*Launcher*.exe` of plausible size.
pub fn find_launcher(dir: &Path) -> Option<PathBuf> {
    for path in sorted_paths(dir) {
        if !path.is_file() || !name_matches(&path, &["launcher"], true) {
            continue;
        }
        match fs::metadata(&path) {
            Ok(metadata) if metadata.len() >= MIN_LAUNCHER_SIZE => {
                debug!(
                    target: "fallout_launcher::discovery",
                    path = %path.display(),
                    size = metadata.len(),
                    "Launcher candidate accepted"
                );
                return Some(path);
            }
            _ => {
                debug!(
                    target: "fallout_launcher::discovery",
                    path = %path.display(),
                    "Launcher candidate skipped (undersized or unreadable)"
                );
            }
        }
    }
    None
}

/// Scan `dir` for a `*Mod*Organizer*` subdirectory holding a matching `.exe`.
pub fn find_mod_organizer(dir: &Path) -> Option<PathBuf> {
    for subdir in sorted_paths(dir) {
        if !subdir.is_dir() || !name_matches(&subdir, &["mod", "organizer"], false) {
            continue;
        }
        for file in sorted_paths(&subdir) {
            if file.is_file() && name_matches(&file, &["mod", "organizer"], true) {
                debug!(
                    target: "fallout_launcher::discovery",
                    path = %file.display(),
                    "Mod Organizer executable accepted"
                );
                return Some(file);
            }
        }
    }
    None
}

// Sorted so discovery picks the same "first match" on every platform.
fn sorted_paths(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();
    paths.sort();
    paths
}

/// Ordered, case-insensitive substring match on the file name, optionally
/// requiring an `.exe` suffix.
fn name_matches(path: &Path, parts: &[&str], require_exe: bool) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    let name = name.to_ascii_lowercase();
    if require_exe && !name.ends_with(".exe") {
        return false;
    }

    let mut rest = name.as_str();
    for part in parts {
        match rest.find(part) {
            Some(at) => rest = &rest[at + part.len()..],
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use tempfile::tempdir;

    use super::*;

    fn touch_with_size(path: &Path, size: u64) {
        let file = File::create(path).expect("can create file");
        file.set_len(size).expect("can size file");
    }

    #[test]
    fn launcher_of_plausible_size_is_found() {
        let temp = tempdir().expect("can create temp directory");
        let expected = temp.path().join("SomeLauncher.exe");
        touch_with_size(&expected, MIN_LAUNCHER_SIZE);

        assert_eq!(find_launcher(temp.path()), Some(expected));
    }

    #[test]
    fn undersized_launcher_is_skipped() {
        let temp = tempdir().expect("can create temp directory");
        touch_with_size(&temp.path().join("DecoyLauncher.exe"), MIN_LAUNCHER_SIZE - 1);

        assert_eq!(find_launcher(temp.path()), None);
    }

    #[test]
    fn undersized_candidate_does_not_shadow_a_real_one() {
        let temp = tempdir().expect("can create temp directory");
        // Sorts before the real launcher, so the scan must keep going.
        touch_with_size(&temp.path().join("AAALauncher.exe"), 10);
        let expected = temp.path().join("FalloutLauncher.exe");
        touch_with_size(&expected, MIN_LAUNCHER_SIZE + 5);

        assert_eq!(find_launcher(temp.path()), Some(expected));
    }

    #[test]
    fn launcher_match_is_case_insensitive_and_requires_exe() {
        let temp = tempdir().expect("can create temp directory");
        touch_with_size(&temp.path().join("notes-launcher.txt"), MIN_LAUNCHER_SIZE);
        let expected = temp.path().join("FALLOUTLAUNCHER.EXE");
        touch_with_size(&expected, MIN_LAUNCHER_SIZE);

        assert_eq!(find_launcher(temp.path()), Some(expected));
    }

    #[test]
    fn mod_organizer_is_found_inside_matching_directory() {
        let temp = tempdir().expect("can create temp directory");
        let mo_dir = temp.path().join("Mod Organizer 2");
        fs::create_dir(&mo_dir).expect("can create directory");
        let expected = mo_dir.join("ModOrganizer.exe");
        touch_with_size(&expected, 0);

        assert_eq!(find_mod_organizer(temp.path()), Some(expected));
    }

    #[test]
    fn directory_without_matching_exe_is_passed_over() {
        let temp = tempdir().expect("can create temp directory");
        let empty = temp.path().join("Mod Organizer");
        fs::create_dir(&empty).expect("can create directory");
        touch_with_size(&empty.join("readme.txt"), 0);
        let second = temp.path().join("ModOrganizer 2");
        fs::create_dir(&second).expect("can create directory");
        let expected = second.join("modorganizer.exe");
        touch_with_size(&expected, 0);

        assert_eq!(find_mod_organizer(temp.path()), Some(expected));
    }

    #[test]
    fn missing_directory_is_a_silent_miss() {
        assert_eq!(find_launcher(Path::new("does/not/exist")), None);
        assert_eq!(find_mod_organizer(Path::new("does/not/exist")), None);
    }

    #[test]
    fn name_matching_requires_ordered_parts() {
        assert!(name_matches(
            Path::new("Mod Organizer 2"),
            &["mod", "organizer"],
            false
        ));
        assert!(!name_matches(
            Path::new("Organizer Mod"),
            &["mod", "organizer"],
            false
        ));
        assert!(!name_matches(
            Path::new("ModOrganizer.dll"),
            &["mod", "organizer"],
            true
        ));
    }
}
