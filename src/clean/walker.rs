//! Bottom-up tree walker.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use walkdir::{DirEntry, WalkDir};

use crate::clean::stats::CleanStats;
use crate::config::Config;
use crate::error::Result;
use crate::fs::{
    entry_exists, resolve_and_rename, resolve_candidate, EntryKind, Normalizer, RenameOutcome,
};
use crate::output::{create_spinner, print_error, print_rename, print_skipped};

/// Clean every file and folder name below `root`.
///
/// Entries are visited deepest first, so a folder is renamed only after
/// everything inside it. Within one folder, files come before subfolders.
/// Failures on single entries are reported and counted; only a failure to
/// read `root` itself aborts the run.
pub fn clean_tree(root: &Path, config: &Config, progress: &ProgressBar) -> Result<CleanStats> {
    let options = &config.options;
    let normalizer = Normalizer::new(options.sentinel.clone());
    let mut stats = CleanStats::default();

    let spinner = if progress.is_hidden() {
        ProgressBar::hidden()
    } else {
        create_spinner(&format!("Scanning {}", root.display()))
    };
    // Listing everything up front keeps renames from disturbing open
    // directory handles.
    let entries = scan_tree(root, options.follow_links, &mut stats);
    spinner.finish_and_clear();
    let entries = entries?;
    tracing::info!("Found {} entries below {}", entries.len(), root.display());

    progress.set_length(entries.len() as u64);

    let mut planned: HashSet<PathBuf> = HashSet::new();

    for entry in &entries {
        progress.inc(1);

        let kind = entry_kind(entry);
        let path = entry.path();
        let clean = normalizer.normalize_entry(entry.file_name(), kind);

        let outcome = if options.dry_run {
            plan_rename(path, &clean, kind, &mut planned)
        } else {
            resolve_and_rename(path, &clean, kind)
        };

        match outcome {
            Ok(RenameOutcome::Renamed(target)) => {
                tracing::debug!("{} -> {}", path.display(), target.display());
                stats.record_renamed(kind);
                if options.show_renames {
                    progress.suspend(|| print_rename(kind, path, &target, options.dry_run));
                }
            }
            Ok(RenameOutcome::Unchanged(_)) => {
                stats.record_skipped(kind);
                if options.show_skipped {
                    progress.suspend(|| print_skipped(kind, path));
                }
            }
            Err(e) => {
                tracing::warn!("Failed to rename {}: {}", path.display(), e);
                stats.record_error();
                progress.suspend(|| print_error(&e));
            }
        }
    }

    Ok(stats)
}

/// List all entries below `root` in post-order, files before folders within
/// each folder, then by name.
///
/// Unreadable entries are counted as errors and skipped.
fn scan_tree(root: &Path, follow_links: bool, stats: &mut CleanStats) -> Result<Vec<DirEntry>> {
    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(follow_links)
        .contents_first(true)
        .sort_by(visit_order);

    let mut entries = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                stats.record_error();
            }
        }
    }

    Ok(entries)
}

/// Sibling order: files first, then folders, each by name.
fn visit_order(a: &DirEntry, b: &DirEntry) -> Ordering {
    let is_folder = |e: &DirEntry| entry_kind(e) == EntryKind::Folder;
    is_folder(a)
        .cmp(&is_folder(b))
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Symlinks to folders count as folders but are never descended into unless
/// links are followed.
fn entry_kind(entry: &DirEntry) -> EntryKind {
    if entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir()) {
        EntryKind::Folder
    } else {
        EntryKind::File
    }
}

/// Resolve a target without touching the tree, treating earlier planned
/// targets as taken.
fn plan_rename(
    path: &Path,
    clean: &OsStr,
    kind: EntryKind,
    planned: &mut HashSet<PathBuf>,
) -> Result<RenameOutcome> {
    let target = resolve_candidate(path, clean, kind, |p: &Path| {
        entry_exists(p) || planned.contains(p)
    });
    match target {
        Some(target) => {
            planned.insert(target.clone());
            Ok(RenameOutcome::Renamed(target))
        }
        None => Ok(RenameOutcome::Unchanged(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn quiet_config() -> Config {
        let mut config = Config::default();
        config.options.show_renames = false;
        config
    }

    fn names_in(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_renames_nested_tree_bottom_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("Data & Settings").join("backup (old)");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("data#1.bak"), "7").unwrap();
        fs::write(dir.path().join("Data & Settings").join("user.config"), "6").unwrap();

        let stats = clean_tree(dir.path(), &quiet_config(), &ProgressBar::hidden()).unwrap();

        let cleaned = dir.path().join("Data_Settings").join("backup_old");
        assert_eq!(fs::read_to_string(cleaned.join("data_1.bak")).unwrap(), "7");
        assert!(dir.path().join("Data_Settings").join("user.config").exists());
        assert_eq!(
            stats,
            CleanStats {
                files_renamed: 1,
                files_skipped: 1,
                folders_renamed: 2,
                folders_skipped: 0,
                errors: 0,
            }
        );
    }

    #[test]
    fn test_converging_names_get_distinct_suffixes() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["my-file.txt", "my@file.txt", "my_file.txt"] {
            fs::write(dir.path().join(name), name).unwrap();
        }

        let stats = clean_tree(dir.path(), &quiet_config(), &ProgressBar::hidden()).unwrap();

        assert_eq!(
            names_in(dir.path()),
            vec!["my_file.txt", "my_file_1.txt", "my_file_2.txt"]
        );
        // the already-clean file keeps its content
        assert_eq!(
            fs::read_to_string(dir.path().join("my_file.txt")).unwrap(),
            "my_file.txt"
        );
        assert_eq!(stats.files_renamed, 2);
        assert_eq!(stats.files_skipped, 1);
    }

    #[test]
    fn test_spaced_file_name_is_already_clean() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["my file.txt", "my-file.txt", "my_file.txt"] {
            fs::write(dir.path().join(name), name).unwrap();
        }

        let stats = clean_tree(dir.path(), &quiet_config(), &ProgressBar::hidden()).unwrap();

        assert_eq!(
            names_in(dir.path()),
            vec!["my file.txt", "my_file.txt", "my_file_1.txt"]
        );
        assert_eq!(stats.files_renamed, 1);
        assert_eq!(stats.files_skipped, 2);
    }

    #[test]
    fn test_clean_tree_is_noop_on_clean_tree() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs").join("read me.txt"), "x").unwrap();

        let stats = clean_tree(dir.path(), &quiet_config(), &ProgressBar::hidden()).unwrap();

        assert_eq!(stats.total_renamed(), 0);
        assert_eq!(stats.total_skipped(), 2);
        assert!(dir.path().join("docs").join("read me.txt").exists());
    }

    #[test]
    fn test_dry_run_leaves_tree_untouched() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a-b.txt"), "1").unwrap();
        fs::write(dir.path().join("a@b.txt"), "2").unwrap();
        fs::create_dir(dir.path().join("x y")).unwrap();

        let mut config = quiet_config();
        config.options.dry_run = true;
        let stats = clean_tree(dir.path(), &config, &ProgressBar::hidden()).unwrap();

        assert_eq!(names_in(dir.path()), vec!["a-b.txt", "a@b.txt", "x y"]);
        assert_eq!(stats.files_renamed, 2);
        assert_eq!(stats.folders_renamed, 1);
    }

    #[test]
    fn test_dry_run_plans_distinct_targets() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a-b.txt");
        let second = dir.path().join("a@b.txt");
        let mut planned = HashSet::new();

        let a = plan_rename(&first, OsStr::new("a_b.txt"), EntryKind::File, &mut planned).unwrap();
        let b = plan_rename(&second, OsStr::new("a_b.txt"), EntryKind::File, &mut planned).unwrap();

        assert_eq!(a.path(), dir.path().join("a_b.txt"));
        assert_eq!(b.path(), dir.path().join("a_b_1.txt"));
    }

    #[test]
    fn test_custom_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("@#$%.txt"), "x").unwrap();

        let mut config = quiet_config();
        config.options.sentinel = "blank".to_string();
        clean_tree(dir.path(), &config, &ProgressBar::hidden()).unwrap();

        assert_eq!(names_in(dir.path()), vec!["blank.txt"]);
    }

    #[test]
    fn test_file_wins_collision_with_sibling_folder() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("a b")).unwrap();
        fs::write(dir.path().join("a-b"), "file").unwrap();

        let stats = clean_tree(dir.path(), &quiet_config(), &ProgressBar::hidden()).unwrap();

        assert!(dir.path().join("a_b").is_file());
        assert!(dir.path().join("a_b_1").is_dir());
        assert_eq!(stats.files_renamed, 1);
        assert_eq!(stats.folders_renamed, 1);
    }

    #[test]
    fn test_files_listed_before_folders() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        fs::write(dir.path().join("a").join("inner.txt"), "x").unwrap();
        fs::write(dir.path().join("b.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("c")).unwrap();

        let mut stats = CleanStats::default();
        let entries = scan_tree(dir.path(), false, &mut stats).unwrap();
        let names: Vec<String> = entries
            .iter()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["b.txt", "inner.txt", "a", "c"]);
    }

    #[test]
    fn test_progress_length_set_after_scan() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("x.txt"), "x").unwrap();
        fs::write(dir.path().join("y.txt"), "y").unwrap();

        let progress = ProgressBar::hidden();
        clean_tree(dir.path(), &quiet_config(), &progress).unwrap();

        assert_eq!(progress.length(), Some(3));
        assert_eq!(progress.position(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("a_b.txt")).unwrap();
        fs::write(dir.path().join("a-b.txt"), "x").unwrap();

        let stats = clean_tree(dir.path(), &quiet_config(), &ProgressBar::hidden()).unwrap();

        assert_eq!(names_in(dir.path()), vec!["a_b.txt", "a_b_1.txt"]);
        assert!(fs::symlink_metadata(dir.path().join("a_b.txt"))
            .unwrap()
            .file_type()
            .is_symlink());
        assert_eq!(stats.files_renamed, 1);
        assert_eq!(stats.files_skipped, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_extension_survives_rename() {
        use std::ffi::OsString;
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"a-b.t\xffx")), "x").unwrap();

        let stats = clean_tree(dir.path(), &quiet_config(), &ProgressBar::hidden()).unwrap();

        let names: Vec<Vec<u8>> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| OsString::into_vec(e.unwrap().file_name()))
            .collect();
        assert_eq!(names, vec![b"a_b.t\xffx".to_vec()]);
        assert_eq!(stats.files_renamed, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_rename_failure_is_counted_and_walk_continues() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("bad#name.txt"), "x").unwrap();
        fs::write(dir.path().join("other-file.txt"), "y").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        // privileged users ignore directory permissions
        let canary = locked.join("canary");
        if fs::write(&canary, "").is_ok() {
            fs::remove_file(&canary).unwrap();
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let stats = clean_tree(dir.path(), &quiet_config(), &ProgressBar::hidden()).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(stats.errors, 1);
        assert_eq!(stats.files_renamed, 1);
        assert!(locked.join("bad#name.txt").exists());
        assert!(dir.path().join("other_file.txt").exists());
    }
}
