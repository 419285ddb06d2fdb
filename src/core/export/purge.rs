//! Pre-export purge
//!
//! Deletes stale files of a directive's format from its purge directory
//! (recursively) before anything is exported. Best effort: a file that cannot
//! be deleted is reported and the purge moves on.

use super::report::{RunEvent, RunReporter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What a purge did
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PurgeOutcome {
    /// Files deleted, or that would be deleted in a dry run
    pub deleted: Vec<PathBuf>,

    /// Paths that could not be walked or deleted, with the reason
    pub failures: Vec<(PathBuf, String)>,
}

/// Delete every file under `directory` whose name ends with one of
/// `extensions`
///
/// Matching is a case-sensitive suffix test on the file name. Nothing outside
/// `directory` is touched. A missing directory is not an error.
pub fn purge_directory<R>(
    directory: &Path,
    extensions: &[&str],
    dry_run: bool,
    reporter: &mut R,
) -> PurgeOutcome
where
    R: RunReporter + ?Sized,
{
    let mut outcome = PurgeOutcome::default();
    if extensions.is_empty() {
        return outcome;
    }

    reporter.record(&RunEvent::PurgeStarted {
        scope: directory,
        extensions,
    });

    for entry in WalkDir::new(directory).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let not_found = e
                    .io_error()
                    .map(|io| io.kind() == io::ErrorKind::NotFound)
                    .unwrap_or(false);
                if e.depth() == 0 && not_found {
                    tracing::debug!(
                        directory = %directory.display(),
                        "Purge directory does not exist, nothing to delete"
                    );
                    break;
                }
                let path = e.path().unwrap_or(directory).to_path_buf();
                let message = e.to_string();
                reporter.record(&RunEvent::PurgeFailed {
                    path: &path,
                    error: &message,
                });
                outcome.failures.push((path, message));
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !extensions.iter().any(|ext| file_name.ends_with(ext)) {
            continue;
        }

        let path = entry.into_path();
        if dry_run {
            reporter.record(&RunEvent::FileDeleted { path: &path });
            outcome.deleted.push(path);
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => {
                reporter.record(&RunEvent::FileDeleted { path: &path });
                outcome.deleted.push(path);
            }
            Err(e) => {
                let message = e.to_string();
                reporter.record(&RunEvent::PurgeFailed {
                    path: &path,
                    error: &message,
                });
                outcome.failures.push((path, message));
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::report::MemoryReporter;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_purge_deletes_matching_files_recursively() {
        let temp_dir = TempDir::new().unwrap();
        let scope = temp_dir.path().join("step");
        touch(&scope.join("a.stp"));
        touch(&scope.join("nested/deeper/b.step"));
        touch(&scope.join("keep.stl"));
        touch(&scope.join("upper.STP"));
        touch(&temp_dir.path().join("outside.stp"));

        let mut reporter = MemoryReporter::new();
        let outcome = purge_directory(&scope, &[".stp", ".step"], false, &mut reporter);

        assert_eq!(outcome.deleted.len(), 2);
        assert!(outcome.failures.is_empty());
        assert!(!scope.join("a.stp").exists());
        assert!(!scope.join("nested/deeper/b.step").exists());
        assert!(scope.join("keep.stl").exists());
        assert!(scope.join("upper.STP").exists());
        assert!(temp_dir.path().join("outside.stp").exists());
        assert!(scope.join("nested/deeper").is_dir());
    }

    #[test]
    fn test_purge_dry_run_deletes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("part.stl"));

        let mut reporter = MemoryReporter::new();
        let outcome = purge_directory(temp_dir.path(), &[".stl"], true, &mut reporter);

        assert_eq!(outcome.deleted.len(), 1);
        assert!(temp_dir.path().join("part.stl").exists());
    }

    #[test]
    fn test_purge_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut reporter = MemoryReporter::new();

        let outcome = purge_directory(
            &temp_dir.path().join("never-created"),
            &[".sat"],
            false,
            &mut reporter,
        );

        assert_eq!(outcome, PurgeOutcome::default());
        assert_eq!(reporter.errors().count(), 0);
    }

    #[test]
    fn test_purge_without_extensions_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("a.csv"));

        let mut reporter = MemoryReporter::new();
        let outcome = purge_directory(temp_dir.path(), &[], false, &mut reporter);

        assert!(outcome.deleted.is_empty());
        assert!(reporter.lines().is_empty());
        assert!(temp_dir.path().join("a.csv").exists());
    }
}
