//! Run reporting
//!
//! The engine never logs directly. It describes what happens as
//! [`RunEvent`]s and hands them to a [`RunReporter`], which the caller picks:
//! [`TracingReporter`] for real runs, [`MemoryReporter`] to capture the log
//! in tests.

use super::engine::RunPhase;
use super::summary::ExportSummary;
use crate::domain::{ComponentId, ComponentKind, ExportFormat};
use std::fmt;
use std::path::Path;

/// Something worth reporting during a run
#[derive(Debug, Clone, Copy)]
pub enum RunEvent<'a> {
    PhaseEntered(RunPhase),
    PurgeStarted {
        scope: &'a Path,
        extensions: &'a [&'a str],
    },
    FileDeleted {
        path: &'a Path,
    },
    PurgeFailed {
        path: &'a Path,
        error: &'a str,
    },
    ExportStarted {
        kind: ComponentKind,
        format: ExportFormat,
        name: &'a str,
        path: &'a Path,
    },
    ExportFailed {
        kind: ComponentKind,
        format: ExportFormat,
        name: &'a str,
        path: &'a Path,
        error: &'a str,
    },
    DuplicateSkipped {
        kind: ComponentKind,
        name: &'a str,
        file: &'a ComponentId,
    },
}

impl fmt::Display for RunEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunEvent::PhaseEntered(phase) => write!(f, "Phase: {phase}"),
            RunEvent::PurgeStarted { scope, extensions } => write!(
                f,
                "Purging {} of {} files",
                scope.display(),
                extensions.join(", ")
            ),
            RunEvent::FileDeleted { path } => write!(f, "- Deleted {}", path.display()),
            RunEvent::PurgeFailed { path, error } => {
                write!(f, "ERROR: Could not purge {}: {}", path.display(), error)
            }
            RunEvent::ExportStarted {
                kind,
                format,
                name,
                path,
            } => write!(
                f,
                "- Exporting {kind} to {format}: {name} -> {}",
                path.display()
            ),
            RunEvent::ExportFailed {
                name,
                format,
                error,
                ..
            } => write!(
                f,
                "ERROR: There was a problem exporting {name} to {format} format: {error}"
            ),
            RunEvent::DuplicateSkipped { kind, name, file } => {
                write!(f, "- Skipping {kind} {name}: {file} already exported")
            }
        }
    }
}

/// Receives the progress of a run
pub trait RunReporter {
    /// Called once before anything is purged or exported
    fn open(&mut self, _root: &str, _directives: usize, _base_path: &Path, _dry_run: bool) {}

    fn record(&mut self, event: &RunEvent<'_>);

    /// Called once with the final summary
    fn close(&mut self, _summary: &ExportSummary) {}
}

/// Reports through `tracing`
#[derive(Debug, Default)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl RunReporter for TracingReporter {
    fn open(&mut self, root: &str, directives: usize, base_path: &Path, dry_run: bool) {
        tracing::info!(
            root = root,
            directives = directives,
            base_export_path = %base_path.display(),
            dry_run = dry_run,
            "Starting export"
        );
    }

    fn record(&mut self, event: &RunEvent<'_>) {
        match *event {
            RunEvent::PhaseEntered(phase) => {
                tracing::debug!(phase = %phase, "Entering phase");
            }
            RunEvent::PurgeStarted { scope, extensions } => {
                tracing::info!(
                    scope = %scope.display(),
                    extensions = %extensions.join(","),
                    "Purging export directory"
                );
            }
            RunEvent::FileDeleted { path } => {
                tracing::debug!(path = %path.display(), "Deleted file");
            }
            RunEvent::PurgeFailed { path, error } => {
                tracing::warn!(path = %path.display(), error = error, "Purge failed");
            }
            RunEvent::ExportStarted {
                kind,
                format,
                name,
                path,
            } => {
                tracing::info!(
                    kind = %kind,
                    format = format.tag(),
                    component = name,
                    path = %path.display(),
                    "Exporting component"
                );
            }
            RunEvent::ExportFailed {
                kind,
                format,
                name,
                path,
                error,
            } => {
                tracing::error!(
                    kind = %kind,
                    format = format.tag(),
                    component = name,
                    path = %path.display(),
                    error = error,
                    "There was a problem exporting {} to {} format",
                    name,
                    format
                );
            }
            RunEvent::DuplicateSkipped { kind, name, file } => {
                tracing::debug!(
                    kind = %kind,
                    component = name,
                    file = %file,
                    "Skipping already exported component"
                );
            }
        }
    }

    fn close(&mut self, summary: &ExportSummary) {
        summary.log_summary();
    }
}

/// Keeps every reported line in memory
#[derive(Debug, Default)]
pub struct MemoryReporter {
    lines: Vec<String>,
    closed: bool,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines reporting an export failure
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|line| line.starts_with("ERROR:"))
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl RunReporter for MemoryReporter {
    fn open(&mut self, root: &str, directives: usize, base_path: &Path, dry_run: bool) {
        let mode = if dry_run { " (dry run)" } else { "" };
        self.lines.push(format!(
            "Exporting {root} with {directives} directive(s) to {}{mode}",
            base_path.display()
        ));
    }

    fn record(&mut self, event: &RunEvent<'_>) {
        self.lines.push(event.to_string());
    }

    fn close(&mut self, summary: &ExportSummary) {
        self.lines.push(format!(
            "Done: {} succeeded, {} failed",
            summary.successful_exports, summary.failed_exports
        ));
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_failed_line() {
        let event = RunEvent::ExportFailed {
            kind: ComponentKind::Part,
            format: ExportFormat::CsvParameters,
            name: "Bolt<1>",
            path: Path::new("/out/bolt.csv"),
            error: "disk full",
        };
        assert_eq!(
            event.to_string(),
            "ERROR: There was a problem exporting Bolt<1> to CSV of Component Parameters format: disk full"
        );
    }

    #[test]
    fn test_memory_reporter_collects_lines() {
        let mut reporter = MemoryReporter::new();
        let file = ComponentId::new("bolt.AD_PRT").unwrap();

        reporter.open("Frame", 2, Path::new("/out"), true);
        reporter.record(&RunEvent::DuplicateSkipped {
            kind: ComponentKind::Part,
            name: "Bolt<2>",
            file: &file,
        });
        reporter.record(&RunEvent::PurgeFailed {
            path: Path::new("/out/a.stl"),
            error: "denied",
        });
        reporter.close(&ExportSummary::new());

        assert_eq!(reporter.lines().len(), 4);
        assert!(reporter.lines()[0].ends_with("(dry run)"));
        assert_eq!(
            reporter.lines()[1],
            "- Skipping Part Bolt<2>: bolt.AD_PRT already exported"
        );
        assert_eq!(reporter.errors().count(), 1);
        assert!(reporter.is_closed());
    }
}
