//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting run results.

use crate::domain::{ComponentId, ComponentKind, ExportFormat};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Duration;

/// A file produced (or, in a dry run, planned) by the run
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFileInfo {
    pub component: ComponentId,
    pub kind: ComponentKind,
    pub format: ExportFormat,

    /// Absolute output path
    pub path: PathBuf,
}

/// Summary of an export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Number of directives in the configuration
    pub directive_count: usize,

    /// Distinct components handed to the directives (root included)
    pub components_visited: usize,

    /// Component references skipped because their file was already processed
    pub duplicates_skipped: usize,

    /// Directive applications that reached the sink
    pub exports_attempted: usize,

    /// Number of successful exports
    pub successful_exports: usize,

    /// Number of failed exports
    pub failed_exports: usize,

    /// Files deleted by purges
    pub files_purged: usize,

    /// Files a purge could not delete
    pub purge_failures: usize,

    /// Nothing was written or deleted
    pub dry_run: bool,

    /// Duration of the run
    pub duration: Duration,

    /// Errors encountered during the run
    pub errors: Vec<ExportError>,

    /// Files written, in export order
    pub exported_files: Vec<ExportedFileInfo>,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            directive_count: 0,
            components_visited: 0,
            duplicates_skipped: 0,
            exports_attempted: 0,
            successful_exports: 0,
            failed_exports: 0,
            files_purged: 0,
            purge_failures: 0,
            dry_run: false,
            duration: Duration::from_secs(0),
            errors: Vec::new(),
            exported_files: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Add an error
    pub fn add_error(&mut self, error: ExportError) {
        self.errors.push(error);
    }

    /// Record a successful export
    pub fn add_exported_file(
        &mut self,
        component: ComponentId,
        kind: ComponentKind,
        format: ExportFormat,
        path: PathBuf,
    ) {
        self.successful_exports += 1;
        self.exported_files.push(ExportedFileInfo {
            component,
            kind,
            format,
            path,
        });
    }

    /// Check if the run was successful (no failures)
    pub fn is_successful(&self) -> bool {
        self.failed_exports == 0 && self.purge_failures == 0 && self.errors.is_empty()
    }

    /// Get success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.exports_attempted == 0 {
            return 100.0;
        }
        (self.successful_exports as f64 / self.exports_attempted as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            directives = self.directive_count,
            components = self.components_visited,
            attempted = self.exports_attempted,
            successful = self.successful_exports,
            failed = self.failed_exports,
            duplicates_skipped = self.duplicates_skipped,
            files_purged = self.files_purged,
            dry_run = self.dry_run,
            duration_ms = self.duration.as_millis() as u64,
            success_rate = format!("{:.2}%", self.success_rate()),
            "Export completed"
        );

        if !self.errors.is_empty() {
            tracing::warn!(
                error_count = self.errors.len(),
                "Export completed with errors"
            );
            for error in &self.errors {
                tracing::warn!(
                    error_type = ?error.error_type,
                    message = %error.message,
                    context = error.context.as_deref().unwrap_or(""),
                    "Export error"
                );
            }
        }
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Type of export error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportErrorType {
    /// A purge could not walk or delete a file
    Purge,
    /// The output directory could not be created
    Directory,
    /// The sink rejected or failed an export
    Export,
}

/// Export error with context
#[derive(Debug, Clone)]
pub struct ExportError {
    /// Type of error
    pub error_type: ExportErrorType,

    /// Error message
    pub message: String,

    /// Optional context (e.g., component file, output path)
    pub context: Option<String>,
}

impl ExportError {
    /// Create a new export error
    pub fn new(error_type: ExportErrorType, message: String) -> Self {
        Self {
            error_type,
            message,
            context: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: String) -> Self {
        self.context = Some(context);
        self
    }
}
