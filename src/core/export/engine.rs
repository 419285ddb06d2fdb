//! Traversal engine
//!
//! Walks an assembly tree and applies every export directive to every
//! component exactly once per distinct file.
//!
//! A run moves through fixed phases, never backwards:
//!
//! 1. **Purging**: each directive with a purge directory clears it
//! 2. **ExportingRoot**: root-enabled directives export the root assembly
//! 3. **ExportingRootParts**: the root's direct parts
//! 4. **RecursingSubassemblies**: each sub-assembly's parts, then the
//!    sub-assembly itself, then its children, depth first
//!
//! Deduplication is keyed by file identity. A file is marked processed only
//! after every directive has been applied to it; later references to it are
//! skipped. The root is never marked.
//!
//! A failed export is reported and the run continues.

use super::directive::ExportDirective;
use super::purge::purge_directory;
use super::report::{RunEvent, RunReporter};
use super::summary::{ExportError, ExportErrorType, ExportSummary};
use crate::adapters::sink::ExportSink;
use crate::config::ExportConfig;
use crate::domain::{Assembly, Component, ComponentId};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunPhase {
    NotStarted,
    Purging,
    ExportingRoot,
    ExportingRootParts,
    RecursingSubassemblies,
    Done,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunPhase::NotStarted => "not started",
            RunPhase::Purging => "purging",
            RunPhase::ExportingRoot => "exporting root assembly",
            RunPhase::ExportingRootParts => "exporting root parts",
            RunPhase::RecursingSubassemblies => "exporting subassemblies",
            RunPhase::Done => "done",
        };
        f.write_str(label)
    }
}

/// File identities already exported during this run
///
/// Only grows.
#[derive(Debug, Default)]
struct ProcessedSet<'t> {
    ids: HashSet<&'t ComponentId>,
}

impl<'t> ProcessedSet<'t> {
    fn contains(&self, id: &ComponentId) -> bool {
        self.ids.contains(id)
    }

    fn mark(&mut self, id: &'t ComponentId) {
        self.ids.insert(id);
    }
}

/// Applies a configuration's directives to an assembly tree
pub struct ExportEngine<'c, S, R> {
    config: &'c ExportConfig,
    sink: S,
    reporter: R,
    dry_run: bool,
    phase: RunPhase,
}

impl<'c, S, R> ExportEngine<'c, S, R>
where
    S: ExportSink,
    R: RunReporter,
{
    pub fn new(config: &'c ExportConfig, sink: S, reporter: R) -> Self {
        Self {
            config,
            sink,
            reporter,
            dry_run: false,
            phase: RunPhase::NotStarted,
        }
    }

    /// Report what would be purged and exported without touching the disk
    /// or the sink
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Phase reached by the current or last run
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_parts(self) -> (S, R) {
        (self.sink, self.reporter)
    }

    /// Purge, then export the whole tree below `root`
    ///
    /// Individual failures are recorded in the returned summary; the run
    /// itself does not fail.
    pub fn export_all(&mut self, root: &Assembly) -> ExportSummary {
        let started = Instant::now();
        let config = self.config;

        let mut summary = ExportSummary::new();
        summary.directive_count = config.directives.len();
        summary.dry_run = self.dry_run;

        self.phase = RunPhase::NotStarted;
        self.reporter.open(
            &root.info.name,
            config.directives.len(),
            config.absolute_base_path(),
            self.dry_run,
        );

        self.enter(RunPhase::Purging);
        for directive in &config.directives {
            self.purge(directive, &mut summary);
        }

        self.enter(RunPhase::ExportingRoot);
        summary.components_visited += 1;
        for directive in &config.directives {
            self.apply(Component::RootAssembly(root), directive, &mut summary);
        }

        let mut processed = ProcessedSet::default();

        self.enter(RunPhase::ExportingRootParts);
        self.export_parts(root, &mut processed, &mut summary);

        self.enter(RunPhase::RecursingSubassemblies);
        for subassembly in &root.subassemblies {
            self.export_subassembly(subassembly, &mut processed, &mut summary);
        }

        self.enter(RunPhase::Done);

        let summary = summary.with_duration(started.elapsed());
        self.reporter.close(&summary);
        summary
    }

    fn enter(&mut self, phase: RunPhase) {
        debug_assert!(phase > self.phase, "run phases only move forward");
        self.phase = phase;
        self.reporter.record(&RunEvent::PhaseEntered(phase));
    }

    fn purge(&mut self, directive: &ExportDirective, summary: &mut ExportSummary) {
        let Some(scope) = directive.purge_scope() else {
            return;
        };

        let directory = self.config.absolute_base_path().join(scope);
        let outcome = purge_directory(
            &directory,
            directive.get_purge_extensions(),
            self.dry_run,
            &mut self.reporter,
        );

        summary.files_purged += outcome.deleted.len();
        summary.purge_failures += outcome.failures.len();
        for (path, message) in outcome.failures {
            summary.add_error(
                ExportError::new(ExportErrorType::Purge, message)
                    .with_context(format!("path={}", path.display())),
            );
        }
    }

    /// Export the direct parts of `assembly` not exported yet
    fn export_parts<'t>(
        &mut self,
        assembly: &'t Assembly,
        processed: &mut ProcessedSet<'t>,
        summary: &mut ExportSummary,
    ) {
        let config = self.config;

        for part in &assembly.parts {
            let component = Component::Part(part);
            if processed.contains(component.id()) {
                self.skip_duplicate(component, summary);
                continue;
            }

            summary.components_visited += 1;
            for directive in &config.directives {
                self.apply(component, directive, summary);
            }
            processed.mark(&part.info.file);
        }
    }

    /// Parts first, then the sub-assembly itself, then its children
    fn export_subassembly<'t>(
        &mut self,
        subassembly: &'t Assembly,
        processed: &mut ProcessedSet<'t>,
        summary: &mut ExportSummary,
    ) {
        let component = Component::SubAssembly(subassembly);
        if processed.contains(component.id()) {
            self.skip_duplicate(component, summary);
            return;
        }

        self.export_parts(subassembly, processed, summary);

        let config = self.config;
        summary.components_visited += 1;
        for directive in &config.directives {
            self.apply(component, directive, summary);
        }
        processed.mark(&subassembly.info.file);

        for child in &subassembly.subassemblies {
            self.export_subassembly(child, processed, summary);
        }
    }

    fn skip_duplicate(&mut self, component: Component<'_>, summary: &mut ExportSummary) {
        summary.duplicates_skipped += 1;
        self.reporter.record(&RunEvent::DuplicateSkipped {
            kind: component.kind(),
            name: component.name(),
            file: component.id(),
        });
    }

    /// Apply one directive to one component
    fn apply(
        &mut self,
        component: Component<'_>,
        directive: &ExportDirective,
        summary: &mut ExportSummary,
    ) {
        if !directive.applies_to(component.kind()) {
            return;
        }

        let format = directive.format();
        let path = self
            .config
            .absolute_base_path()
            .join(directive.get_export_path(component));

        self.reporter.record(&RunEvent::ExportStarted {
            kind: component.kind(),
            format,
            name: component.name(),
            path: &path,
        });
        summary.exports_attempted += 1;

        if self.dry_run {
            summary.add_exported_file(component.id().clone(), component.kind(), format, path);
            return;
        }

        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                let message = format!("Cannot create directory {}: {}", parent.display(), e);
                self.fail(component, directive, &path, ExportErrorType::Directory, message, summary);
                return;
            }
        }

        match self.sink.export(component, format, &path) {
            Ok(()) => {
                summary.add_exported_file(component.id().clone(), component.kind(), format, path)
            }
            Err(e) => {
                self.fail(component, directive, &path, ExportErrorType::Export, e.to_string(), summary)
            }
        }
    }

    fn fail(
        &mut self,
        component: Component<'_>,
        directive: &ExportDirective,
        path: &Path,
        error_type: ExportErrorType,
        message: String,
        summary: &mut ExportSummary,
    ) {
        self.reporter.record(&RunEvent::ExportFailed {
            kind: component.kind(),
            format: directive.format(),
            name: component.name(),
            path,
            error: &message,
        });
        summary.failed_exports += 1;
        summary.add_error(
            ExportError::new(error_type, message).with_context(format!(
                "file={} format={} path={}",
                component.id(),
                directive.format().tag(),
                path.display()
            )),
        );
    }
}
