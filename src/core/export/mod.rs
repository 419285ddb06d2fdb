//! Export orchestration
//!
//! This module provides the core export logic for Neutralizer, including:
//! - Property resolution and export directives
//! - Pre-export purging
//! - Assembly traversal with file-level deduplication
//! - Run reporting and summary

pub mod directive;
pub mod engine;
pub mod purge;
pub mod report;
pub mod resolver;
pub mod summary;

pub use directive::ExportDirective;
pub use engine::{ExportEngine, RunPhase};
pub use purge::{purge_directory, PurgeOutcome};
pub use report::{MemoryReporter, RunEvent, RunReporter, TracingReporter};
pub use resolver::resolve;
pub use summary::{ExportError, ExportErrorType, ExportSummary, ExportedFileInfo};
