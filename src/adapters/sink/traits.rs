//! Export sink traits
//!
//! The traversal engine only knows [`ExportSink`]. Geometry formats need a
//! CAD kernel and go through a [`GeometryExporter`]; the CSV formats are
//! written by this crate.

use crate::domain::{Component, ExportFormat, Result};
use std::path::Path;

/// Writes one component in one format to one file
pub trait ExportSink {
    /// Export `component` as `format` to the absolute `path`
    ///
    /// The parent directory already exists when this is called. An existing
    /// file at `path` is overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be produced. The engine reports it
    /// and carries on with the next export.
    fn export(&mut self, component: Component<'_>, format: ExportFormat, path: &Path)
        -> Result<()>;
}

impl<S: ExportSink + ?Sized> ExportSink for Box<S> {
    fn export(
        &mut self,
        component: Component<'_>,
        format: ExportFormat,
        path: &Path,
    ) -> Result<()> {
        (**self).export(component, format, path)
    }
}

/// Produces geometry files (STEP, SAT, STL, IGES)
pub trait GeometryExporter {
    /// Human readable name for log lines
    fn name(&self) -> &str;

    /// Write the geometry of `component` as `format` to `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry cannot be produced.
    fn export_geometry(
        &mut self,
        component: Component<'_>,
        format: ExportFormat,
        path: &Path,
    ) -> Result<()>;
}

impl<G: GeometryExporter + ?Sized> GeometryExporter for Box<G> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn export_geometry(
        &mut self,
        component: Component<'_>,
        format: ExportFormat,
        path: &Path,
    ) -> Result<()> {
        (**self).export_geometry(component, format, path)
    }
}
