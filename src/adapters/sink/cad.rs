//! Default export sink
//!
//! Routes CSV formats to the built-in writers and everything else to a
//! [`GeometryExporter`].

use super::traits::{ExportSink, GeometryExporter};
use crate::adapters::csv;
use crate::domain::{Component, ExportFormat, Result};
use std::path::Path;

pub struct CadExportSink<G> {
    geometry: G,
}

impl<G: GeometryExporter> CadExportSink<G> {
    pub fn new(geometry: G) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }
}

impl<G: GeometryExporter> ExportSink for CadExportSink<G> {
    fn export(
        &mut self,
        component: Component<'_>,
        format: ExportFormat,
        path: &Path,
    ) -> Result<()> {
        match format {
            ExportFormat::CsvProperties => csv::write_properties_file(component.info(), path),
            ExportFormat::CsvParameters => csv::write_parameters_file(component.info(), path),
            ExportFormat::Step203
            | ExportFormat::Step214
            | ExportFormat::Sat
            | ExportFormat::Stl
            | ExportFormat::Iges => self.geometry.export_geometry(component, format, path),
        }
    }
}
