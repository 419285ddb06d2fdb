//! Export sink factory

use super::cad::CadExportSink;
use super::traits::GeometryExporter;
use crate::adapters::converter::{ExternalConverter, NoConverter};
use std::path::Path;

/// Create the export sink for a run
///
/// With a converter program, geometry formats are produced by it; without
/// one, only the CSV formats can succeed.
pub fn create_export_sink(converter: Option<&Path>) -> CadExportSink<Box<dyn GeometryExporter>> {
    let geometry: Box<dyn GeometryExporter> = match converter {
        Some(program) => {
            tracing::info!(converter = %program.display(), "Using external geometry converter");
            Box::new(ExternalConverter::new(program))
        }
        None => {
            tracing::warn!("No geometry converter configured; only CSV exports will succeed");
            Box::new(NoConverter)
        }
    };

    CadExportSink::new(geometry)
}
