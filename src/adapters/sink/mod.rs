//! Export sinks
//!
//! An export sink writes one component in one format to one file.

pub mod cad;
pub mod factory;
pub mod traits;

pub use cad::CadExportSink;
pub use factory::create_export_sink;
pub use traits::{ExportSink, GeometryExporter};
