//! CSV reports
//!
//! Two tabular exports are produced without the CAD engine:
//!
//! - **Properties**: one row per metadata field, in vocabulary order, with
//!   the raw value (empty when undefined). `FileName` is left out.
//! - **Parameters**: one row per design parameter, sorted by name.
//!
//! Both are written with CRLF line endings and minimal quoting, and the
//! output depends only on the component, so re-exporting gives identical
//! bytes.

use crate::domain::{ComponentInfo, PropertyField, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const PROPERTIES_HEADER: [&str; 2] = ["Property Name", "Value"];

pub const PARAMETERS_HEADER: [&str; 6] = ["Name", "Equation", "Value", "Units", "Type", "Comment"];

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer)
}

/// Write the properties table of `info` to `writer`
pub fn write_properties<W: Write>(info: &ComponentInfo, writer: W) -> Result<()> {
    let mut csv = csv_writer(writer);
    csv.write_record(PROPERTIES_HEADER)?;

    for field in PropertyField::ALL
        .iter()
        .copied()
        .filter(|field| field.is_publishable())
    {
        let value = info.raw_property(field).unwrap_or("");
        csv.write_record([field.name(), value])?;
    }

    csv.flush()?;
    Ok(())
}

/// Write the parameters table of `info` to `writer`
pub fn write_parameters<W: Write>(info: &ComponentInfo, writer: W) -> Result<()> {
    let mut parameters: Vec<_> = info.parameters.iter().collect();
    parameters.sort_by(|a, b| a.name.cmp(&b.name));

    let mut csv = csv_writer(writer);
    csv.write_record(PARAMETERS_HEADER)?;

    for parameter in parameters {
        let value = parameter.value.to_string();
        csv.write_record([
            parameter.name.as_str(),
            parameter.equation.as_str(),
            value.as_str(),
            parameter.units.as_str(),
            parameter.kind.as_str(),
            parameter.comment.as_str(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Write the properties table to a file, replacing any existing one
pub fn write_properties_file(info: &ComponentInfo, path: &Path) -> Result<()> {
    write_properties(info, File::create(path)?)
}

/// Write the parameters table to a file, replacing any existing one
pub fn write_parameters_file(info: &ComponentInfo, path: &Path) -> Result<()> {
    write_parameters(info, File::create(path)?)
}
