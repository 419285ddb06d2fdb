//! Geometry exporters
//!
//! [`ExternalConverter`] hands geometry exports to an external program,
//! invoked once per file as
//!
//! ```text
//! <program> [args...] <FORMAT_TAG> <source file> <output path>
//! ```
//!
//! and judged by its exit status. [`NoConverter`] is used when no program is
//! configured: every geometry export fails with a clear message while CSV
//! exports still run.

use crate::adapters::sink::GeometryExporter;
use crate::domain::{Component, ExportFormat, NeutralizerError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone)]
pub struct ExternalConverter {
    program: PathBuf,
    args: Vec<OsString>,
    display_name: String,
}

impl ExternalConverter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let display_name = program.display().to_string();
        Self {
            program,
            args: Vec::new(),
            display_name,
        }
    }

    /// Arguments placed before the format tag
    pub fn with_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl GeometryExporter for ExternalConverter {
    fn name(&self) -> &str {
        &self.display_name
    }

    fn export_geometry(
        &mut self,
        component: Component<'_>,
        format: ExportFormat,
        path: &Path,
    ) -> Result<()> {
        tracing::debug!(
            program = %self.program.display(),
            format = format.tag(),
            source = %component.id(),
            output = %path.display(),
            "Running converter"
        );

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(format.tag())
            .arg(component.id().as_path())
            .arg(path)
            .output()
            .map_err(|e| {
                NeutralizerError::Export(format!(
                    "Failed to run converter {}: {}",
                    self.program.display(),
                    e
                ))
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        Err(NeutralizerError::Export(if stderr.is_empty() {
            format!("Converter {} {}", self.program.display(), output.status)
        } else {
            format!(
                "Converter {} {}: {}",
                self.program.display(),
                output.status,
                stderr
            )
        }))
    }
}

/// Geometry exporter used when no converter is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct NoConverter;

impl GeometryExporter for NoConverter {
    fn name(&self) -> &str {
        "none"
    }

    fn export_geometry(
        &mut self,
        _component: Component<'_>,
        format: ExportFormat,
        _path: &Path,
    ) -> Result<()> {
        Err(NeutralizerError::Export(format!(
            "No geometry converter configured; cannot produce {} files (use --converter)",
            format.tag()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ComponentId, ComponentInfo, Part};
    use tempfile::TempDir;

    fn bolt() -> Part {
        Part::new(ComponentInfo::new(
            ComponentId::new("/vault/bolt.AD_PRT").unwrap(),
            "Bolt<1>",
        ))
    }

    #[test]
    fn test_no_converter_fails_every_export() {
        let part = bolt();
        let err = NoConverter
            .export_geometry(Component::Part(&part), ExportFormat::Stl, Path::new("/out/b.stl"))
            .unwrap_err();
        assert!(err.to_string().contains("cannot produce STL files"));
    }

    #[test]
    fn test_missing_program() {
        let part = bolt();
        let mut converter = ExternalConverter::new("/nonexistent/neutralizer-converter");
        let err = converter
            .export_geometry(Component::Part(&part), ExportFormat::Sat, Path::new("/tmp/b.sat"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to run converter"));
    }

    #[cfg(unix)]
    #[test]
    fn test_converter_receives_tag_source_and_output() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("bolt.stp");
        let part = bolt();

        let mut converter = ExternalConverter::new("sh")
            .with_args(["-c", "printf '%s|%s' \"$1\" \"$2\" > \"$3\"", "sh"]);
        converter
            .export_geometry(Component::Part(&part), ExportFormat::Step214, &output)
            .unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, "STEP214|/vault/bolt.AD_PRT");
    }

    #[cfg(unix)]
    #[test]
    fn test_converter_nonzero_exit_is_error() {
        let part = bolt();
        let mut converter =
            ExternalConverter::new("sh").with_args(["-c", "echo 'kernel fault' >&2; exit 3", "sh"]);

        let err = converter
            .export_geometry(Component::Part(&part), ExportFormat::Iges, Path::new("/tmp/x.igs"))
            .unwrap_err();
        assert!(err.to_string().contains("kernel fault"));
        assert_eq!(converter.name(), "sh");
    }
}
