//! Export formats
//!
//! Geometry formats are produced by the CAD engine; the two CSV formats are
//! tabular reports written by this crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target format of an export directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportFormat {
    #[serde(rename = "STEP203")]
    Step203,
    #[serde(rename = "STEP214")]
    Step214,
    #[serde(rename = "SAT")]
    Sat,
    #[serde(rename = "STL")]
    Stl,
    #[serde(rename = "IGES")]
    Iges,
    #[serde(rename = "CSV_Properties")]
    CsvProperties,
    #[serde(rename = "CSV_Parameters")]
    CsvParameters,
}

impl ExportFormat {
    pub const ALL: &'static [ExportFormat] = &[
        ExportFormat::Step203,
        ExportFormat::Step214,
        ExportFormat::Sat,
        ExportFormat::Stl,
        ExportFormat::Iges,
        ExportFormat::CsvProperties,
        ExportFormat::CsvParameters,
    ];

    /// Tag used in configuration files
    pub fn tag(self) -> &'static str {
        match self {
            ExportFormat::Step203 => "STEP203",
            ExportFormat::Step214 => "STEP214",
            ExportFormat::Sat => "SAT",
            ExportFormat::Stl => "STL",
            ExportFormat::Iges => "IGES",
            ExportFormat::CsvProperties => "CSV_Properties",
            ExportFormat::CsvParameters => "CSV_Parameters",
        }
    }

    /// Human-readable name for log lines
    pub fn display_name(self) -> &'static str {
        match self {
            ExportFormat::CsvProperties => "CSV of Component Properties",
            ExportFormat::CsvParameters => "CSV of Component Parameters",
            other => other.tag(),
        }
    }

    /// File extensions a file of this format may carry
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ExportFormat::Step203 | ExportFormat::Step214 => &[".stp", ".step"],
            ExportFormat::Sat => &[".sat"],
            ExportFormat::Stl => &[".stl"],
            ExportFormat::Iges => &[".iges", ".igs"],
            ExportFormat::CsvProperties | ExportFormat::CsvParameters => &[".csv"],
        }
    }

    /// Whether the CAD engine must produce this format
    pub fn is_geometry(self) -> bool {
        !matches!(
            self,
            ExportFormat::CsvProperties | ExportFormat::CsvParameters
        )
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ExportFormat::ALL
            .iter()
            .copied()
            .find(|format| format.tag() == trimmed)
            .ok_or_else(|| {
                let valid: Vec<&str> = ExportFormat::ALL.iter().map(|f| f.tag()).collect();
                format!(
                    "Invalid export type '{}'. Must be one of: {}",
                    trimmed,
                    valid.join(", ")
                )
            })
    }
}
