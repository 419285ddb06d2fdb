//! Assembly manifests
//!
//! The component tree of a run is read from a JSON manifest describing the
//! root assembly:
//!
//! ```json
//! {
//!   "file": "/vault/frame.AD_ASM",
//!   "name": "Frame",
//!   "properties": { "Number": "FR-001", "Revision": "B" },
//!   "parameters": [
//!     { "name": "Length", "equation": "", "value": 1200.0, "units": "mm", "type": "Distance" }
//!   ],
//!   "parts": [ { "file": "/vault/bolt.AD_PRT", "name": "Bolt<1>" } ],
//!   "subassemblies": []
//! }
//! ```
//!
//! Property keys must belong to the metadata vocabulary; unknown keys are
//! rejected.

use crate::domain::{Assembly, NeutralizerError, Result};
use std::fs;
use std::path::Path;

/// Load the root assembly from a JSON manifest file
///
/// # Errors
///
/// Returns [`NeutralizerError::Manifest`] if the file cannot be read or does
/// not describe an assembly.
pub fn load_assembly(path: impl AsRef<Path>) -> Result<Assembly> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|e| {
        NeutralizerError::Manifest(format!(
            "Failed to read assembly manifest {}: {}",
            path.display(),
            e
        ))
    })?;

    let root = parse_assembly(&contents).map_err(|e| match e {
        NeutralizerError::Manifest(message) => {
            NeutralizerError::Manifest(format!("{}: {}", path.display(), message))
        }
        other => other,
    })?;

    tracing::debug!(
        manifest = %path.display(),
        root = %root.info.name,
        edges = root.edge_count(),
        "Assembly manifest loaded"
    );

    Ok(root)
}

/// Parse a manifest from JSON text
pub fn parse_assembly(contents: &str) -> Result<Assembly> {
    serde_json::from_str(contents).map_err(|e| NeutralizerError::Manifest(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PropertyField;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MANIFEST: &str = r#"{
        "file": "/vault/frame.AD_ASM",
        "name": "Frame",
        "properties": { "Number": "FR-001" },
        "parts": [ { "file": "/vault/bolt.AD_PRT", "name": "Bolt<1>" } ],
        "subassemblies": [
            {
                "file": "/vault/hinge.AD_ASM",
                "name": "Hinge<1>",
                "parts": [ { "file": "/vault/bolt.AD_PRT", "name": "Bolt<2>" } ]
            }
        ]
    }"#;

    #[test]
    fn test_load_assembly() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(MANIFEST.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let root = load_assembly(temp_file.path()).unwrap();

        assert_eq!(root.info.raw_property(PropertyField::Number), Some("FR-001"));
        assert_eq!(root.parts.len(), 1);
        assert_eq!(root.subassemblies[0].parts[0].info.name, "Bolt<2>");
        assert_eq!(root.subassemblies[0].parts[0].info.file, root.parts[0].info.file);
    }

    #[test]
    fn test_missing_manifest() {
        let err = load_assembly("/nonexistent/frame.json").unwrap_err();
        assert!(matches!(err, NeutralizerError::Manifest(_)));
    }

    #[test]
    fn test_rejects_unknown_property_and_blank_file() {
        let unknown = r#"{ "file": "a.AD_PRT", "name": "A", "properties": { "Colour": "red" } }"#;
        assert!(matches!(
            parse_assembly(unknown),
            Err(NeutralizerError::Manifest(_))
        ));

        let blank = r#"{ "file": "  ", "name": "A" }"#;
        assert!(parse_assembly(blank).is_err());
    }
}
