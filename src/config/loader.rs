//! Configuration loader with XML/TOML parsing and environment variable overrides

use super::schema::{ConfigDocument, ExportConfig};
use crate::domain::errors::NeutralizerError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Environment variable that replaces `BaseExportPath`
pub const BASE_EXPORT_PATH_ENV: &str = "NEUTRALIZER_BASE_EXPORT_PATH";

/// Loads an export configuration file
///
/// This function:
/// 1. Reads the file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses it as XML or TOML depending on the extension
/// 4. Applies environment variable overrides (NEUTRALIZER_* prefix)
/// 5. Compiles and validates every directive
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read or has an unsupported extension
/// - Parsing fails
/// - A referenced environment variable is not set
/// - A directive has an unknown type or an invalid path template
///
/// # Examples
///
/// ```no_run
/// use neutralizer::config::loader::load_config;
///
/// let config = load_config("neutralizer.xml").expect("Failed to load config");
/// println!("{} directives", config.directives.len());
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ExportConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(NeutralizerError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        NeutralizerError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut document = parse_document(path, &contents)?;

    apply_env_overrides(&mut document, |key| std::env::var(key).ok());

    let config = ExportConfig::from_document(&document, path)?;

    tracing::debug!(
        config_path = %path.display(),
        base_export_path = %config.absolute_base_path().display(),
        directives = config.directives.len(),
        "Configuration loaded"
    );

    Ok(config)
}

/// Parses configuration text, choosing the syntax from the file extension
///
/// `.xml` files are read as XML; `.toml` files as TOML.
pub fn parse_document(path: &Path, contents: &str) -> Result<ConfigDocument> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("xml") => Ok(quick_xml::de::from_str(contents)?),
        Some("toml") => Ok(toml::from_str(contents)?),
        _ => Err(NeutralizerError::Configuration(format!(
            "Unsupported configuration file type: {} (expected .xml or .toml)",
            path.display()
        ))),
    }
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Lines that are TOML (`#`) or XML (`<!--`) comments are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let re = PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern is a valid regex")
    });

    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') || trimmed.starts_with("<!--") {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(NeutralizerError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the NEUTRALIZER_* prefix
fn apply_env_overrides<F>(document: &mut ConfigDocument, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(BASE_EXPORT_PATH_ENV) {
        let val = val.trim();
        if !val.is_empty() {
            document.base_export_path = Some(val.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ComponentKind, ExportFormat};
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    const SAMPLE_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!-- Export to the shared drive -->
<NeutralizerConfig>
  <BaseExportPath>exports</BaseExportPath>
  <ExportDirectiveList>
    <ExportDirective>
      <type>STEP214</type>
      <RelativeExportPath>step/{Number}_{Revision}.stp</RelativeExportPath>
      <PurgeDirectoryBeforeExporting>step</PurgeDirectoryBeforeExporting>
      <EnableRootAssemblyExport>False</EnableRootAssemblyExport>
    </ExportDirective>
    <ExportDirective>
      <type>CSV_Properties</type>
      <RelativeExportPath>props/{Name}.csv</RelativeExportPath>
      <PurgeDirectoryBeforeExporting></PurgeDirectoryBeforeExporting>
      <EnablePartExport>yes</EnablePartExport>
      <EnableSubassemblyExport>0</EnableSubassemblyExport>
    </ExportDirective>
  </ExportDirectiveList>
</NeutralizerConfig>
"#;

    fn write_config(suffix: &str, contents: &str) -> NamedTempFile {
        let mut temp_file = Builder::new().suffix(suffix).tempfile().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        temp_file.flush().unwrap();
        temp_file
    }

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("NEUTRALIZER_TEST_SUBST_VAR", "test_value");
        let input = "<BaseExportPath>${NEUTRALIZER_TEST_SUBST_VAR}</BaseExportPath>";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "<BaseExportPath>test_value</BaseExportPath>\n");
        std::env::remove_var("NEUTRALIZER_TEST_SUBST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("NEUTRALIZER_TEST_MISSING_VAR");
        let input = "<BaseExportPath>${NEUTRALIZER_TEST_MISSING_VAR}</BaseExportPath>";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_skips_comments() {
        let input = "<!-- ${NOT_SET_ANYWHERE} -->\n# ${NOT_SET_EITHER}";
        assert!(substitute_env_vars(input).is_ok());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.xml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_unsupported_extension() {
        let temp_file = write_config(".json", "{}");
        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Unsupported configuration file type"));
    }

    #[test]
    fn test_parse_xml_document() {
        let document = parse_document(Path::new("cfg.xml"), SAMPLE_XML).unwrap();

        assert_eq!(document.base_export_path.as_deref(), Some("exports"));
        let directives = &document.directive_list.directives;
        assert_eq!(directives.len(), 2);
        assert_eq!(directives[0].format.as_deref(), Some("STEP214"));
        assert_eq!(directives[0].purge_directory.as_deref(), Some("step"));
        assert_eq!(
            directives[0].enable_root_assembly_export.as_deref(),
            Some("False")
        );
        assert_eq!(directives[0].enable_part_export, None);
        assert_eq!(directives[1].purge_directory, None);
    }

    #[test]
    fn test_load_xml_config() {
        let temp_file = write_config(".xml", SAMPLE_XML);
        let config = load_config(temp_file.path()).unwrap();

        let expected_base = temp_file.path().parent().unwrap().join("exports");
        assert_eq!(config.absolute_base_path(), expected_base.as_path());
        assert_eq!(config.directives.len(), 2);

        let step = &config.directives[0];
        assert_eq!(step.format(), ExportFormat::Step214);
        assert_eq!(step.purge_scope(), Some(Path::new("step")));
        assert!(!step.applies_to(ComponentKind::RootAssembly));
        assert!(step.applies_to(ComponentKind::SubAssembly));
        assert!(step.applies_to(ComponentKind::Part));

        let props = &config.directives[1];
        assert_eq!(props.format(), ExportFormat::CsvProperties);
        assert!(props.purge_scope().is_none());
        assert!(props.applies_to(ComponentKind::RootAssembly));
        assert!(!props.applies_to(ComponentKind::SubAssembly));
        assert!(props.applies_to(ComponentKind::Part));
    }

    #[test]
    fn test_load_toml_config() {
        let toml_content = r#"
BaseExportPath = "/srv/exports"

[[ExportDirectiveList.ExportDirective]]
type = "STL"
RelativeExportPath = "stl/{Name}.stl"
EnableRootAssemblyExport = false

[[ExportDirectiveList.ExportDirective]]
type = "CSV_Parameters"
RelativeExportPath = "params/{Number}.csv"
PurgeDirectoryBeforeExporting = "params"
"#;
        let temp_file = write_config(".toml", toml_content);
        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.absolute_base_path(), Path::new("/srv/exports"));
        assert_eq!(config.directives.len(), 2);
        assert!(!config.directives[0].applies_to(ComponentKind::RootAssembly));
        assert_eq!(config.directives[1].format(), ExportFormat::CsvParameters);
        assert!(config.purges_files());
    }

    #[test]
    fn test_load_config_rejects_unknown_placeholder() {
        let xml = r#"<Config>
  <ExportDirectiveList>
    <ExportDirective>
      <type>SAT</type>
      <RelativeExportPath>{Colour}.sat</RelativeExportPath>
    </ExportDirective>
  </ExportDirectiveList>
</Config>"#;
        let temp_file = write_config(".xml", xml);
        let err = load_config(temp_file.path()).unwrap_err();
        assert!(matches!(err, NeutralizerError::Template(_)));
        assert!(err.to_string().contains("Colour"));
    }

    #[test]
    fn test_load_config_without_directives() {
        let temp_file = write_config(".xml", "<Config><BaseExportPath>out</BaseExportPath></Config>");
        let config = load_config(temp_file.path()).unwrap();
        assert!(config.directives.is_empty());
        assert!(!config.purges_files());
    }

    #[test]
    fn test_env_override_replaces_base_path() {
        let mut document = ConfigDocument {
            base_export_path: Some("exports".to_string()),
            ..ConfigDocument::default()
        };

        apply_env_overrides(&mut document, |key| {
            (key == BASE_EXPORT_PATH_ENV).then(|| "/mnt/share".to_string())
        });
        assert_eq!(document.base_export_path.as_deref(), Some("/mnt/share"));

        apply_env_overrides(&mut document, |_| Some("   ".to_string()));
        assert_eq!(document.base_export_path.as_deref(), Some("/mnt/share"));

        apply_env_overrides(&mut document, |_| None);
        assert_eq!(document.base_export_path.as_deref(), Some("/mnt/share"));
    }
}
