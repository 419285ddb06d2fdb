//! Configuration schema types
//!
//! Two layers live here:
//!
//! - the *document* types ([`ConfigDocument`], [`DirectiveDocument`]) mirror
//!   the on-disk layout and hold raw text, so the same shape serves XML and
//!   TOML files;
//! - [`ExportConfig`] is the compiled, validated form consumed by the engine.

use crate::core::export::directive::ExportDirective;
use crate::domain::{ExportFormat, NeutralizerError, PathTemplate, Result};
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root element of a configuration file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigDocument {
    /// Base directory for all exports, relative to the configuration file
    #[serde(rename = "BaseExportPath", default, deserialize_with = "optional_text")]
    pub base_export_path: Option<String>,

    #[serde(rename = "ExportDirectiveList", default)]
    pub directive_list: DirectiveListDocument,
}

/// `ExportDirectiveList` element
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectiveListDocument {
    #[serde(rename = "ExportDirective", default)]
    pub directives: Vec<DirectiveDocument>,
}

/// One `ExportDirective` element, uninterpreted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectiveDocument {
    #[serde(rename = "type", default, deserialize_with = "optional_text")]
    pub format: Option<String>,

    #[serde(
        rename = "RelativeExportPath",
        default,
        deserialize_with = "optional_text"
    )]
    pub relative_export_path: Option<String>,

    #[serde(
        rename = "PurgeDirectoryBeforeExporting",
        default,
        deserialize_with = "optional_text"
    )]
    pub purge_directory: Option<String>,

    #[serde(
        rename = "EnableRootAssemblyExport",
        default,
        deserialize_with = "optional_text"
    )]
    pub enable_root_assembly_export: Option<String>,

    #[serde(
        rename = "EnableSubassemblyExport",
        default,
        deserialize_with = "optional_text"
    )]
    pub enable_subassembly_export: Option<String>,

    #[serde(rename = "EnablePartExport", default, deserialize_with = "optional_text")]
    pub enable_part_export: Option<String>,
}

impl DirectiveDocument {
    /// Compile into an [`ExportDirective`]
    ///
    /// `position` is 1-based and only used in error messages.
    pub fn compile(&self, position: usize) -> Result<ExportDirective> {
        let format_tag = self.format.as_deref().ok_or_else(|| {
            NeutralizerError::Configuration(format!(
                "ExportDirective #{position} is missing its 'type' element"
            ))
        })?;
        let format: ExportFormat = format_tag.parse().map_err(|e| {
            NeutralizerError::Configuration(format!("ExportDirective #{position}: {e}"))
        })?;

        let expression = self.relative_export_path.as_deref().ok_or_else(|| {
            NeutralizerError::Configuration(format!(
                "ExportDirective #{position} ({}) is missing its 'RelativeExportPath' element",
                format.tag()
            ))
        })?;
        let template = PathTemplate::parse(expression)?;

        let purge_scope = match self.purge_directory.as_deref() {
            Some(scope) => {
                let scope = PathBuf::from(scope);
                if scope.is_absolute() || scope.has_root() {
                    return Err(NeutralizerError::Configuration(format!(
                        "ExportDirective #{position}: PurgeDirectoryBeforeExporting must be \
                         relative to the base export path, got '{}'",
                        scope.display()
                    )));
                }
                Some(scope)
            }
            None => None,
        };

        Ok(ExportDirective::new(format, template)
            .with_purge_scope(purge_scope)
            .include_root(parse_flag(self.enable_root_assembly_export.as_deref(), true))
            .include_subassemblies(parse_flag(self.enable_subassembly_export.as_deref(), true))
            .include_parts(parse_flag(self.enable_part_export.as_deref(), true)))
    }
}

/// Interpret a boolean flag the lenient way
///
/// `true`, `1`, `yes` and `y` (any case, surrounding whitespace ignored)
/// are true; any other text is false; absent uses `default`.
pub fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value {
        None => default,
        Some(text) => matches!(
            text.trim().to_lowercase().as_str(),
            "true" | "1" | "yes" | "y"
        ),
    }
}

/// Deserialize an element or key as trimmed text, treating empty as absent
///
/// Accepts strings, booleans and numbers so TOML and XML share one schema.
fn optional_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("text, a boolean, or an empty element")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> std::result::Result<Self::Value, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserializer.deserialize_any(TextVisitor)
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            // XML elements arrive as maps; their character data sits under `$text`
            let mut text = None;
            while let Some(key) = map.next_key::<String>()? {
                if key == "$text" || key == "$value" {
                    let value: String = map.next_value()?;
                    let trimmed = value.trim();
                    if !trimmed.is_empty() {
                        text = Some(trimmed.to_string());
                    }
                } else {
                    map.next_value::<IgnoredAny>()?;
                }
            }
            Ok(text)
        }
    }

    deserializer.deserialize_any(TextVisitor)
}

/// Compiled export configuration
///
/// Immutable once built. Directives keep their registration order.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// File the configuration was loaded from, if any
    pub config_path: Option<PathBuf>,

    /// Base export path as configured
    pub base_export_path: PathBuf,

    /// Base export path resolved against the configuration file location
    absolute_base_path: PathBuf,

    /// Directives in registration order
    pub directives: Vec<ExportDirective>,
}

impl ExportConfig {
    /// Build a configuration rooted at an absolute base directory
    ///
    /// # Errors
    ///
    /// Returns an error if `absolute_base_path` is relative.
    pub fn new(absolute_base_path: impl Into<PathBuf>, directives: Vec<ExportDirective>) -> Result<Self> {
        let absolute_base_path = absolute_base_path.into();
        if !absolute_base_path.is_absolute() {
            return Err(NeutralizerError::Configuration(format!(
                "Base export path must be absolute, got '{}'",
                absolute_base_path.display()
            )));
        }
        Ok(Self {
            config_path: None,
            base_export_path: absolute_base_path.clone(),
            absolute_base_path,
            directives,
        })
    }

    /// Compile a parsed document loaded from `config_path`
    ///
    /// A relative `BaseExportPath` is taken relative to the directory holding
    /// the configuration file; a missing one means that directory itself.
    pub fn from_document(document: &ConfigDocument, config_path: &Path) -> Result<Self> {
        let base_export_path =
            PathBuf::from(document.base_export_path.as_deref().unwrap_or("."));

        let absolute_base_path = if base_export_path.is_absolute() {
            clean_absolute(&base_export_path)
        } else {
            let config_file = std::path::absolute(config_path).map_err(|e| {
                NeutralizerError::Configuration(format!(
                    "Cannot resolve configuration path {}: {}",
                    config_path.display(),
                    e
                ))
            })?;
            let config_dir = config_file.parent().unwrap_or_else(|| Path::new("/"));
            clean_absolute(&config_dir.join(&base_export_path))
        };

        let directives = document
            .directive_list
            .directives
            .iter()
            .enumerate()
            .map(|(index, directive)| directive.compile(index + 1))
            .collect::<Result<Vec<_>>>()?;

        if directives.is_empty() {
            tracing::warn!(
                config_path = %config_path.display(),
                "Configuration contains no export directives; nothing will be exported"
            );
        }

        Ok(Self {
            config_path: Some(config_path.to_path_buf()),
            base_export_path,
            absolute_base_path,
            directives,
        })
    }

    /// Absolute directory every export and purge path is joined onto
    pub fn absolute_base_path(&self) -> &Path {
        &self.absolute_base_path
    }

    /// Whether any directive deletes files before exporting
    pub fn purges_files(&self) -> bool {
        self.directives.iter().any(|d| d.purge_scope().is_some())
    }
}

/// Lexically clean an absolute path (`.` dropped, `..` folded)
fn clean_absolute(path: &Path) -> PathBuf {
    use std::path::Component;

    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    /// Console-only logging
    pub fn console_only() -> Self {
        Self {
            local_enabled: false,
            ..Self::default()
        }
    }

    /// Console plus JSON file logging under `dir`
    pub fn with_directory(dir: impl Into<String>) -> Self {
        Self {
            local_enabled: true,
            local_path: dir.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when file logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
