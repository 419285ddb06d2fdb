//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "neutralizer.xml")]
    pub output: String,

    /// Include a directive for every export format, with comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Neutralizer configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your export directives", self.output);
                println!("  2. Validate configuration: neutralizer validate-config --config {}", self.output);
                println!("  3. Preview: neutralizer export --assembly <manifest.json> --dry-run");
                println!("  4. Run export: neutralizer export --assembly <manifest.json> --converter <program>");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"<?xml version="1.0" encoding="utf-8"?>
<NeutralizerConfig>
  <BaseExportPath>exports</BaseExportPath>
  <ExportDirectiveList>
    <ExportDirective>
      <type>STEP214</type>
      <RelativeExportPath>STEP/{Number}_{Revision}.stp</RelativeExportPath>
      <PurgeDirectoryBeforeExporting>STEP</PurgeDirectoryBeforeExporting>
    </ExportDirective>
  </ExportDirectiveList>
</NeutralizerConfig>
"#
        .to_string()
    }

    /// Generate configuration with a directive per format
    fn generate_config_with_examples() -> String {
        r#"<?xml version="1.0" encoding="utf-8"?>
<!-- Neutralizer export configuration -->
<!-- BaseExportPath is relative to this file unless absolute. -->
<!-- NEUTRALIZER_BASE_EXPORT_PATH overrides it. -->
<NeutralizerConfig>
  <BaseExportPath>exports</BaseExportPath>
  <ExportDirectiveList>
    <!-- Placeholders: any metadata field name in braces, e.g. {Number}. -->
    <!-- Missing values become "Undefined <Field>". -->
    <ExportDirective>
      <type>STEP214</type>
      <RelativeExportPath>STEP/{Number}_{Revision}.stp</RelativeExportPath>
      <!-- Deletes *.stp and *.step below STEP before exporting -->
      <PurgeDirectoryBeforeExporting>STEP</PurgeDirectoryBeforeExporting>
      <EnableRootAssemblyExport>true</EnableRootAssemblyExport>
      <EnableSubassemblyExport>true</EnableSubassemblyExport>
      <EnablePartExport>true</EnablePartExport>
    </ExportDirective>
    <ExportDirective>
      <type>STL</type>
      <RelativeExportPath>STL/{Number}.stl</RelativeExportPath>
      <PurgeDirectoryBeforeExporting>STL</PurgeDirectoryBeforeExporting>
      <EnableRootAssemblyExport>false</EnableRootAssemblyExport>
      <EnableSubassemblyExport>false</EnableSubassemblyExport>
      <EnablePartExport>true</EnablePartExport>
    </ExportDirective>
    <ExportDirective>
      <type>CSV_Properties</type>
      <RelativeExportPath>Properties/{Number}.csv</RelativeExportPath>
    </ExportDirective>
    <ExportDirective>
      <type>CSV_Parameters</type>
      <RelativeExportPath>Parameters/{Number}.csv</RelativeExportPath>
    </ExportDirective>
  </ExportDirectiveList>
</NeutralizerConfig>
"#
        .to_string()
    }
}
