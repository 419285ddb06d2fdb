//! Export command implementation
//!
//! This module implements the `export` command: load the configuration and
//! the assembly manifest, purge, then export every component.

use crate::adapters::manifest::load_assembly;
use crate::adapters::sink::create_export_sink;
use crate::config::load_config;
use crate::core::export::{ExportEngine, ExportSummary, TracingReporter};
use crate::log_error_with_context;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Assembly manifest (JSON) describing the root assembly
    #[arg(short, long, env = "NEUTRALIZER_ASSEMBLY")]
    pub assembly: String,

    /// Program that produces geometry files (STEP, SAT, STL, IGES)
    #[arg(long, value_name = "PROGRAM", env = "NEUTRALIZER_CONVERTER")]
    pub converter: Option<PathBuf>,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run mode - report what would be purged and exported, write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with status 1 if any purge or export failed
    #[arg(long)]
    pub strict: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, assembly = %self.assembly, "Starting export command");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        let root = match load_assembly(&self.assembly) {
            Ok(root) => root,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load assembly manifest");
                eprintln!("Failed to load assembly: {e}");
                return Ok(5);
            }
        };

        if self.dry_run {
            tracing::info!("Dry run mode enabled - nothing will be written or deleted");
            println!("🔍 DRY RUN MODE - No files will be written or deleted");
            println!();
        }

        if !self.yes && !self.dry_run {
            println!("Export Configuration:");
            println!("  Root assembly: {}", root.info.name);
            println!(
                "  Base export path: {}",
                config.absolute_base_path().display()
            );
            println!("  Directives: {}", config.directives.len());
            for directive in &config.directives {
                let purge = directive
                    .purge_scope()
                    .map(|scope| format!(" (purges {})", scope.display()))
                    .unwrap_or_default();
                println!(
                    "    - {} -> {}{}",
                    directive.format().tag(),
                    directive.template().expression(),
                    purge
                );
            }
            println!();
            print!("Proceed with export? [y/N]: ");
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Export cancelled.");
                return Ok(0);
            }
        }

        println!("🚀 Starting export...");
        println!();

        let sink = create_export_sink(self.converter.as_deref());
        let mut engine =
            ExportEngine::new(&config, sink, TracingReporter::new()).with_dry_run(self.dry_run);
        let summary = engine.export_all(&root);

        print_summary(&summary);

        let exit_code = if summary.is_successful() {
            println!("✅ Export completed successfully!");
            0
        } else if self.strict {
            println!("⚠️  Export completed with failures");
            1
        } else {
            println!("⚠️  Export completed with failures (use --strict to fail the run)");
            0
        };

        Ok(exit_code)
    }
}

fn print_summary(summary: &ExportSummary) {
    println!();
    println!("📊 Export Summary:");
    println!("  Components: {}", summary.components_visited);
    println!("  Duplicates Skipped: {}", summary.duplicates_skipped);
    println!("  Exports Attempted: {}", summary.exports_attempted);
    println!("  Successful: {}", summary.successful_exports);
    println!("  Failed: {}", summary.failed_exports);
    println!("  Files Purged: {}", summary.files_purged);
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!("  Success Rate: {:.2}%", summary.success_rate());
    println!();

    if !summary.errors.is_empty() {
        println!("⚠️  Errors encountered:");
        for (i, error) in summary.errors.iter().enumerate() {
            if i == 10 {
                println!("  ... and {} more errors", summary.errors.len() - 10);
                break;
            }
            println!("  - {:?}: {}", error.error_type, error.message);
            if let Some(context) = &error.context {
                println!("    Context: {context}");
            }
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(assembly: &str) -> ExportArgs {
        ExportArgs {
            assembly: assembly.to_string(),
            converter: None,
            yes: true,
            dry_run: false,
            strict: false,
        }
    }

    fn write_fixture(dir: &TempDir) -> (String, String) {
        let config = dir.path().join("neutralizer.xml");
        fs::write(
            &config,
            r#"<Config>
  <BaseExportPath>out</BaseExportPath>
  <ExportDirectiveList>
    <ExportDirective>
      <type>CSV_Properties</type>
      <RelativeExportPath>{Name}.csv</RelativeExportPath>
    </ExportDirective>
  </ExportDirectiveList>
</Config>"#,
        )
        .unwrap();

        let manifest = dir.path().join("frame.json");
        fs::write(
            &manifest,
            r#"{ "file": "/vault/frame.AD_ASM", "name": "Frame",
                 "parts": [ { "file": "/vault/bolt.AD_PRT", "name": "Bolt" } ] }"#,
        )
        .unwrap();

        (
            config.to_string_lossy().into_owned(),
            manifest.to_string_lossy().into_owned(),
        )
    }

    #[test]
    fn test_export_writes_csv_files() {
        let temp_dir = TempDir::new().unwrap();
        let (config, manifest) = write_fixture(&temp_dir);

        let code = args(&manifest).execute(&config).unwrap();

        assert_eq!(code, 0);
        assert!(temp_dir.path().join("out/Frame.csv").is_file());
        assert!(temp_dir.path().join("out/Bolt.csv").is_file());
    }

    #[test]
    fn test_export_bad_config_exit_code() {
        let temp_dir = TempDir::new().unwrap();
        let (_, manifest) = write_fixture(&temp_dir);

        let code = args(&manifest)
            .execute(&temp_dir.path().join("missing.xml").to_string_lossy())
            .unwrap();
        assert_eq!(code, 2);
    }

    #[test]
    fn test_export_bad_manifest_exit_code() {
        let temp_dir = TempDir::new().unwrap();
        let (config, _) = write_fixture(&temp_dir);

        let code = args("/nonexistent/frame.json").execute(&config).unwrap();
        assert_eq!(code, 5);
    }

    #[test]
    fn test_strict_reports_failures() {
        let temp_dir = TempDir::new().unwrap();
        let (_, manifest) = write_fixture(&temp_dir);
        let config = temp_dir.path().join("geometry.toml");
        fs::write(
            &config,
            r#"BaseExportPath = "out"

[[ExportDirectiveList.ExportDirective]]
type = "STL"
RelativeExportPath = "{Name}.stl"
"#,
        )
        .unwrap();
        let config = config.to_string_lossy().into_owned();

        // No converter: every STL export fails
        assert_eq!(args(&manifest).execute(&config).unwrap(), 0);

        let strict = ExportArgs {
            strict: true,
            ..args(&manifest)
        };
        assert_eq!(strict.execute(&config).unwrap(), 1);
    }
}
