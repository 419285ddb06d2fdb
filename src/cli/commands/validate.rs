//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! an export configuration file without exporting anything.

use crate::config::load_config;
use crate::domain::ComponentKind;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!(
            "  Base Export Path: {} ({})",
            config.base_export_path.display(),
            config.absolute_base_path().display()
        );
        println!("  Directives: {}", config.directives.len());

        for (index, directive) in config.directives.iter().enumerate() {
            println!();
            println!("  #{} {}", index + 1, directive.format().display_name());
            println!("    Path: {}", directive.template().expression());
            match directive.purge_scope() {
                Some(scope) => println!(
                    "    Purge: {} ({})",
                    scope.display(),
                    directive.get_purge_extensions().join(", ")
                ),
                None => println!("    Purge: none"),
            }
            let roles: Vec<&str> = [
                (ComponentKind::RootAssembly, "root"),
                (ComponentKind::SubAssembly, "subassemblies"),
                (ComponentKind::Part, "parts"),
            ]
            .into_iter()
            .filter(|(kind, _)| directive.applies_to(*kind))
            .map(|(_, label)| label)
            .collect();
            println!(
                "    Applies to: {}",
                if roles.is_empty() {
                    "nothing".to_string()
                } else {
                    roles.join(", ")
                }
            );
        }
        println!();

        Ok(0)
    }
}
