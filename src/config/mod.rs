//! Configuration management for Neutralizer.
//!
//! An export configuration names a base export directory and an ordered list
//! of export directives. Files may be written as XML or TOML.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use neutralizer::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("neutralizer.xml")?;
//!
//! println!("Exporting under {}", config.absolute_base_path().display());
//! for directive in &config.directives {
//!     println!("{} -> {}", directive.format(), directive.template().expression());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```xml
//! <NeutralizerConfig>
//!   <BaseExportPath>exports</BaseExportPath>
//!   <ExportDirectiveList>
//!     <ExportDirective>
//!       <type>STEP214</type>
//!       <RelativeExportPath>step/{Number}_{Revision}.stp</RelativeExportPath>
//!       <PurgeDirectoryBeforeExporting>step</PurgeDirectoryBeforeExporting>
//!       <EnableRootAssemblyExport>true</EnableRootAssemblyExport>
//!       <EnableSubassemblyExport>true</EnableSubassemblyExport>
//!       <EnablePartExport>true</EnablePartExport>
//!     </ExportDirective>
//!   </ExportDirectiveList>
//! </NeutralizerConfig>
//! ```
//!
//! The TOML form uses the same key names:
//!
//! ```toml
//! BaseExportPath = "exports"
//!
//! [[ExportDirectiveList.ExportDirective]]
//! type = "STEP214"
//! RelativeExportPath = "step/{Number}_{Revision}.stp"
//! PurgeDirectoryBeforeExporting = "step"
//! ```
//!
//! # Environment Variables
//!
//! - `${VAR_NAME}` anywhere outside comments is substituted on load
//! - `NEUTRALIZER_BASE_EXPORT_PATH` replaces `BaseExportPath`

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{ConfigDocument, DirectiveDocument, ExportConfig, LoggingConfig};
