//! Core business logic for Neutralizer.
//!
//! # Export Workflow
//!
//! 1. **Purge**: clear stale files for directives that ask for it
//! 2. **Root**: export the root assembly
//! 3. **Parts**: export the root's direct parts
//! 4. **Sub-assemblies**: depth first, parts before their assembly
//! 5. **Report**: produce the export summary
//!
//! # Example
//!
//! ```rust,no_run
//! use neutralizer::adapters::manifest::load_assembly;
//! use neutralizer::adapters::sink::create_export_sink;
//! use neutralizer::config::load_config;
//! use neutralizer::core::export::{ExportEngine, TracingReporter};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("neutralizer.xml")?;
//! let root = load_assembly("frame.json")?;
//!
//! let mut engine = ExportEngine::new(&config, create_export_sink(None), TracingReporter::new());
//! let summary = engine.export_all(&root);
//!
//! println!("Successful: {}", summary.successful_exports);
//! println!("Failed: {}", summary.failed_exports);
//! # Ok(())
//! # }
//! ```

pub mod export;
