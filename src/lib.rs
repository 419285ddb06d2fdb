// Neutralizer - Bulk exporter for CAD assemblies
// Copyright (c) 2025 Neutralizer Contributors
// Licensed under the GNU Lesser General Public License v3.0

//! # Neutralizer - bulk export of CAD assemblies
//!
//! Neutralizer walks an assembly tree and exports every distinct component
//! to neutral formats (STEP, SAT, STL, IGES) and CSV reports, placing each
//! file at a path built from the component's metadata.
//!
//! ## Overview
//!
//! - **Configuration**: an XML or TOML file lists export directives, each
//!   a format, a path template and the roles it applies to
//! - **Purge**: stale files of a directive's format can be cleared first
//! - **Traversal**: root, root parts, then sub-assemblies depth first,
//!   each file exported once no matter how often it is referenced
//! - **Reporting**: failures are logged and counted; the run continues
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Export engine, directives, purge, reporting
//! - [`adapters`] - Export sinks, CSV writers, geometry converter, manifests
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use neutralizer::adapters::manifest::load_assembly;
//! use neutralizer::adapters::sink::create_export_sink;
//! use neutralizer::config::load_config;
//! use neutralizer::core::export::{ExportEngine, TracingReporter};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("neutralizer.xml")?;
//!     let root = load_assembly("frame.json")?;
//!
//!     let sink = create_export_sink(Some(Path::new("/opt/cad/bin/convert")));
//!     let mut engine = ExportEngine::new(&config, sink, TracingReporter::new());
//!     let summary = engine.export_all(&root);
//!
//!     println!("Exported {} files", summary.successful_exports);
//!     Ok(())
//! }
//! ```
//!
//! ## Path Templates
//!
//! Placeholders name metadata fields. Undefined values render as
//! `Undefined <Field>`, and unsafe characters become `_`:
//!
//! ```rust
//! use neutralizer::domain::{PathTemplate, PropertyField, PropertyMap};
//!
//! let template = PathTemplate::parse("{Number}/{Name}.stp").unwrap();
//! let properties = PropertyMap::from_lookup(|field| match field {
//!     PropertyField::Name => Some("Bracket<2>"),
//!     _ => None,
//! });
//! let path = template.render(&properties);
//! assert!(path.ends_with("Bracket_2_.stp"));
//! assert!(path.starts_with("Undefined Part Number"));
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`], whose error type is
//! [`domain::NeutralizerError`]:
//!
//! ```rust,no_run
//! use neutralizer::domain::NeutralizerError;
//!
//! fn example() -> Result<(), NeutralizerError> {
//!     let config = neutralizer::config::load_config("neutralizer.xml")?;
//!     println!("{} directives", config.directives.len());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
