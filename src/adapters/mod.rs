//! External system integrations for Neutralizer.
//!
//! - [`manifest`] - Reading the assembly tree from a JSON manifest
//! - [`sink`] - Export sink abstraction (trait-based) and factory
//! - [`csv`] - Properties and parameters CSV writers
//! - [`converter`] - Geometry export through an external program
//!
//! # Design Pattern
//!
//! Adapters isolate the filesystem and external programs from the traversal
//! engine, which only sees the [`sink::ExportSink`] trait. Tests substitute
//! their own sinks.
//!
//! ```rust,no_run
//! use neutralizer::adapters::sink::create_export_sink;
//! use std::path::Path;
//!
//! // Geometry through an external converter, CSV written directly
//! let sink = create_export_sink(Some(Path::new("/opt/cad/bin/convert")));
//! ```

pub mod converter;
pub mod csv;
pub mod manifest;
pub mod sink;
