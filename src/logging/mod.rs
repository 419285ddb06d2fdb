//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human readable console output on stderr
//! - Configurable log levels (`--log-level`, `RUST_LOG`)
//! - JSON file logging with rotation (`--log-dir`)
//!
//! # Example
//!
//! ```no_run
//! use neutralizer::logging::init_logging;
//! use neutralizer::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use neutralizer::log_error_with_context;
/// use neutralizer::domain::NeutralizerError;
///
/// let error = NeutralizerError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
