//! Result type alias for Neutralizer

use super::errors::NeutralizerError;

/// Result type alias for Neutralizer operations
///
/// # Examples
///
/// ```
/// use neutralizer::domain::result::Result;
/// use neutralizer::domain::errors::NeutralizerError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(NeutralizerError::Configuration("missing directive type".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, NeutralizerError>;
