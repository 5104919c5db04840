// ============================================================================
// Scenario Errors
// Error types for building and loading a summation scenario
// ============================================================================

use std::fmt;

/// Errors that can occur while validating or loading a [`Scenario`].
///
/// [`Scenario`]: super::Scenario
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScenarioError {
    /// A float entry is NaN or infinite
    NonFiniteValue {
        /// Key of the offending entry
        key: String,
    },
    /// Input could not be parsed as a scenario
    InvalidJson(String),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::NonFiniteValue { key } => {
                write!(f, "non-finite value: float entry '{}' is NaN or infinite", key)
            },
            ScenarioError::InvalidJson(reason) => write!(f, "invalid scenario json: {}", reason),
        }
    }
}

impl std::error::Error for ScenarioError {}

/// Result type alias for scenario operations
pub type ScenarioResult<T> = Result<T, ScenarioError>;
