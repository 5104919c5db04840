// ============================================================================
// Domain Module
// Input scenario for the summation report and its error types
// ============================================================================

pub mod errors;
pub mod scenario;

pub use errors::{ScenarioError, ScenarioResult};
pub use scenario::Scenario;
