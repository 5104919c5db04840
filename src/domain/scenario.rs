// ============================================================================
// Scenario
// The pair of input maps every calling style is run against
// ============================================================================

use super::errors::{ScenarioError, ScenarioResult};
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Input for one run of the report: an integer map and a float map.
///
/// `Default` yields the demonstration maps
/// `{"first": 34, "second": 12}` and `{"first": 35.98, "second": 26.99}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scenario {
    /// Integer-valued map
    pub ints: HashMap<String, i64>,

    /// Float-valued map
    pub floats: HashMap<String, f64>,
}

impl Scenario {
    /// Create a scenario with both maps empty
    pub fn empty() -> Self {
        Self {
            ints: HashMap::new(),
            floats: HashMap::new(),
        }
    }

    /// Builder method: insert (or overwrite) an integer entry
    pub fn with_int(mut self, key: impl Into<String>, value: i64) -> Self {
        self.ints.insert(key.into(), value);
        self
    }

    /// Builder method: insert (or overwrite) a float entry
    pub fn with_float(mut self, key: impl Into<String>, value: f64) -> Self {
        self.floats.insert(key.into(), value);
        self
    }

    /// Validate the scenario.
    ///
    /// Every float must be finite; a NaN total never compares equal and
    /// would make the call styles look inconsistent.
    pub fn validate(&self) -> ScenarioResult<()> {
        let mut keys: Vec<&String> = self
            .floats
            .iter()
            .filter(|(_, v)| !v.is_finite())
            .map(|(k, _)| k)
            .collect();

        // Report the same key regardless of map iteration order
        keys.sort();

        match keys.first() {
            Some(key) => Err(ScenarioError::NonFiniteValue {
                key: (*key).clone(),
            }),
            None => Ok(()),
        }
    }

    /// Parse and validate a scenario from JSON.
    #[cfg(feature = "serde")]
    pub fn from_json(input: &str) -> ScenarioResult<Self> {
        let scenario: Self = serde_json::from_str(input)
            .map_err(|e| ScenarioError::InvalidJson(e.to_string()))?;
        scenario.validate()?;
        Ok(scenario)
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::empty()
            .with_int("first", 34)
            .with_int("second", 12)
            .with_float("first", 35.98)
            .with_float("second", 26.99)
    }
}
