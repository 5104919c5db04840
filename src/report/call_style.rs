// ============================================================================
// Call Style
// The four ways the summation functions are invoked
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a report line obtains its sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CallStyle {
    /// `sum_ints` / `sum_floats`, one function per type
    NonGeneric,
    /// `sum_ints_or_floats::<K, V>` with type arguments spelled out
    ExplicitGeneric,
    /// `sum_ints_or_floats` with type arguments inferred
    InferredGeneric,
    /// `sum_numbers`, bounded by the named `Number` constraint
    Constrained,
}

impl CallStyle {
    /// All styles, in report order.
    pub const ALL: [CallStyle; 4] = [
        CallStyle::NonGeneric,
        CallStyle::ExplicitGeneric,
        CallStyle::InferredGeneric,
        CallStyle::Constrained,
    ];

    /// Line prefix used in the console report.
    pub const fn label(self) -> &'static str {
        match self {
            CallStyle::NonGeneric => "Non-Generic Sums",
            CallStyle::ExplicitGeneric => "Generic Sums",
            CallStyle::InferredGeneric => "Generic Sums, type parameters inferred",
            CallStyle::Constrained => "Generic Sums with Constraint",
        }
    }
}

impl fmt::Display for CallStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
