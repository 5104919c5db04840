// ============================================================================
// Generic Sums Library
// Summation over key-value maps, written once for a closed set of numbers
// ============================================================================

//! # Generic Sums
//!
//! Sums the values of a `HashMap` four ways and shows that they agree.
//!
//! ## Features
//!
//! - **Non-generic** `sum_ints` / `sum_floats`, one function per type
//! - **Inline constraint** `sum_ints_or_floats`, generic over `i64 | f64`
//! - **Named constraint** `sum_numbers`, bounded by the reusable `Number` trait
//! - **Closed set**: any value type other than `i64` or `f64` fails to compile
//!
//! ## Example
//!
//! ```rust
//! use generic_sums::prelude::*;
//! use std::collections::HashMap;
//!
//! let ints = HashMap::from([("first".to_string(), 34i64), ("second".to_string(), 12)]);
//! let floats = HashMap::from([("first".to_string(), 35.98f64), ("second".to_string(), 26.99)]);
//!
//! assert_eq!(sum_ints(&ints), 46);
//! assert_eq!(sum_ints_or_floats::<String, i64>(&ints), 46);
//! assert_eq!(sum_ints_or_floats(&ints), 46);
//! assert_eq!(sum_numbers(&ints), 46);
//! assert!((sum_numbers(&floats) - 62.97).abs() < 1e-9);
//!
//! let report = SumReport::build(&Scenario::default());
//! println!("{}", report);
//! ```

pub mod domain;
pub mod numeric;
pub mod report;
pub mod sums;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Scenario, ScenarioError, ScenarioResult};
    pub use crate::numeric::{Int64OrFloat64, Number, NumericAccumulator, NumericKind};
    pub use crate::report::{CallStyle, ReportLine, SumReport};
    pub use crate::sums::{sum_floats, sum_ints, sum_ints_or_floats, sum_numbers};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn test_end_to_end_report() {
        let scenario = Scenario::default();
        scenario.validate().unwrap();

        let report = SumReport::build(&scenario);

        assert_eq!(
            report.to_string(),
            "Non-Generic Sums: 46 and 62.97\n\
             Generic Sums: 46 and 62.97\n\
             Generic Sums, type parameters inferred: 46 and 62.97\n\
             Generic Sums with Constraint: 46 and 62.97"
        );
        assert!(report.is_consistent());
    }

    #[test]
    fn test_all_styles_agree_on_larger_scenario() {
        let scenario = (0..100i64).fold(Scenario::empty(), |s, i| {
            s.with_int(format!("k{}", i), i * 7 - 300)
                .with_float(format!("k{}", i), i as f64 * 0.25 - 10.0)
        });

        let report = SumReport::build(&scenario);
        let expected_ints: i64 = (0..100i64).map(|i| i * 7 - 300).sum();

        assert!(report.is_consistent());
        assert!(report.lines().iter().all(|l| l.int_sum == expected_ints));
        // 0.25 steps are exact in binary, so every order gives the same total
        assert!(report.lines().iter().all(|l| l.float_sum == 237.5));
    }

    #[test]
    fn test_accumulator_matches_map_sums_for_other_containers() {
        let hashed = HashMap::from([("a", 3i64), ("b", -8), ("c", 11)]);
        let ordered: BTreeMap<&str, i64> = hashed.iter().map(|(k, v)| (*k, *v)).collect();

        let acc: NumericAccumulator<i64> = ordered.values().collect();

        assert_eq!(acc.total(), sum_numbers(&hashed));
        assert_eq!(acc.count(), hashed.len());
    }
}
