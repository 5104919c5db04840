// ============================================================================
// Sum Report
// One line per call style, each with the integer and float totals
// ============================================================================

use super::call_style::CallStyle;
use crate::domain::Scenario;
use crate::sums::{sum_floats, sum_ints, sum_ints_or_floats, sum_numbers};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Relative tolerance when comparing float totals across call styles
const FLOAT_TOLERANCE: f64 = 1e-9;

/// Totals produced by one call style.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReportLine {
    pub style: CallStyle,
    pub int_sum: i64,
    pub float_sum: f64,
}

impl ReportLine {
    /// Run `style` against both maps of the scenario.
    pub fn compute(style: CallStyle, scenario: &Scenario) -> Self {
        let (int_sum, float_sum) = match style {
            CallStyle::NonGeneric => (sum_ints(&scenario.ints), sum_floats(&scenario.floats)),
            CallStyle::ExplicitGeneric => (
                sum_ints_or_floats::<String, i64>(&scenario.ints),
                sum_ints_or_floats::<String, f64>(&scenario.floats),
            ),
            CallStyle::InferredGeneric => (
                sum_ints_or_floats(&scenario.ints),
                sum_ints_or_floats(&scenario.floats),
            ),
            CallStyle::Constrained => (sum_numbers(&scenario.ints), sum_numbers(&scenario.floats)),
        };

        Self {
            style,
            int_sum,
            float_sum,
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} and {}", self.style, self.int_sum, self.float_sum)
    }
}

/// The full console report: one [`ReportLine`] per [`CallStyle`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SumReport {
    lines: Vec<ReportLine>,
}

impl SumReport {
    /// Compute every call style against `scenario`, in report order.
    pub fn build(scenario: &Scenario) -> Self {
        let lines: Vec<ReportLine> = CallStyle::ALL
            .iter()
            .map(|style| ReportLine::compute(*style, scenario))
            .collect();

        let report = Self { lines };

        tracing::debug!(
            int_entries = scenario.ints.len(),
            float_entries = scenario.floats.len(),
            "built sum report"
        );
        if !report.is_consistent() {
            tracing::warn!("call styles disagree: {:?}", report.lines);
        }

        report
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    /// True when every call style produced the same totals.
    ///
    /// Integers must match exactly; floats within a relative tolerance,
    /// since traversal order may differ between calls.
    pub fn is_consistent(&self) -> bool {
        let Some(first) = self.lines.first() else {
            return true;
        };

        self.lines.iter().all(|line| {
            let scale = first.float_sum.abs().max(line.float_sum.abs()).max(1.0);
            line.int_sum == first.int_sum
                && (line.float_sum - first.float_sum).abs() <= FLOAT_TOLERANCE * scale
        })
    }

    /// Serialize the report to JSON.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for SumReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_display() {
        let line = ReportLine {
            style: CallStyle::NonGeneric,
            int_sum: 46,
            float_sum: 62.97,
        };
        assert_eq!(line.to_string(), "Non-Generic Sums: 46 and 62.97");
    }

    #[test]
    fn test_default_scenario_report() {
        let report = SumReport::build(&Scenario::default());

        assert_eq!(report.lines().len(), 4);
        for (line, style) in report.lines().iter().zip(CallStyle::ALL) {
            assert_eq!(line.style, style);
            assert_eq!(line.int_sum, 46);
            assert!((line.float_sum - 62.97).abs() < 1e-9);
        }
        assert!(report.is_consistent());
    }

    #[test]
    fn test_empty_scenario_report() {
        let report = SumReport::build(&Scenario::empty());

        assert!(report.is_consistent());
        assert_eq!(
            report.to_string(),
            "Non-Generic Sums: 0 and 0\n\
             Generic Sums: 0 and 0\n\
             Generic Sums, type parameters inferred: 0 and 0\n\
             Generic Sums with Constraint: 0 and 0"
        );
    }

    #[test]
    fn test_inconsistency_detected() {
        let mut report = SumReport::build(&Scenario::default());
        report.lines[2].int_sum += 1;

        assert!(!report.is_consistent());
    }

    #[test]
    fn test_float_rounding_within_tolerance() {
        let mut report = SumReport::build(&Scenario::empty().with_float("a", 0.1));
        report.lines[1].float_sum += f64::EPSILON;

        assert!(report.is_consistent());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_report_to_json() {
        let json = SumReport::build(&Scenario::default()).to_json().unwrap();

        assert!(json.contains("\"NonGeneric\""));
        assert!(json.contains("\"int_sum\":46"));
    }
}
